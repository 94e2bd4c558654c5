//! Appearance use cases: from `qt5ct.conf` to a palette and stylesheets.
//!
//! A style instance that is (re)loading its settings performs these steps:
//!
//! ```text
//! qt5ct.conf ──► Qt5ctSettings ──► custom_palette?
//!                                   ├─ no  ─► fallback palette
//!                                   └─ yes ─► resolve_path(color_scheme_path)
//!                                              └─► load_color_scheme(.., fallback)
//! ```
//!
//! The fallback is whatever palette the widget style would use on its own,
//! so a broken or missing scheme file leaves the application looking like
//! it would without qt5ct.

use std::path::PathBuf;

use qt5ct_core::{Palette, StyleInstanceRegistry};
use tracing::{debug, warn};

use crate::infrastructure::paths::PathResolver;
use crate::infrastructure::storage::color_schemes::load_color_scheme;
use crate::infrastructure::storage::settings::Qt5ctSettings;

/// Returns the palette selected by `settings`.
pub fn current_palette(
    resolver: &PathResolver,
    settings: &Qt5ctSettings,
    fallback: &Palette,
) -> Palette {
    let appearance = &settings.appearance;
    if !appearance.custom_palette || appearance.color_scheme_path.is_empty() {
        debug!("custom palette disabled; using fallback palette");
        return fallback.clone();
    }
    let path = resolver.resolve_path(&appearance.color_scheme_path);
    load_color_scheme(&PathBuf::from(path), fallback)
}

/// Resolved paths of the stylesheets selected by `settings`.
pub fn current_style_sheets(resolver: &PathResolver, settings: &Qt5ctSettings) -> Vec<PathBuf> {
    settings
        .interface
        .stylesheets
        .iter()
        .map(|s| PathBuf::from(resolver.resolve_path(s)))
        .collect()
}

/// Reads the user's `qt5ct.conf`, falling back to defaults on any error.
pub fn load_settings(resolver: &PathResolver) -> Qt5ctSettings {
    let path = resolver.config_file();
    Qt5ctSettings::load(&path).unwrap_or_else(|e| {
        warn!("{e}; using default settings");
        Qt5ctSettings::default()
    })
}

/// Reads the user's settings and returns the palette they select.
pub fn load_current_palette(resolver: &PathResolver, fallback: &Palette) -> Palette {
    current_palette(resolver, &load_settings(resolver), fallback)
}

/// Tells every registered style instance that settings changed on disk.
///
/// Returns the number of instances reloaded.
pub fn notify_settings_changed(registry: &mut StyleInstanceRegistry) -> usize {
    let reloaded = registry.reload_style_instance_settings();
    debug!(reloaded, "style instances notified of settings change");
    reloaded
}

// ── Tests ─────────────────────────────────────────────────────────────────────
