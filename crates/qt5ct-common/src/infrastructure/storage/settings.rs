//! The parts of `qt5ct.conf` that select styles and palettes.
//!
//! ```text
//! [Appearance]
//! color_scheme_path=~/.config/qt5ct/colors/darker.conf
//! custom_palette=true
//! icon_theme=breeze
//! standard_dialogs=default
//! style=Fusion
//!
//! [Interface]
//! stylesheets=$XDG_DATA_HOME/qt5ct/qss/fusion-fixes.qss
//! ```
//!
//! Keys absent from the file keep their defaults, so a first-run or older
//! config file still loads.  Unknown keys and malformed lines are ignored.

use std::path::Path;

use qt5ct_core::IniDocument;
use serde::Serialize;

use super::config::ConfigError;

pub const APPEARANCE_SECTION: &str = "Appearance";
pub const INTERFACE_SECTION: &str = "Interface";

/// Settings read from `qt5ct.conf`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Qt5ctSettings {
    pub appearance: AppearanceSettings,
    pub interface: InterfaceSettings,
}

/// `[Appearance]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppearanceSettings {
    /// Whether `color_scheme_path` replaces the style's own palette.
    pub custom_palette: bool,
    /// Color-scheme file, possibly containing `~` or `$VAR/` tokens.
    pub color_scheme_path: String,
    pub icon_theme: String,
    /// Widget style name (e.g. `Fusion`).
    pub style: String,
    pub standard_dialogs: String,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            custom_palette: false,
            color_scheme_path: String::new(),
            icon_theme: String::new(),
            style: "Fusion".to_string(),
            standard_dialogs: "default".to_string(),
        }
    }
}

/// `[Interface]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceSettings {
    /// Stylesheet files applied on top of the style, in order.
    pub stylesheets: Vec<String>,
}

impl Qt5ctSettings {
    /// Loads settings from `path`, returning defaults if the file does not
    /// exist.  Malformed lines are skipped as QSettings skips them.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] for file-system errors other than "not
    /// found".
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Self::from_document(&IniDocument::parse_lenient(&text))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::io(path)(e)),
        }
    }

    /// Extracts settings from a parsed document.
    pub fn from_document(doc: &IniDocument) -> Self {
        let defaults = AppearanceSettings::default();
        let text = |key: &str, default: String| {
            doc.string(APPEARANCE_SECTION, key)
                .map(str::to_string)
                .unwrap_or(default)
        };

        let appearance = AppearanceSettings {
            custom_palette: doc
                .bool(APPEARANCE_SECTION, "custom_palette")
                .unwrap_or(defaults.custom_palette),
            color_scheme_path: text("color_scheme_path", defaults.color_scheme_path),
            icon_theme: text("icon_theme", defaults.icon_theme),
            style: text("style", defaults.style),
            standard_dialogs: text("standard_dialogs", defaults.standard_dialogs),
        };

        let stylesheets = doc
            .string_list(INTERFACE_SECTION, "stylesheets")
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            appearance,
            interface: InterfaceSettings { stylesheets },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
