//! qt5ct-common library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the `qt5ct-info` binary share the same module tree.
//!
//! # What does qt5ct-common do? (for beginners)
//!
//! `qt5ct-core` knows what a palette *is*; this crate knows where qt5ct's
//! files *live* and how to read them:
//!
//! 1. Finds the user config directory, the main `qt5ct.conf`, and the user
//!    and shared directories holding stylesheets, color schemes, and icons,
//!    following the XDG base-directory conventions.
//! 2. Creates the user config on first run by copying the system-wide
//!    template, if one is installed.
//! 3. Expands `~` and `$VARIABLE/` tokens inside paths stored in settings.
//! 4. Loads and saves color-scheme files, falling back to a caller-supplied
//!    palette whenever a file is missing or malformed.
//! 5. Reads the `[Appearance]` settings and turns them into the palette that
//!    should currently be in effect.

/// Application layer: use cases composed from the infrastructure.
pub mod application;

/// Infrastructure layer: standard locations, paths, and file storage.
pub mod infrastructure;

pub use infrastructure::locations::{FixedLocations, StandardLocations, XdgLocations};
pub use infrastructure::path_tokens::{resolve_path, resolve_path_with};
pub use infrastructure::paths::PathResolver;
pub use infrastructure::storage::color_schemes::{
    list_color_schemes, list_style_sheets, load_color_scheme, save_color_scheme,
};
pub use infrastructure::storage::config::{init_config, try_init_config, ConfigError, InitOutcome};
pub use infrastructure::storage::settings::Qt5ctSettings;
