//! # qt5ct-core
//!
//! Shared library for qt5ct containing the palette model, the color-scheme
//! file codec, and the style-instance registry.
//!
//! It has zero dependencies on the filesystem, environment variables, or any
//! UI toolkit: everything here operates on in-memory values, so it can be
//! tested on any platform without setup.  Path discovery and file I/O live in
//! the `qt5ct-common` crate.
//!
//! # Architecture overview (for beginners)
//!
//! qt5ct lets users of non-Qt desktops pick the look of Qt applications.  A
//! large part of that look is the *palette*: which color each UI element
//! (window background, text, selection highlight, ...) gets in each
//! interaction state.  This crate defines:
//!
//! - **`domain`** – The value types: [`Color`], [`ColorGroup`], [`ColorRole`],
//!   the [`Palette`] grid, and the [`StyleInstanceRegistry`] that tells live
//!   styles to re-read their settings.
//!
//! - **`format`** – How palettes travel through files.  A minimal
//!   QSettings-compatible INI codec plus the `[ColorScheme]` section layout
//!   that qt5ct color-scheme files use, including the legacy 20-role layout.

pub mod domain;
pub mod format;

// Re-export the most-used types at the crate root so callers can write
// `qt5ct_core::Palette` instead of `qt5ct_core::domain::palette::Palette`.
pub use domain::color::Color;
pub use domain::palette::{ColorGroup, ColorRole, Palette, LEGACY_ROLE_COUNT, ROLE_COUNT};
pub use domain::registry::{InstanceId, StyleInstance, StyleInstanceRegistry};
pub use format::color_scheme::{
    classify_scheme, palette_from_scheme, parse_color_scheme, scheme_from_palette, SchemeFormat,
    COLOR_SCHEME_SECTION,
};
pub use format::ini::{IniDocument, IniError, IniValue, EMPTY_LIST_VALUE};
