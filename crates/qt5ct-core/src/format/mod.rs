//! File formats used by qt5ct.
//!
//! Layout:
//! ```text
//! ini.rs           -- QSettings-compatible INI reader/writer (sections, list values)
//! color_scheme.rs  -- [ColorScheme] section <-> Palette, current and legacy layouts
//! ```

pub mod color_scheme;
pub mod ini;

pub use color_scheme::{palette_from_scheme, parse_color_scheme, scheme_from_palette, SchemeFormat};
pub use ini::{IniDocument, IniError, IniValue};
