//! Domain entities for qt5ct.
//!
//! Pure value types with no infrastructure dependencies.  Code in
//! `qt5ct-common` (paths, file I/O, settings) depends on these types, but
//! nothing here depends on the outer layers.

/// RGBA colors and Qt color-name parsing.
pub mod color;

/// The `(group × role) → color` palette grid.
pub mod palette;

/// Registry of live style instances that can be told to reload settings.
pub mod registry;
