//! `[ColorScheme]` section codec.
//!
//! A qt5ct color-scheme file stores one positional list of color names per
//! interaction state:
//!
//! ```text
//! [ColorScheme]
//! active_colors=#ff000000, #ffefefef, #ffffffff, ...
//! inactive_colors=#ff000000, #ffefefef, #ffffffff, ...
//! disabled_colors=#ffbebebe, #ffefefef, #ffffffff, ...
//! ```
//!
//! Entry `i` of each list is the color of [`ColorRole::ALL`]`[i]`.
//!
//! # Layouts
//!
//! | Entries per list           | Layout             | Result                                   |
//! |----------------------------|--------------------|------------------------------------------|
//! | `>= ROLE_COUNT` (all three)| current            | roles set positionally, extras ignored   |
//! | `== ROLE_COUNT - 1` (all)  | legacy             | first 20 roles set, placeholder derived  |
//! | anything else              | invalid            | caller's fallback palette, unchanged     |
//!
//! The legacy layout predates `PlaceholderText`, which is always the last
//! role.  Loading it derives the placeholder color from the active `Text`
//! color at half opacity (alpha 128) and applies it to all three groups.
//! This relies on the missing role being the last one in [`ColorRole::ALL`];
//! a future role addition must keep `PlaceholderText` at index 20.
//!
//! Nothing here returns an error: a malformed scheme degrades to the fallback
//! palette, which callers use as a deliberate recovery path.

use tracing::debug;

use crate::domain::color::Color;
use crate::domain::palette::{ColorGroup, ColorRole, Palette, LEGACY_ROLE_COUNT, ROLE_COUNT};
use crate::format::ini::{IniDocument, IniValue};

/// Section name holding the three color lists.
pub const COLOR_SCHEME_SECTION: &str = "ColorScheme";
pub const ACTIVE_COLORS_KEY: &str = "active_colors";
pub const INACTIVE_COLORS_KEY: &str = "inactive_colors";
pub const DISABLED_COLORS_KEY: &str = "disabled_colors";

/// Alpha applied to the derived placeholder color of legacy schemes.
pub const LEGACY_PLACEHOLDER_ALPHA: u8 = 128;

/// Which layout a set of color lists follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeFormat {
    /// Every list has at least [`ROLE_COUNT`] entries.
    Current,
    /// Every list has exactly [`LEGACY_ROLE_COUNT`] entries.
    Legacy,
    /// The lists match neither layout.
    Invalid,
}

/// Classifies lists by their lengths, in `[active, inactive, disabled]` order.
pub fn classify_scheme(lengths: [usize; 3]) -> SchemeFormat {
    if lengths.iter().all(|&n| n >= ROLE_COUNT) {
        SchemeFormat::Current
    } else if lengths.iter().all(|&n| n == LEGACY_ROLE_COUNT) {
        SchemeFormat::Legacy
    } else {
        SchemeFormat::Invalid
    }
}

fn key_for(group: ColorGroup) -> &'static str {
    match group {
        ColorGroup::Active => ACTIVE_COLORS_KEY,
        ColorGroup::Inactive => INACTIVE_COLORS_KEY,
        ColorGroup::Disabled => DISABLED_COLORS_KEY,
    }
}

/// Builds a palette from the `[ColorScheme]` section of `doc`.
///
/// Returns a clone of `fallback` when the lists match neither layout.
pub fn palette_from_scheme(doc: &IniDocument, fallback: &Palette) -> Palette {
    let lists = ColorGroup::ALL.map(|group| doc.string_list(COLOR_SCHEME_SECTION, key_for(group)));
    let format = classify_scheme([lists[0].len(), lists[1].len(), lists[2].len()]);

    let role_count = match format {
        SchemeFormat::Current => ROLE_COUNT,
        SchemeFormat::Legacy => LEGACY_ROLE_COUNT,
        SchemeFormat::Invalid => {
            debug!(
                active = lists[0].len(),
                inactive = lists[1].len(),
                disabled = lists[2].len(),
                "color scheme lists match no known layout; using fallback palette"
            );
            return fallback.clone();
        }
    };

    let mut palette = fallback.clone();
    for (group, names) in ColorGroup::ALL.into_iter().zip(&lists) {
        for (role, name) in ColorRole::ALL.iter().take(role_count).zip(names) {
            palette.set_color(group, *role, Color::from_name(name));
        }
    }

    if format == SchemeFormat::Legacy {
        let placeholder = palette.text().with_alpha(LEGACY_PLACEHOLDER_ALPHA);
        palette.set_color_all_groups(ColorRole::PlaceholderText, placeholder);
    }

    palette
}

/// Parses color-scheme file contents.
///
/// Malformed lines are skipped, so a stray line does not hide valid color
/// lists; a scheme without usable lists yields a clone of `fallback`.
pub fn parse_color_scheme(text: &str, fallback: &Palette) -> Palette {
    palette_from_scheme(&IniDocument::parse_lenient(text), fallback)
}

/// Renders `palette` as a document containing a current-layout
/// `[ColorScheme]` section with `#AARRGGBB` entries.
pub fn scheme_from_palette(palette: &Palette) -> IniDocument {
    let mut doc = IniDocument::new();
    for group in ColorGroup::ALL {
        let names = palette.group(group).iter().map(Color::to_argb_hex).collect();
        doc.set(COLOR_SCHEME_SECTION, key_for(group), IniValue::List(names));
    }
    doc
}

// ── Tests ─────────────────────────────────────────────────────────────────────
