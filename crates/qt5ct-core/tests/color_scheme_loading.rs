//! Integration tests for color-scheme loading through the public API.
//!
//! These tests feed realistic scheme files (as qt5ct ships and writes them)
//! through `parse_color_scheme` and check the resulting palettes.

use qt5ct_core::{
    format::parse_color_scheme, scheme_from_palette, Color, ColorGroup, ColorRole, Palette,
    ROLE_COUNT,
};

/// The "darker" scheme shipped with qt5ct (current 21-role layout).
const DARKER_SCHEME: &str = "\
[ColorScheme]
active_colors=#ffffffff, #ff424245, #ff979797, #ff5e5c64, #ff306cb0, #ff3f3f36, #ffffffff, #ffffffff, #ffffffff, #ff3d3d3d, #ff222020, #ffe7e4e0, #ff12608a, #fff9f9f9, #ff0986d3, #ffa70b06, #ff5c5b5a, #ffffffff, #ff3f3f36, #ffffffff, #80ffffff
disabled_colors=#ff808080, #ff424245, #ff979797, #ff5e5c64, #ff306cb0, #ff3f3f36, #ff808080, #ffffffff, #ff808080, #ff3d3d3d, #ff222020, #ffe7e4e0, #ff12608a, #ff808080, #ff0986d3, #ffa70b06, #ff5c5b5a, #ffffffff, #ff3f3f36, #ffffffff, #80ffffff
inactive_colors=#ffffffff, #ff424245, #ff979797, #ff5e5c64, #ff306cb0, #ff3f3f36, #ffffffff, #ffffffff, #ffffffff, #ff3d3d3d, #ff222020, #ffe7e4e0, #ff12608a, #fff9f9f9, #ff0986d3, #ffa70b06, #ff5c5b5a, #ffffffff, #ff3f3f36, #ffffffff, #80ffffff
";

/// A scheme written before `PlaceholderText` existed (20 roles).
const LEGACY_SCHEME: &str = "\
[ColorScheme]
active_colors=#000000, #efefef, #ffffff, #cacaca, #9f9f9f, #b8b8b8, #202060, #ffffff, #000000, #ffffff, #efefef, #767676, #308cc6, #ffffff, #0000ff, #ff00ff, #f7f7f7, #000000, #ffffdc, #000000
inactive_colors=#000000, #efefef, #ffffff, #cacaca, #9f9f9f, #b8b8b8, #000000, #ffffff, #000000, #ffffff, #efefef, #767676, #308cc6, #ffffff, #0000ff, #ff00ff, #f7f7f7, #000000, #ffffdc, #000000
disabled_colors=#bebebe, #efefef, #ffffff, #cacaca, #9f9f9f, #b8b8b8, #bebebe, #ffffff, #bebebe, #efefef, #efefef, #b1b1b1, #919191, #ffffff, #0000ff, #ff00ff, #f7f7f7, #000000, #ffffdc, #000000
";

#[test]
fn test_shipped_scheme_loads_every_group() {
    let palette = parse_color_scheme(DARKER_SCHEME, &Palette::default());

    assert_eq!(
        palette.color(ColorGroup::Active, ColorRole::Window),
        Color::rgb(0x22, 0x20, 0x20)
    );
    assert_eq!(
        palette.color(ColorGroup::Disabled, ColorRole::Text),
        Color::rgb(0x80, 0x80, 0x80)
    );
    assert_eq!(
        palette.color(ColorGroup::Inactive, ColorRole::PlaceholderText),
        Color::rgba(0xff, 0xff, 0xff, 0x80)
    );
}

#[test]
fn test_key_order_in_file_does_not_matter() {
    // DARKER_SCHEME lists disabled before inactive.
    let palette = parse_color_scheme(DARKER_SCHEME, &Palette::default());
    assert_eq!(
        palette.color(ColorGroup::Inactive, ColorRole::WindowText),
        Color::WHITE
    );
    assert_eq!(
        palette.color(ColorGroup::Disabled, ColorRole::WindowText),
        Color::rgb(0x80, 0x80, 0x80)
    );
}

#[test]
fn test_legacy_scheme_gets_half_transparent_placeholder() {
    let palette = parse_color_scheme(LEGACY_SCHEME, &Palette::filled(Color::WHITE));

    let expected = Color::rgba(0x20, 0x20, 0x60, 128);
    for group in ColorGroup::ALL {
        assert_eq!(palette.color(group, ColorRole::PlaceholderText), expected);
    }
}

#[test]
fn test_truncated_scheme_falls_back() {
    let fallback = Palette::filled(Color::rgb(1, 2, 3));
    let truncated = "[ColorScheme]\nactive_colors=#000000, #ffffff\n";

    assert_eq!(parse_color_scheme(truncated, &fallback), fallback);
}

#[test]
fn test_empty_file_falls_back() {
    let fallback = Palette::default();
    assert_eq!(parse_color_scheme("", &fallback), fallback);
}

#[test]
fn test_written_scheme_has_full_role_count() {
    let doc = scheme_from_palette(&Palette::default());
    for key in ["active_colors", "inactive_colors", "disabled_colors"] {
        assert_eq!(doc.string_list("ColorScheme", key).len(), ROLE_COUNT);
    }
}
