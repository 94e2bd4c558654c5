//! RGBA color value and Qt color-name parsing.
//!
//! Color-scheme files store each palette entry as a color *name* string.  The
//! accepted forms are the ones Qt accepts when constructing a color from a
//! string:
//!
//! | Form            | Example           | Notes                               |
//! |-----------------|-------------------|-------------------------------------|
//! | `#RGB`          | `#f0a`            | each digit is repeated (`f` → `ff`) |
//! | `#RRGGBB`       | `#ff00aa`         | opaque                              |
//! | `#AARRGGBB`     | `#80ff00aa`       | alpha first; the form qt5ct writes  |
//! | `#RRRGGGBBB`    | `#fff000aaa`      | 12-bit channels, high 8 bits kept   |
//! | `#RRRRGGGGBBBB` | `#ffff0000aaaa`   | 16-bit channels, high 8 bits kept   |
//! | SVG name        | `darkslategray`   | case-insensitive, spaces ignored    |
//!
//! A string that matches none of these produces an *invalid* color rather
//! than an error, mirroring how a toolkit color constructed from a bad name
//! behaves: it still paints (as opaque black) but reports `is_valid() == false`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned by [`Color::from_str`] when a string is not a color name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color name: {0:?}")]
pub struct ParseColorError(pub String);

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
    valid: bool,
}

impl Color {
    /// The color produced by an unparseable name.
    pub const INVALID: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
        valid: false,
    };

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a,
            valid: true,
        }
    }

    /// Returns a copy of this color with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns `false` for colors built from an unrecognised name.
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Parses a Qt color name, returning `None` if it is not recognised.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        match name.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => lookup_named(name),
        }
    }

    /// Parses a Qt color name, returning [`Color::INVALID`] if it is not
    /// recognised.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or(Self::INVALID)
    }

    /// Formats the color as `#AARRGGBB`.
    pub fn to_argb_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
    }
}

impl Default for Color {
    /// Matches a default-constructed toolkit color: invalid, painting as black.
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_argb_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_argb_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Hex parsing ───────────────────────────────────────────────────────────────

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    // All remaining branches slice on ASCII boundaries.
    let channel = |start: usize, len: usize| u32::from_str_radix(&hex[start..start + len], 16).ok();

    match hex.len() {
        3 => {
            let r = channel(0, 1)? as u8;
            let g = channel(1, 1)? as u8;
            let b = channel(2, 1)? as u8;
            Some(Color::rgb(r * 17, g * 17, b * 17))
        }
        6 => Some(Color::rgb(
            channel(0, 2)? as u8,
            channel(2, 2)? as u8,
            channel(4, 2)? as u8,
        )),
        8 => Some(Color::rgba(
            channel(2, 2)? as u8,
            channel(4, 2)? as u8,
            channel(6, 2)? as u8,
            channel(0, 2)? as u8,
        )),
        9 => Some(Color::rgb(
            (channel(0, 3)? >> 4) as u8,
            (channel(3, 3)? >> 4) as u8,
            (channel(6, 3)? >> 4) as u8,
        )),
        12 => Some(Color::rgb(
            (channel(0, 4)? >> 8) as u8,
            (channel(4, 4)? >> 8) as u8,
            (channel(8, 4)? >> 8) as u8,
        )),
        _ => None,
    }
}

// ── Named colors ──────────────────────────────────────────────────────────────

fn lookup_named(name: &str) -> Option<Color> {
    let key: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if key == "transparent" {
        return Some(Color::TRANSPARENT);
    }
    NAMED_COLORS
        .binary_search_by(|(n, _)| (*n).cmp(key.as_str()))
        .ok()
        .map(|i| {
            let rgb = NAMED_COLORS[i].1;
            Color::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
        })
}

/// SVG 1.0 color keywords, sorted for binary search.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

// ── Tests ─────────────────────────────────────────────────────────────────────
