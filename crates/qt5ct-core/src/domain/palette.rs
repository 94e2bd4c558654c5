//! Palette domain entity.
//!
//! A palette maps every `(ColorGroup, ColorRole)` pair to a [`Color`].  The
//! group is the interaction state of a widget (focused window, background
//! window, disabled control) and the role is the semantic purpose of the
//! color (window background, text, selection highlight, ...).
//!
//! # Role ordering
//!
//! Color-scheme files store each group as a positional list, so the order of
//! [`ColorRole::ALL`] is part of the file format and must never change.  The
//! legacy file layout predates `PlaceholderText` and therefore carries
//! [`LEGACY_ROLE_COUNT`] entries per group.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use super::color::Color;

/// Number of color roles in the current color-scheme layout.
pub const ROLE_COUNT: usize = 21;

/// Number of color roles in the legacy layout (no `PlaceholderText`).
pub const LEGACY_ROLE_COUNT: usize = ROLE_COUNT - 1;

/// Interaction state a palette entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorGroup {
    Active,
    Inactive,
    Disabled,
}

impl ColorGroup {
    /// All groups, in the order color-scheme files list them.
    pub const ALL: [ColorGroup; 3] = [ColorGroup::Active, ColorGroup::Inactive, ColorGroup::Disabled];

    /// Position of this group in [`ColorGroup::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name, as used in scheme keys and palette dumps.
    pub const fn name(self) -> &'static str {
        match self {
            ColorGroup::Active => "active",
            ColorGroup::Inactive => "inactive",
            ColorGroup::Disabled => "disabled",
        }
    }
}

/// Semantic purpose of a palette color.
///
/// The discriminant is the role's position in a color-scheme list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorRole {
    WindowText = 0,
    Button,
    Light,
    Midlight,
    Dark,
    Mid,
    Text,
    BrightText,
    ButtonText,
    Base,
    Window,
    Shadow,
    Highlight,
    HighlightedText,
    Link,
    LinkVisited,
    AlternateBase,
    NoRole,
    ToolTipBase,
    ToolTipText,
    PlaceholderText,
}

impl ColorRole {
    /// All roles in file order.
    pub const ALL: [ColorRole; ROLE_COUNT] = [
        ColorRole::WindowText,
        ColorRole::Button,
        ColorRole::Light,
        ColorRole::Midlight,
        ColorRole::Dark,
        ColorRole::Mid,
        ColorRole::Text,
        ColorRole::BrightText,
        ColorRole::ButtonText,
        ColorRole::Base,
        ColorRole::Window,
        ColorRole::Shadow,
        ColorRole::Highlight,
        ColorRole::HighlightedText,
        ColorRole::Link,
        ColorRole::LinkVisited,
        ColorRole::AlternateBase,
        ColorRole::NoRole,
        ColorRole::ToolTipBase,
        ColorRole::ToolTipText,
        ColorRole::PlaceholderText,
    ];

    /// Position of this role in a color-scheme list.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the role stored at position `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// CamelCase role name.
    pub const fn name(self) -> &'static str {
        match self {
            ColorRole::WindowText => "WindowText",
            ColorRole::Button => "Button",
            ColorRole::Light => "Light",
            ColorRole::Midlight => "Midlight",
            ColorRole::Dark => "Dark",
            ColorRole::Mid => "Mid",
            ColorRole::Text => "Text",
            ColorRole::BrightText => "BrightText",
            ColorRole::ButtonText => "ButtonText",
            ColorRole::Base => "Base",
            ColorRole::Window => "Window",
            ColorRole::Shadow => "Shadow",
            ColorRole::Highlight => "Highlight",
            ColorRole::HighlightedText => "HighlightedText",
            ColorRole::Link => "Link",
            ColorRole::LinkVisited => "LinkVisited",
            ColorRole::AlternateBase => "AlternateBase",
            ColorRole::NoRole => "NoRole",
            ColorRole::ToolTipBase => "ToolTipBase",
            ColorRole::ToolTipText => "ToolTipText",
            ColorRole::PlaceholderText => "PlaceholderText",
        }
    }
}

/// The `(group × role) → color` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [[Color; ROLE_COUNT]; 3],
}

impl Palette {
    /// Creates a palette where every entry is `color`.
    pub fn filled(color: Color) -> Self {
        Self {
            colors: [[color; ROLE_COUNT]; 3],
        }
    }

    /// Returns the color for `role` in `group`.
    pub fn color(&self, group: ColorGroup, role: ColorRole) -> Color {
        self.colors[group.index()][role.index()]
    }

    /// Sets the color for `role` in `group`.
    pub fn set_color(&mut self, group: ColorGroup, role: ColorRole, color: Color) {
        self.colors[group.index()][role.index()] = color;
    }

    /// Sets `role` to `color` in every group.
    pub fn set_color_all_groups(&mut self, role: ColorRole, color: Color) {
        for group in ColorGroup::ALL {
            self.set_color(group, role, color);
        }
    }

    /// The active-group `Text` color.
    pub fn text(&self) -> Color {
        self.color(ColorGroup::Active, ColorRole::Text)
    }

    /// All colors of `group` in role order.
    pub fn group(&self, group: ColorGroup) -> &[Color; ROLE_COUNT] {
        &self.colors[group.index()]
    }
}

impl Default for Palette {
    /// A neutral light palette.
    fn default() -> Self {
        use ColorRole::*;

        let window = Color::rgb(0xef, 0xef, 0xef);
        let mut palette = Self::filled(Color::BLACK);
        let common = [
            (WindowText, Color::BLACK),
            (Button, window),
            (Light, Color::WHITE),
            (Midlight, Color::rgb(0xca, 0xca, 0xca)),
            (Dark, Color::rgb(0x9f, 0x9f, 0x9f)),
            (Mid, Color::rgb(0xb8, 0xb8, 0xb8)),
            (Text, Color::BLACK),
            (BrightText, Color::WHITE),
            (ButtonText, Color::BLACK),
            (Base, Color::WHITE),
            (Window, window),
            (Shadow, Color::rgb(0x76, 0x76, 0x76)),
            (Highlight, Color::rgb(0x30, 0x8c, 0xc6)),
            (HighlightedText, Color::WHITE),
            (Link, Color::rgb(0x00, 0x00, 0xff)),
            (LinkVisited, Color::rgb(0xff, 0x00, 0xff)),
            (AlternateBase, Color::rgb(0xf7, 0xf7, 0xf7)),
            (NoRole, Color::BLACK),
            (ToolTipBase, Color::rgb(0xff, 0xff, 0xdc)),
            (ToolTipText, Color::BLACK),
            (PlaceholderText, Color::BLACK.with_alpha(128)),
        ];
        for (role, color) in common {
            palette.set_color_all_groups(role, color);
        }

        let disabled_text = Color::rgb(0xbe, 0xbe, 0xbe);
        for role in [WindowText, Text, ButtonText] {
            palette.set_color(ColorGroup::Disabled, role, disabled_text);
        }
        palette.set_color(ColorGroup::Disabled, Base, window);
        palette.set_color(ColorGroup::Disabled, Highlight, Color::rgb(0x91, 0x91, 0x91));
        palette.set_color(ColorGroup::Disabled, Shadow, Color::rgb(0xb1, 0xb1, 0xb1));
        palette
    }
}

/// One group rendered as a `role name → color` map.
struct GroupView<'a>(&'a [Color; ROLE_COUNT]);

impl Serialize for GroupView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ROLE_COUNT))?;
        for (role, color) in ColorRole::ALL.iter().zip(self.0.iter()) {
            map.serialize_entry(role.name(), color)?;
        }
        map.end()
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Palette", 3)?;
        for group in ColorGroup::ALL {
            state.serialize_field(group.name(), &GroupView(self.group(group)))?;
        }
        state.end()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
