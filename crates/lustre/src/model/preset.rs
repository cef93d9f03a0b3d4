//! Built-in color presets.
//!
//! A preset sets the four base colors at once. The customization remembers
//! which preset is active under the `colorPreset` key until one of those
//! colors is edited by hand.

use crate::schema::Field;

/// A named set of base colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    /// Stored under `colorPreset`, e.g. `"ocean"`.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

impl ColorPreset {
    /// The preset's colors paired with the fields they set.
    pub fn colors(&self) -> [(Field, &'static str); 4] {
        [
            (Field::PrimaryColor, self.primary),
            (Field::SecondaryColor, self.secondary),
            (Field::BackgroundColor, self.background),
            (Field::TextColor, self.text),
        ]
    }
}

/// Configuration key holding the active preset.
pub const PRESET_KEY: &str = "colorPreset";

/// Fields whose manual edit clears [`PRESET_KEY`].
pub const PRESET_FIELDS: [Field; 4] = [
    Field::PrimaryColor,
    Field::SecondaryColor,
    Field::BackgroundColor,
    Field::TextColor,
];

pub static PRESETS: &[ColorPreset] = &[
    ColorPreset {
        key: "terminal",
        name: "Terminal",
        primary: "#10b981",
        secondary: "#06b6d4",
        background: "#0a0a0a",
        text: "#f0fdf4",
    },
    ColorPreset {
        key: "sunset",
        name: "Sunset",
        primary: "#f97316",
        secondary: "#ec4899",
        background: "#1c1917",
        text: "#fef3c7",
    },
    ColorPreset {
        key: "ocean",
        name: "Ocean",
        primary: "#0ea5e9",
        secondary: "#8b5cf6",
        background: "#0c1929",
        text: "#e0f2fe",
    },
    ColorPreset {
        key: "forest",
        name: "Forest",
        primary: "#22c55e",
        secondary: "#84cc16",
        background: "#14190f",
        text: "#ecfccb",
    },
];

/// Looks up a preset by key.
pub fn preset(key: &str) -> Option<&'static ColorPreset> {
    PRESETS.iter().find(|p| p.key == key)
}
