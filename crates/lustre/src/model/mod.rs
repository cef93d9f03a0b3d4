//! The configuration model: customizations, content overrides and presets.

mod content;
mod customization;
mod preset;

pub use content::TextContent;
pub use customization::{Customization, CONFIG_EXTENSIONS};
pub use preset::{preset, ColorPreset, PRESETS, PRESET_FIELDS, PRESET_KEY};
