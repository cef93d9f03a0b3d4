//! The customization record.
//!
//! A [`Customization`] is a flat map from configuration key to string value.
//! Every visual property of a preview is derived from it through the
//! [`Resolver`](crate::Resolver). Values stay strings until they are resolved,
//! so the record holds exactly what the editor produced, malformed or not.
//!
//! # Loading
//!
//! Customizations load from YAML or JSON documents holding a single flat map.
//! Scalars of any type are accepted and stored as their string rendering;
//! `null` leaves the key absent.
//!
//! ```rust
//! use lustre::Customization;
//!
//! let c = Customization::from_yaml(r##"
//! primaryColor: "#6366f1"
//! borderRadius: 12
//! hoverScale: 1.1
//! showRating: false
//! surfaceColor: ~
//! "##).unwrap();
//!
//! assert_eq!(c.get("borderRadius"), Some("12"));
//! assert_eq!(c.get("hoverScale"), Some("1.1"));
//! assert_eq!(c.get("showRating"), Some("false"));
//! assert!(!c.contains("surfaceColor"));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::preset::{preset, ColorPreset, PRESET_FIELDS, PRESET_KEY};
use crate::error::{LustreError, Result};
use crate::resolve::Resolver;
use crate::schema::Field;

/// File extensions recognized by [`Customization::from_file`].
pub const CONFIG_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// A flat, string-valued customization record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "BTreeMap<String, String>")]
pub struct Customization {
    values: BTreeMap<String, String>,
}

/// A scalar as it appears in a YAML/JSON document.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    fn into_string(self) -> String {
        match self {
            RawValue::Bool(b) => b.to_string(),
            RawValue::Int(n) => n.to_string(),
            RawValue::Float(n) => n.to_string(),
            RawValue::Text(s) => s,
        }
    }
}

impl<'de> Deserialize<'de> for Customization {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Option<RawValue>>::deserialize(deserializer)?;
        Ok(Self {
            values: raw
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v.into_string())))
                .collect(),
        })
    }
}

impl From<Customization> for BTreeMap<String, String> {
    fn from(c: Customization) -> Self {
        c.values
    }
}

impl Customization {
    /// Creates an empty customization; every field resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a customization holding every schema field at its default.
    pub fn defaults() -> Self {
        Field::all()
            .map(|field| (field.key(), field.spec().default))
            .collect()
    }

    /// Parses a customization from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a customization from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a customization file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns [`LustreError::UnsupportedFormat`] for unknown extensions,
    /// [`LustreError::Read`] if the file cannot be read and
    /// [`LustreError::Parse`] if its content is not a flat map.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .filter(|e| CONFIG_EXTENSIONS.contains(&e.as_str()))
            .ok_or_else(|| LustreError::UnsupportedFormat(path.to_path_buf()))?;

        let content = std::fs::read_to_string(path).map_err(|source| LustreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = if ext == "json" {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };
        let customization = parsed.map_err(|e| e.at_path(path))?;

        tracing::debug!(
            path = %path.display(),
            fields = customization.len(),
            "loaded customization"
        );
        Ok(customization)
    }

    /// Returns the raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the raw value for a schema field.
    pub fn field(&self, field: Field) -> Option<&str> {
        self.get(field.key())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Sets `key` to `value`.
    ///
    /// Editing one of the preset colors by hand clears the active preset
    /// marker, since the colors no longer match it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if PRESET_FIELDS.iter().any(|f| f.key() == key) {
            self.values.remove(PRESET_KEY);
        }
        self.values.insert(key, value.into());
    }

    /// Sets `key` to `value`, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Removes `key`, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    /// Overlays `other` onto this customization; keys in `other` win.
    ///
    /// Like [`set`](Self::set), overlaying a preset color clears the active
    /// preset marker unless `other` carries a marker of its own.
    pub fn merge(&mut self, other: &Customization) {
        let recolors = PRESET_FIELDS.iter().any(|f| other.contains(f.key()));
        if recolors && !other.contains(PRESET_KEY) {
            self.values.remove(PRESET_KEY);
        }
        for (k, v) in &other.values {
            self.values.insert(k.clone(), v.clone());
        }
    }

    /// Returns a copy of `self` with `other` merged on top.
    pub fn merged(&self, other: &Customization) -> Self {
        let mut out = self.clone();
        out.merge(other);
        out
    }

    /// Writes the preset's four colors and marks it active.
    pub fn apply_preset(&mut self, preset: &ColorPreset) {
        for (field, color) in preset.colors() {
            self.values.insert(field.key().to_string(), color.to_string());
        }
        self.values
            .insert(PRESET_KEY.to_string(), preset.key.to_string());
        tracing::debug!(preset = preset.key, "applied color preset");
    }

    /// Applies the preset registered under `key`, returning `self`.
    pub fn with_preset(mut self, key: &str) -> Result<Self> {
        let p = preset(key).ok_or_else(|| LustreError::UnknownPreset(key.to_string()))?;
        self.apply_preset(p);
        Ok(self)
    }

    /// The preset marked active, if it is a known preset.
    pub fn active_preset(&self) -> Option<&'static ColorPreset> {
        self.get(PRESET_KEY).and_then(preset)
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A resolver over this customization.
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Customization {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Customization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in &self.values {
            writeln!(f, "{}: {}", k, v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_schema() {
        let c = Customization::defaults();
        assert_eq!(c.len(), Field::all().count());
        assert_eq!(c.field(Field::PrimaryColor), Some("#10b981"));
        assert_eq!(c.field(Field::HoverScale), Some("1.05"));
    }

    #[test]
    fn test_from_json_scalars() {
        let c = Customization::from_json(
            r##"{"primaryColor": "#ff0000", "fontSize": 18, "hoverScale": 1.1,
                "showIcon": false, "surfaceColor": null}"##,
        )
        .unwrap();
        assert_eq!(c.get("primaryColor"), Some("#ff0000"));
        assert_eq!(c.get("fontSize"), Some("18"));
        assert_eq!(c.get("hoverScale"), Some("1.1"));
        assert_eq!(c.get("showIcon"), Some("false"));
        assert!(!c.contains("surfaceColor"));
    }

    #[test]
    fn test_from_json_rejects_nested() {
        let err = Customization::from_json(r##"{"colors": {"primary": "#fff"}}"##).unwrap_err();
        assert!(matches!(err, LustreError::Parse { .. }));
    }

    #[test]
    fn test_from_yaml_rejects_sequence_root() {
        assert!(Customization::from_yaml("- a\n- b\n").is_err());
    }

    #[test]
    fn test_from_yaml_empty_document() {
        assert!(Customization::from_yaml("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_serialize_is_flat() {
        let c = Customization::new().with("borderRadius", "8");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"borderRadius":"8"}"#);
    }

    #[test]
    fn test_merge_right_wins() {
        let mut base = Customization::new()
            .with("borderRadius", "8")
            .with("fontSize", "16");
        base.merge(&Customization::new().with("fontSize", "20"));
        assert_eq!(base.get("borderRadius"), Some("8"));
        assert_eq!(base.get("fontSize"), Some("20"));
    }

    #[test]
    fn test_merge_preset_color_clears_marker() {
        let mut c = Customization::new().with_preset("ocean").unwrap();
        c.merge(&Customization::new().with("borderRadius", "4"));
        assert_eq!(c.active_preset().map(|p| p.key), Some("ocean"));

        c.merge(&Customization::new().with("textColor", "#ffffff"));
        assert!(c.active_preset().is_none());
        assert!(!c.contains(PRESET_KEY));
    }

    #[test]
    fn test_merge_keeps_incoming_marker() {
        let base = Customization::new().with_preset("ocean").unwrap();
        let merged = base.merged(&Customization::new().with_preset("forest").unwrap());
        assert_eq!(merged.active_preset().map(|p| p.key), Some("forest"));
        assert_eq!(merged.get("primaryColor"), Some("#22c55e"));
    }

    #[test]
    fn test_apply_preset_marks_active() {
        let c = Customization::new().with_preset("sunset").unwrap();
        assert_eq!(c.get("primaryColor"), Some("#f97316"));
        assert_eq!(c.get("textColor"), Some("#fef3c7"));
        assert_eq!(c.active_preset().map(|p| p.key), Some("sunset"));
    }

    #[test]
    fn test_editing_preset_color_clears_marker() {
        let mut c = Customization::new().with_preset("ocean").unwrap();
        c.set("borderRadius", "4");
        assert!(c.active_preset().is_some());
        c.set("primaryColor", "#123456");
        assert!(c.active_preset().is_none());
        assert!(!c.contains(PRESET_KEY));
    }

    #[test]
    fn test_unknown_preset() {
        let err = Customization::new().with_preset("neon").unwrap_err();
        assert!(matches!(err, LustreError::UnknownPreset(ref k) if k == "neon"));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Customization::from_file("theme.toml").unwrap_err();
        assert!(matches!(err, LustreError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_display_lists_pairs() {
        let c = Customization::new().with("b", "2").with("a", "1");
        assert_eq!(c.to_string(), "a: 1\nb: 2\n");
    }
}
