//! Free-text content overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-component text overrides keyed by slot name (`title`, `buttonText`,
/// `price`, ...).
///
/// A missing slot falls back to the example copy the component ships with.
/// An empty string is still an override.
///
/// ```rust
/// use lustre::TextContent;
///
/// let content: TextContent = [("title", "Pro plan")].into_iter().collect();
/// assert_eq!(content.slot("title", "Starter"), "Pro plan");
/// assert_eq!(content.slot("price", "$19"), "$19");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextContent {
    slots: BTreeMap<String, String>,
}

impl TextContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the override for `name`, or `fallback` when the slot is absent.
    pub fn slot<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.slots.get(name).map(String::as_str).unwrap_or(fallback)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }

    /// Sets a slot, returning `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.slots.insert(name.into(), text.into());
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TextContent {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            slots: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_override_wins() {
        let content = TextContent::new().with("subtitle", "");
        assert_eq!(content.slot("subtitle", "Fallback"), "");
    }

    #[test]
    fn test_deserialize_from_json() {
        let content: TextContent =
            serde_json::from_str(r#"{"buttonText": "Get started"}"#).unwrap();
        assert_eq!(content.get("buttonText"), Some("Get started"));
        assert_eq!(content.len(), 1);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(TextContent::default().is_empty());
        assert_eq!(TextContent::default().slot("title", "Hello"), "Hello");
    }
}
