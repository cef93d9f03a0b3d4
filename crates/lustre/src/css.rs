//! Export a customization as CSS custom properties.
//!
//! Each non-flag schema field becomes one `--kebab-case` property holding its
//! resolved value, followed by derived properties for the gradient and the
//! glass panel colors. Flags and the code generation targets (`framework`,
//! `styling`) are not style and are left out.
//!
//! ```rust
//! use lustre::{CssVariables, Customization};
//!
//! let c = Customization::new().with("borderRadius", "12");
//! let css = CssVariables::new(&c).selector(".preview").to_string();
//!
//! assert!(css.starts_with(".preview {\n"));
//! assert!(css.contains("  --border-radius: 12px;\n"));
//! assert!(css.contains("  --gradient: linear-gradient(135deg, #10b981, #06b6d4);\n"));
//! ```

use std::fmt;

use crate::model::Customization;
use crate::resolve::Resolver;
use crate::schema::{Field, FieldKind};

const NOT_STYLE: [Field; 2] = [Field::Framework, Field::Styling];

/// Renders a customization as a CSS rule of custom properties.
#[derive(Debug, Clone)]
pub struct CssVariables<'a> {
    resolver: Resolver<'a>,
    selector: String,
}

impl<'a> CssVariables<'a> {
    /// Targets `:root` by default.
    pub fn new(customization: &'a Customization) -> Self {
        Self {
            resolver: customization.resolver(),
            selector: ":root".to_string(),
        }
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// The `(property, value)` pairs in output order.
    pub fn declarations(&self) -> Vec<(String, String)> {
        let r = &self.resolver;
        let mut out: Vec<(String, String)> = Field::all()
            .filter(|field| !NOT_STYLE.contains(field))
            .filter_map(|field| {
                let value = match field.kind() {
                    FieldKind::Flag => return None,
                    FieldKind::Color | FieldKind::Text => r.text(field).to_string(),
                    FieldKind::Integer | FieldKind::Percent | FieldKind::Float => {
                        r.length(field)
                    }
                };
                Some((property_name(field.key()), value))
            })
            .collect();

        out.push(("--gradient".to_string(), r.gradient()));
        out.push(("--glass-fill".to_string(), r.glass_fill()));
        out.push(("--glass-border".to_string(), r.glass_border()));
        out
    }
}

impl fmt::Display for CssVariables<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for (name, value) in self.declarations() {
            writeln!(f, "  {}: {};", name, value)?;
        }
        writeln!(f, "}}")
    }
}

/// Converts a camelCase key into a custom property name:
/// `glassBorderOpacity` becomes `--glass-border-opacity`.
pub fn property_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    out.push_str("--");
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
