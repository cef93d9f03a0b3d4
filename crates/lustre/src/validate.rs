//! Opt-in diagnostics for customization values.
//!
//! Resolution tolerates anything, which makes silent mistakes easy: a typo
//! in a number falls back to the default, and an out-of-range opacity yields
//! a color the browser drops. [`check`] reports those cases without changing
//! how anything resolves.

use std::fmt;

use crate::model::Customization;
use crate::resolve::{parse_float_prefix, parse_hex, parse_int_prefix, NumberStyle};
use crate::schema::{Field, FieldKind};

/// What is wrong with a value.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    /// No numeric prefix; the default will be used.
    NotNumeric,
    /// Parsed, but outside the editor's range.
    OutOfRange { value: f64, min: f64, max: f64 },
    /// Not a `#rgb` or `#rrggbb` color.
    InvalidColor,
    /// Neither `true` nor `false`; the flag stays enabled.
    InvalidFlag,
}

/// A problem found in one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub field: Field,
    /// The raw value as stored.
    pub value: String,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.field.key();
        match &self.kind {
            DiagnosticKind::NotNumeric => write!(
                f,
                "{}: '{}' is not a number, using default {}",
                key,
                self.value,
                self.field.spec().default
            ),
            DiagnosticKind::OutOfRange { value, min, max } => write!(
                f,
                "{}: {} is outside {}..={}",
                key, value, min, max
            ),
            DiagnosticKind::InvalidColor => {
                write!(f, "{}: '{}' is not a hex color", key, self.value)
            }
            DiagnosticKind::InvalidFlag => write!(
                f,
                "{}: '{}' is not 'true' or 'false', treated as true",
                key, self.value
            ),
        }
    }
}

/// Checks every present, known field. Unknown keys are ignored.
///
/// ```rust
/// use lustre::{validate, Customization, Field};
///
/// let c = Customization::new()
///     .with("glassOpacity", "500")
///     .with("borderRadius", "abc");
/// let found = validate::check(&c);
///
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].field, Field::BorderRadius);
/// assert_eq!(found[1].field, Field::GlassOpacity);
/// ```
pub fn check(customization: &Customization) -> Vec<Diagnostic> {
    Field::all()
        .filter_map(|field| {
            let raw = customization.field(field)?;
            check_value(field, raw).map(|kind| Diagnostic {
                field,
                value: raw.to_string(),
                kind,
            })
        })
        .collect()
}

fn check_value(field: Field, raw: &str) -> Option<DiagnosticKind> {
    let spec = field.spec();
    match spec.kind {
        FieldKind::Color => parse_hex(raw).is_none().then_some(DiagnosticKind::InvalidColor),
        FieldKind::Flag => {
            (raw != "true" && raw != "false").then_some(DiagnosticKind::InvalidFlag)
        }
        FieldKind::Text => None,
        FieldKind::Integer | FieldKind::Percent | FieldKind::Float => {
            let parsed = match spec.kind.number_style() {
                Some(NumberStyle::Float) => parse_float_prefix(raw),
                _ => parse_int_prefix(raw),
            };
            match parsed.filter(|v| v.is_finite()) {
                None => Some(DiagnosticKind::NotNumeric),
                Some(value) if !spec.in_range(value) => {
                    let (min, max) = spec.range.unwrap_or((value, value));
                    Some(DiagnosticKind::OutOfRange { value, min, max })
                }
                Some(_) => None,
            }
        }
    }
}
