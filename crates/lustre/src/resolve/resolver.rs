//! Field-level resolution against the schema.

use super::alpha::{percent_to_hex_alpha, to_hex_alpha};
use super::flag::resolve_flag;
use super::gradient::Gradient;
use super::number::{format_number, resolve_number_as, NumberStyle};
use super::shadow::Shadow;
use crate::model::Customization;
use crate::schema::{Field, FieldKind};

/// Resolves fields of a borrowed [`Customization`] into CSS values.
///
/// Absent or malformed values resolve to the field's schema default, so
/// every method is total. The resolver holds no state of its own; resolving
/// the same field twice yields the same result.
///
/// ```rust
/// use lustre::{Customization, Field};
///
/// let c = Customization::new()
///     .with("primaryColor", "#6366f1")
///     .with("borderRadius", "abc");
/// let r = c.resolver();
///
/// assert_eq!(r.number(Field::ShadowIntensity), 50.0);
/// assert_eq!(r.px(Field::BorderRadius), "8px");
/// assert_eq!(r.glass_fill(), "#6366f126");
/// assert_eq!(r.gradient(), "linear-gradient(135deg, #6366f1, #06b6d4)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    customization: &'a Customization,
}

impl<'a> Resolver<'a> {
    pub fn new(customization: &'a Customization) -> Self {
        Self { customization }
    }

    pub fn customization(&self) -> &'a Customization {
        self.customization
    }

    /// Resolves a numeric field with its schema style and default.
    ///
    /// Percent fields never resolve below zero. Their upper bound is not
    /// enforced; use [`clamped`](Self::clamped) for that. Non-numeric fields
    /// resolve to `0`.
    pub fn number(&self, field: Field) -> f64 {
        let spec = field.spec();
        let style = spec.kind.number_style().unwrap_or(NumberStyle::Float);
        let raw = self.customization.field(field);
        let parsed = resolve_number_as(raw, f64::NAN, style);

        let value = if parsed.is_nan() {
            let fallback = spec.default_number();
            if let Some(raw) = raw {
                tracing::trace!(field = spec.key, raw, fallback, "malformed value, using default");
            }
            fallback
        } else {
            parsed
        };

        if spec.kind == FieldKind::Percent {
            value.max(0.0)
        } else {
            value
        }
    }

    /// Resolves an arbitrary key with a caller-owned fallback.
    ///
    /// Known float fields parse as floats; everything else parses as an
    /// integer.
    pub fn number_or(&self, key: &str, fallback: f64) -> f64 {
        let style = Field::from_key(key)
            .and_then(|f| f.kind().number_style())
            .unwrap_or(NumberStyle::Integer);
        resolve_number_as(self.customization.get(key), fallback, style)
    }

    /// Resolves a numeric field and clamps it into the schema range.
    pub fn clamped(&self, field: Field) -> f64 {
        field.spec().clamp(self.number(field))
    }

    /// Resolves a flag; an absent flag takes its schema default.
    pub fn flag(&self, field: Field) -> bool {
        resolve_flag(Some(self.raw_or_default(field)))
    }

    /// Resolves a flag by key with no schema involvement: absent is `true`.
    pub fn flag_key(&self, key: &str) -> bool {
        resolve_flag(self.customization.get(key))
    }

    /// The color for `field` as authored, or its schema default when absent.
    pub fn color(&self, field: Field) -> &'a str {
        self.raw_or_default(field)
    }

    /// A verbatim text field such as `fontFamily`.
    pub fn text(&self, field: Field) -> &'a str {
        self.raw_or_default(field)
    }

    fn raw_or_default(&self, field: Field) -> &'a str {
        self.customization
            .field(field)
            .unwrap_or(field.spec().default)
    }

    /// The field as a pixel length, e.g. `"16px"`.
    pub fn px(&self, field: Field) -> String {
        self.scaled_px(field, 1.0)
    }

    /// The field multiplied by `factor` as a pixel length. Outer containers
    /// commonly use `1.5` or `2` times the base border radius.
    pub fn scaled_px(&self, field: Field, factor: f64) -> String {
        format!("{}px", format_number(self.number(field) * factor))
    }

    /// The field with its schema unit appended (`"300ms"`, `"135deg"`).
    pub fn length(&self, field: Field) -> String {
        format!(
            "{}{}",
            format_number(self.number(field)),
            field.spec().unit.suffix()
        )
    }

    /// Alpha suffix for an opacity field scaled by `multiplier`.
    pub fn alpha(&self, field: Field, multiplier: f64) -> String {
        percent_to_hex_alpha(self.number(field) * multiplier)
    }

    /// A color with the alpha of an opacity field appended.
    pub fn tint(&self, color: Field, opacity: Field, multiplier: f64) -> String {
        format!("{}{}", self.color(color), self.alpha(opacity, multiplier))
    }

    /// Primary color at the glass opacity.
    pub fn glass_fill(&self) -> String {
        self.tint(Field::PrimaryColor, Field::GlassOpacity, 1.0)
    }

    /// Primary color at twice the glass opacity, used for panel borders.
    pub fn glass_border(&self) -> String {
        self.tint(Field::PrimaryColor, Field::GlassOpacity, 2.0)
    }

    /// `blur(<blurAmount>px)` for `backdrop-filter`.
    pub fn backdrop_blur(&self) -> String {
        format!("blur({})", self.px(Field::BlurAmount))
    }

    /// Background color at the backdrop opacity, used behind modals.
    pub fn backdrop(&self) -> String {
        self.tint(Field::BackgroundColor, Field::BackdropOpacity, 1.0)
    }

    /// Linear gradient from primary to secondary at `gradientAngle`.
    pub fn gradient(&self) -> String {
        self.gradient_through(&[Field::PrimaryColor, Field::SecondaryColor])
            .to_string()
    }

    /// Linear gradient at `gradientAngle` through the given color fields.
    pub fn gradient_through(&self, colors: &[Field]) -> Gradient {
        Gradient::linear(self.number(Field::GradientAngle))
            .stops(colors.iter().map(|f| self.color(*f)))
    }

    /// A primary-colored shadow whose alpha byte is
    /// `round(shadowIntensity * ratio)`.
    ///
    /// At the default intensity of 50, a ratio of `0.4` gives alpha `0x14`.
    pub fn shadow(&self, y: f64, blur: f64, ratio: f64) -> Shadow {
        let alpha = to_hex_alpha(self.number(Field::ShadowIntensity) * ratio);
        Shadow::new(y, blur, format!("{}{}", self.color(Field::PrimaryColor), alpha))
    }
}
