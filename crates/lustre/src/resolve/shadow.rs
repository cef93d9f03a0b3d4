//! Box-shadow composition.
//!
//! There is no shared elevation scale: each preview picks its own offset and
//! blur (`0 20px 60px` for a raised card, `0 4px 15px` for a button) and its
//! own alpha.

use std::fmt;

use super::alpha::compose_color;
use super::number::format_number;

/// A single `box-shadow` layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: Option<f64>,
    pub color: String,
    pub inset: bool,
}

impl Shadow {
    /// A shadow offset straight down by `y` pixels.
    pub fn new(y: f64, blur: f64, color: impl Into<String>) -> Self {
        Self {
            x: 0.0,
            y,
            blur,
            spread: None,
            color: color.into(),
            inset: false,
        }
    }

    /// A centered glow: no offset, only blur.
    pub fn glow(blur: f64, color: impl Into<String>) -> Self {
        Self::new(0.0, blur, color)
    }

    pub fn offset_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub fn spread(mut self, spread: f64) -> Self {
        self.spread = Some(spread);
        self
    }

    pub fn inset(mut self) -> Self {
        self.inset = true;
        self
    }
}

/// CSS lengths drop the unit on zero: `0`, `4px`.
fn length(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{}px", format_number(v))
    }
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        write!(f, "{} {} {}", length(self.x), length(self.y), length(self.blur))?;
        if let Some(spread) = self.spread {
            write!(f, " {}", length(spread))?;
        }
        write!(f, " {}", self.color)
    }
}

/// Several shadow layers, rendered comma-separated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadowStack(Vec<Shadow>);

impl ShadowStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(mut self, shadow: Shadow) -> Self {
        self.0.push(shadow);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn layers(&self) -> &[Shadow] {
        &self.0
    }
}

impl FromIterator<Shadow> for ShadowStack {
    fn from_iter<T: IntoIterator<Item = Shadow>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ShadowStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        for (i, shadow) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", shadow)?;
        }
        Ok(())
    }
}

/// Builds `0 <y>px <blur>px <color><alpha>` with the alpha taken from an
/// opacity percentage.
///
/// Zero lengths are written unitless, so a zero offset renders as `0`
/// rather than `0px`.
///
/// ```rust
/// use lustre::compose_shadow;
///
/// assert_eq!(compose_shadow(20.0, 60.0, "#6366f1", 20.0), "0 20px 60px #6366f133");
/// assert_eq!(compose_shadow(0.0, 20.0, "#6366f1", 20.0), "0 0 20px #6366f133");
/// ```
pub fn compose_shadow(y: f64, blur: f64, color: &str, percent: f64) -> String {
    Shadow::new(y, blur, compose_color(color, percent)).to_string()
}
