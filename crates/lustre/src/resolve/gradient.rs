//! Gradient composition.
//!
//! ```rust
//! use lustre::{compose_gradient, Gradient};
//!
//! assert_eq!(
//!     compose_gradient(90.0, &["#ff0000", "#00ff00"]),
//!     "linear-gradient(90deg, #ff0000, #00ff00)"
//! );
//!
//! let glow = Gradient::radial("circle")
//!     .stop("#10b98130")
//!     .stop_at("transparent", 70.0);
//! assert_eq!(
//!     glow.to_string(),
//!     "radial-gradient(circle, #10b98130, transparent 70%)"
//! );
//! ```

use std::fmt;

use super::number::format_number;

/// Angle used when `gradientAngle` is absent or malformed.
pub const DEFAULT_GRADIENT_ANGLE: f64 = 135.0;

/// The gradient function and its leading parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientKind {
    /// `linear-gradient(<angle>deg, ...)`
    Linear { angle: f64 },
    /// `radial-gradient(<shape>, ...)`, e.g. `circle`, `ellipse at top`.
    Radial { shape: String },
    /// `conic-gradient(from <angle>deg, ...)`
    Conic { from: f64 },
}

/// A color stop with an optional position in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub color: String,
    pub position: Option<f64>,
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(p) => write!(f, "{} {}%", self.color, format_number(p)),
            None => f.write_str(&self.color),
        }
    }
}

/// A CSS gradient built from a kind and a list of stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    kind: GradientKind,
    stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn linear(angle: f64) -> Self {
        Self::new(GradientKind::Linear { angle })
    }

    pub fn radial(shape: impl Into<String>) -> Self {
        Self::new(GradientKind::Radial {
            shape: shape.into(),
        })
    }

    pub fn conic(from: f64) -> Self {
        Self::new(GradientKind::Conic { from })
    }

    fn new(kind: GradientKind) -> Self {
        Self {
            kind,
            stops: Vec::new(),
        }
    }

    /// Adds an unpositioned stop.
    pub fn stop(mut self, color: impl Into<String>) -> Self {
        self.stops.push(ColorStop {
            color: color.into(),
            position: None,
        });
        self
    }

    /// Adds a stop at `percent` along the gradient line.
    pub fn stop_at(mut self, color: impl Into<String>, percent: f64) -> Self {
        self.stops.push(ColorStop {
            color: color.into(),
            position: Some(percent),
        });
        self
    }

    /// Adds several unpositioned stops.
    pub fn stops<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for color in colors {
            self = self.stop(color);
        }
        self
    }

    pub fn kind(&self) -> &GradientKind {
        &self.kind
    }

    pub fn color_stops(&self) -> &[ColorStop] {
        &self.stops
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            GradientKind::Linear { angle } => {
                write!(f, "linear-gradient({}deg", format_number(*angle))?
            }
            GradientKind::Radial { shape } => write!(f, "radial-gradient({}", shape)?,
            GradientKind::Conic { from } => {
                write!(f, "conic-gradient(from {}deg", format_number(*from))?
            }
        }
        for stop in &self.stops {
            write!(f, ", {}", stop)?;
        }
        f.write_str(")")
    }
}

/// Builds `linear-gradient(<angle>deg, <stop>, <stop>, ...)`.
pub fn compose_gradient(angle: f64, stops: &[&str]) -> String {
    Gradient::linear(angle).stops(stops.iter().copied()).to_string()
}
