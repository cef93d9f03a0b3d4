//! Value resolution: raw configuration strings to CSS-ready values.
//!
//! The free functions here are pure and total. They never fail and never
//! produce `NaN`: malformed numbers fall back, colors pass through as authored.
//! [`Resolver`] ties them to a [`Customization`](crate::Customization) and the
//! [schema](crate::schema) defaults.

pub mod alpha;
pub mod color;
pub mod flag;
pub mod gradient;
pub mod number;
mod resolver;
pub mod shadow;

pub use alpha::{compose_color, percent_to_hex_alpha, percent_to_hex_alpha_clamped, to_hex_alpha};
pub use color::{parse_hex, Rgb};
pub use flag::resolve_flag;
pub use gradient::{compose_gradient, ColorStop, Gradient, GradientKind, DEFAULT_GRADIENT_ANGLE};
pub use number::{
    format_number, parse_float_prefix, parse_int_prefix, resolve_float, resolve_number,
    resolve_number_as, NumberStyle,
};
pub use resolver::Resolver;
pub use shadow::{compose_shadow, Shadow, ShadowStack};
