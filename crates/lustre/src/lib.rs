//! # Lustre - Customization Style Resolution
//!
//! `lustre` turns a flat, string-valued customization record into concrete
//! CSS values: alpha-blended hex colors, gradients, box shadows and pixel
//! lengths. It is the shared resolution layer behind a catalog of UI
//! component previews, where every button, card and modal derives its look
//! from one set of user-editable knobs.
//!
//! ## Core Concepts
//!
//! - [`Customization`]: the flat `key -> string` record the editor produces
//! - [`Field`] and the [schema]: every known key with its kind, default,
//!   range and unit
//! - [`Resolver`]: field-level access that never fails and never yields `NaN`
//! - Pure building blocks: [`resolve_number`], [`resolve_flag`],
//!   [`percent_to_hex_alpha`], [`compose_color`], [`compose_gradient`],
//!   [`compose_shadow`]
//! - [`CssVariables`]: export as CSS custom properties
//! - [`validate::check`]: opt-in diagnostics for malformed values
//!
//! ## Quick Start
//!
//! ```rust
//! use lustre::{Customization, Field};
//!
//! let c = Customization::new()
//!     .with("primaryColor", "#ff0000")
//!     .with("secondaryColor", "#00ff00")
//!     .with("gradientAngle", "90")
//!     .with("borderRadius", "12");
//!
//! let r = c.resolver();
//! assert_eq!(r.gradient(), "linear-gradient(90deg, #ff0000, #00ff00)");
//! assert_eq!(r.scaled_px(Field::BorderRadius, 1.5), "18px");
//! assert_eq!(r.glass_border(), "#ff00004d");
//! assert_eq!(r.shadow(20.0, 60.0, 0.4).to_string(), "0 20px 60px #ff000014");
//! ```
//!
//! ## Fallbacks
//!
//! Values are strings until resolved. Missing, empty or non-numeric values
//! resolve to the field default; nothing in the resolution path panics or
//! returns an error:
//!
//! ```rust
//! use lustre::{resolve_flag, resolve_number, Customization, Field};
//!
//! assert_eq!(resolve_number(Some("abc"), 8.0), 8.0);
//! assert!(resolve_flag(None));
//!
//! let c = Customization::new().with("shadowIntensity", "lots");
//! assert_eq!(c.resolver().number(Field::ShadowIntensity), 50.0);
//! ```
//!
//! ## Loading
//!
//! ```rust
//! use lustre::Customization;
//!
//! let c = Customization::from_json(r#"{"glassOpacity": 20, "showIcon": false}"#).unwrap();
//! assert_eq!(c.get("glassOpacity"), Some("20"));
//! ```

pub mod css;
mod error;
pub mod model;
pub mod resolve;
pub mod schema;
pub mod validate;

pub use error::{LustreError, Result};

pub use css::CssVariables;
pub use model::{
    preset, ColorPreset, Customization, TextContent, CONFIG_EXTENSIONS, PRESETS, PRESET_KEY,
};
pub use resolve::{
    compose_color, compose_gradient, compose_shadow, format_number, parse_hex,
    percent_to_hex_alpha, percent_to_hex_alpha_clamped, resolve_flag, resolve_float,
    resolve_number, resolve_number_as, to_hex_alpha, ColorStop, Gradient, GradientKind,
    NumberStyle, Resolver, Rgb, Shadow, ShadowStack, DEFAULT_GRADIENT_ANGLE,
};
pub use schema::{Field, FieldKind, FieldSpec, Unit};
pub use validate::{Diagnostic, DiagnosticKind};
