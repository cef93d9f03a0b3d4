//! Alpha-channel hex suffixes.
//!
//! A preview color is built by appending two hex digits of alpha to a
//! six-digit color: `#6366f1` at 15% opacity becomes `#6366f126`.
//!
//! One user-facing opacity knob usually drives several visual intensities.
//! Callers scale the percentage by a fixed ratio per use (fill, border, glow)
//! before encoding:
//!
//! ```rust
//! use lustre::{compose_color, percent_to_hex_alpha};
//!
//! let glass = 15.0;
//! assert_eq!(percent_to_hex_alpha(glass), "26");
//! assert_eq!(compose_color("#6366f1", glass * 2.0), "#6366f14d");
//! ```
//!
//! Percentages above 100 are not clamped by [`percent_to_hex_alpha`]; they
//! encode to three or more hex digits and yield a color the browser ignores.
//! Use [`percent_to_hex_alpha_clamped`] when the input is not known to be
//! bounded.

/// Encodes an alpha byte value as lowercase hex, left-padded to two digits.
///
/// The value is rounded half up. Negative and non-finite values encode as
/// `"00"`. Values above 255 are not truncated.
///
/// ```rust
/// use lustre::to_hex_alpha;
///
/// assert_eq!(to_hex_alpha(0.0), "00");
/// assert_eq!(to_hex_alpha(20.0), "14");
/// assert_eq!(to_hex_alpha(255.0), "ff");
/// assert_eq!(to_hex_alpha(300.0), "12c");
/// ```
pub fn to_hex_alpha(value: f64) -> String {
    let rounded = (value + 0.5).floor();
    if !rounded.is_finite() || rounded <= 0.0 {
        return "00".to_string();
    }
    format!("{:02x}", rounded as u64)
}

/// Converts an opacity percentage (nominally 0 to 100) into a hex alpha suffix.
///
/// Computes `round(percent * 2.55)` and encodes it with [`to_hex_alpha`].
pub fn percent_to_hex_alpha(percent: f64) -> String {
    to_hex_alpha(percent * 2.55)
}

/// Like [`percent_to_hex_alpha`], but clamps the percentage into `[0, 100]`
/// first so the result is always exactly two hex digits.
pub fn percent_to_hex_alpha_clamped(percent: f64) -> String {
    let percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    percent_to_hex_alpha(percent)
}

/// Appends the alpha suffix for `percent` to a six-digit hex color.
///
/// The color is passed through as authored; no validation is performed.
pub fn compose_color(color: &str, percent: f64) -> String {
    format!("{}{}", color, percent_to_hex_alpha(percent))
}
