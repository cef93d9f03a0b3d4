//! Numeric parsing with fallback.
//!
//! Configuration values are strings typed by a slider or text box, so they can
//! be empty, partially numeric (`"12px"`) or plain garbage. Parsing reads the
//! longest numeric prefix, the way a browser's `parseInt`/`parseFloat` does,
//! and substitutes the caller's fallback whenever that prefix is missing or
//! not finite. The result is never `NaN` or infinite.

/// Which numeric grammar a field uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    /// Optional sign and decimal digits: `"15"`, `"15.9"` reads as `15`.
    Integer,
    /// Optional sign, digits, fraction and exponent: `"1.05"`, `"2e1"`.
    Float,
}

/// Resolves an integer-style field, returning `fallback` when `raw` is
/// absent, empty or has no numeric prefix.
///
/// ```rust
/// use lustre::resolve_number;
///
/// assert_eq!(resolve_number(Some("24"), 8.0), 24.0);
/// assert_eq!(resolve_number(Some("12px"), 8.0), 12.0);
/// assert_eq!(resolve_number(Some("abc"), 8.0), 8.0);
/// assert_eq!(resolve_number(None, 8.0), 8.0);
/// ```
pub fn resolve_number(raw: Option<&str>, fallback: f64) -> f64 {
    resolve_number_as(raw, fallback, NumberStyle::Integer)
}

/// Resolves a float-style field such as `hoverScale`.
///
/// ```rust
/// use lustre::resolve_float;
///
/// assert_eq!(resolve_float(Some("1.1"), 1.05), 1.1);
/// assert_eq!(resolve_float(Some(""), 1.05), 1.05);
/// ```
pub fn resolve_float(raw: Option<&str>, fallback: f64) -> f64 {
    resolve_number_as(raw, fallback, NumberStyle::Float)
}

/// Resolves `raw` with an explicit [`NumberStyle`].
pub fn resolve_number_as(raw: Option<&str>, fallback: f64, style: NumberStyle) -> f64 {
    let parsed = raw.and_then(|s| match style {
        NumberStyle::Integer => parse_int_prefix(s),
        NumberStyle::Float => parse_float_prefix(s),
    });
    match parsed {
        Some(n) if n.is_finite() => n,
        _ => fallback,
    }
}

/// Parses the leading base-10 integer of `s`, ignoring leading whitespace.
///
/// Returns `None` if no digit follows the optional sign.
pub fn parse_int_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (sign_len, rest) = split_sign(s);
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse::<f64>().ok()
}

/// Parses the leading decimal number of `s`, ignoring leading whitespace.
///
/// Accepts an optional sign, integer digits, a fractional part and an
/// exponent. At least one digit must appear before the exponent.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let (mut end, _) = split_sign(s);

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // An exponent only counts when digits follow it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn split_sign(s: &str) -> (usize, &str) {
    match s.as_bytes().first() {
        Some(b'+' | b'-') => (1, &s[1..]),
        _ => (0, s),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Formats a number the way it appears in CSS: no trailing `.0`, no `-0`.
///
/// ```rust
/// use lustre::format_number;
///
/// assert_eq!(format_number(12.0), "12");
/// assert_eq!(format_number(1.5), "1.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{}", n)
}
