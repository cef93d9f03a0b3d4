//! Hex color parsing.
//!
//! Resolution never validates colors; they are concatenated as authored. This
//! parser exists for callers that want to check a value or turn it into RGB,
//! such as [`validate::check`](crate::validate::check) and terminal swatches.

/// An RGB triplet parsed from a hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Formats as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Parses `#rgb` or `#rrggbb` (case-insensitive, surrounding whitespace
/// ignored).
///
/// ```rust
/// use lustre::{parse_hex, Rgb};
///
/// assert_eq!(parse_hex("#10b981"), Some(Rgb(16, 185, 129)));
/// assert_eq!(parse_hex("#fff"), Some(Rgb(255, 255, 255)));
/// assert_eq!(parse_hex("10b981"), None);
/// ```
pub fn parse_hex(s: &str) -> Option<Rgb> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb(r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(parse_hex("#ff6b35"), Some(Rgb(255, 107, 53)));
        assert_eq!(parse_hex("#000000"), Some(Rgb(0, 0, 0)));
    }

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!(parse_hex("#f80"), Some(Rgb(255, 136, 0)));
    }

    #[test]
    fn test_parse_hex_case_insensitive() {
        assert_eq!(parse_hex("#FF6B35"), Some(Rgb(255, 107, 53)));
        assert_eq!(parse_hex(" #FFF "), Some(Rgb(255, 255, 255)));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(parse_hex("#ff"), None);
        assert_eq!(parse_hex("#ffff"), None);
        assert_eq!(parse_hex("#gggggg"), None);
        assert_eq!(parse_hex("#ffffff80"), None);
        assert_eq!(parse_hex("#ééé"), None);
        assert_eq!(parse_hex("red"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb(16, 185, 129).to_hex(), "#10b981");
        assert_eq!(parse_hex("#ABC").map(Rgb::to_hex), Some("#aabbcc".into()));
    }
}
