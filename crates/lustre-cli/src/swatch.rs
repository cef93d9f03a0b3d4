//! Terminal color swatches for hex colors.

use console::{Color, Style};
use lustre::{parse_hex, Rgb};

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256(Rgb(r, g, b): Rgb) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// A two-cell block painted in `color`, followed by the color text.
///
/// Values that are not hex colors are printed without a block. Styling is
/// dropped automatically when stdout is not a terminal.
pub fn swatch(color: &str) -> String {
    match parse_hex(color) {
        Some(rgb) => {
            let block = Style::new().bg(Color::Color256(rgb_to_ansi256(rgb)));
            format!("{} {}", block.apply_to("  "), color)
        }
        None => color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(rgb_to_ansi256(Rgb(255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256(Rgb(0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256(Rgb(0, 0, 255)), 21);
    }

    #[test]
    fn test_grayscale_ramp() {
        assert_eq!(rgb_to_ansi256(Rgb(0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256(Rgb(255, 255, 255)), 231);
        let mid = rgb_to_ansi256(Rgb(128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_swatch_keeps_text() {
        assert!(swatch("#10b981").ends_with("#10b981"));
        assert_eq!(swatch("teal"), "teal");
    }
}
