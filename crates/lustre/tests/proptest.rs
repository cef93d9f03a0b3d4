//! Property-based tests for resolution using proptest.

use lustre::{
    compose_color, percent_to_hex_alpha, percent_to_hex_alpha_clamped, resolve_flag,
    resolve_float, resolve_number, Customization, CssVariables, Field,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn hex_color() -> impl Strategy<Value = String> {
    "#[0-9a-f]{6}"
}

fn is_lower_hex(s: &str) -> bool {
    s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Any string resolves to a finite number.
    #[test]
    fn resolve_number_is_always_finite(raw in any::<String>(), fallback in -1e6f64..1e6) {
        prop_assert!(resolve_number(Some(raw.as_str()), fallback).is_finite());
        prop_assert!(resolve_float(Some(raw.as_str()), fallback).is_finite());
    }

    /// An absent value always yields the fallback.
    #[test]
    fn absent_value_yields_fallback(fallback in -1e6f64..1e6) {
        prop_assert_eq!(resolve_number(None, fallback), fallback);
        prop_assert_eq!(resolve_float(None, fallback), fallback);
    }

    /// Integers written out resolve to themselves.
    #[test]
    fn integer_strings_round_trip(n in -100_000i64..100_000) {
        prop_assert_eq!(resolve_number(Some(n.to_string().as_str()), 0.0), n as f64);
    }

    /// Only the literal "false" disables a flag.
    #[test]
    fn flags_are_opt_out(raw in "[a-zA-Z]{0,8}") {
        prop_assert_eq!(resolve_flag(Some(raw.as_str())), raw != "false");
    }

    /// In-range percentages encode to exactly two lowercase hex digits.
    #[test]
    fn alpha_is_two_digits_in_range(percent in 0.0f64..=100.0) {
        let alpha = percent_to_hex_alpha(percent);
        prop_assert_eq!(alpha.len(), 2);
        prop_assert!(is_lower_hex(&alpha));
    }

    /// Alpha encoding never decreases as opacity grows.
    #[test]
    fn alpha_is_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo = u8::from_str_radix(&percent_to_hex_alpha(lo), 16).unwrap();
        let hi = u8::from_str_radix(&percent_to_hex_alpha(hi), 16).unwrap();
        prop_assert!(lo <= hi);
    }

    /// The clamped variant is two digits for any input.
    #[test]
    fn clamped_alpha_is_always_two_digits(percent in any::<f64>()) {
        let alpha = percent_to_hex_alpha_clamped(percent);
        prop_assert_eq!(alpha.len(), 2);
        prop_assert!(is_lower_hex(&alpha));
    }

    /// Composed colors are eight-digit hex colors.
    #[test]
    fn composed_color_is_eight_digit_hex(color in hex_color(), percent in 0.0f64..=100.0) {
        let composed = compose_color(&color, percent);
        prop_assert_eq!(composed.len(), 9);
        prop_assert!(composed.starts_with(&color));
        prop_assert!(is_lower_hex(&composed[1..]));
    }

    /// Resolving the same customization twice gives identical output.
    #[test]
    fn resolution_is_deterministic(
        values in prop::collection::vec(any::<String>(), 6),
    ) {
        let fields = [
            Field::BorderRadius,
            Field::GlassOpacity,
            Field::HoverScale,
            Field::ShadowIntensity,
            Field::GradientAngle,
            Field::PrimaryColor,
        ];
        let c: Customization = fields
            .iter()
            .map(|f| f.key())
            .zip(values)
            .collect();

        prop_assert_eq!(CssVariables::new(&c).to_string(), CssVariables::new(&c).to_string());
        let r = c.resolver();
        prop_assert_eq!(r.glass_border(), r.glass_border());
        prop_assert_eq!(r.shadow(8.0, 32.0, 0.4), r.shadow(8.0, 32.0, 0.4));
    }

    /// Resolved schema numbers never leave the finite range, whatever the input.
    #[test]
    fn schema_numbers_are_finite(raw in any::<String>()) {
        for field in Field::all().filter(|f| f.kind().is_numeric()) {
            let c = Customization::new().with(field.key(), raw.clone());
            prop_assert!(c.resolver().number(field).is_finite());
        }
    }
}
