//! Base detection
//!
//! Digit alphabets nest (`"11"` is valid binary, octal, decimal and hex), so
//! the narrowest alphabet that accepts the whole input wins.

use crate::domain::entities::{Base, DetectionOutcome};

/// Alphabets tried by the detector, narrowest first
const DETECTION_ORDER: [Base; 4] = [Base::Binary, Base::Octal, Base::Decimal, Base::Hex];

/// Infers the base of `input` from its character set.
///
/// Surrounding whitespace is ignored. Returns `DetectionOutcome::Unknown`
/// for empty input or input with any character outside the hex alphabet.
pub fn detect_base(input: &str) -> DetectionOutcome {
    let trimmed = input.trim();

    DETECTION_ORDER
        .into_iter()
        .find(|base| {
            base.radix()
                .is_some_and(|radix| is_in_alphabet(trimmed, radix))
        })
        .map(DetectionOutcome::from)
        .unwrap_or(DetectionOutcome::Unknown)
}

/// Resolves the base a conversion actually uses.
///
/// `Auto` goes through detection and falls back to decimal when nothing
/// matches. The returned base is never `Auto`.
pub fn resolve_base(input: &str, base: Base) -> Base {
    match base {
        Base::Auto => detect_base(input).or_decimal(),
        concrete => concrete,
    }
}

/// True when `digits` is non-empty and every character is a digit of `radix`.
/// Letter digits are accepted in either case.
pub(crate) fn is_in_alphabet(digits: &str, radix: u32) -> bool {
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(detect_base("11"), DetectionOutcome::Binary);
        assert_eq!(detect_base("17"), DetectionOutcome::Octal);
        assert_eq!(detect_base("19"), DetectionOutcome::Decimal);
        assert_eq!(detect_base("1F"), DetectionOutcome::Hex);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(detect_base(""), DetectionOutcome::Unknown);
        assert_eq!(detect_base("   "), DetectionOutcome::Unknown);
        assert_eq!(detect_base("\t\n"), DetectionOutcome::Unknown);
    }

    #[test]
    fn test_trims_before_detection() {
        assert_eq!(detect_base("  101  "), DetectionOutcome::Binary);
        assert_eq!(detect_base("\tff\n"), DetectionOutcome::Hex);
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(detect_base("12G"), DetectionOutcome::Unknown);
        assert_eq!(detect_base("0x1F"), DetectionOutcome::Unknown);
        assert_eq!(detect_base("-5"), DetectionOutcome::Unknown);
        assert_eq!(detect_base("1 0"), DetectionOutcome::Unknown);
    }

    #[test]
    fn test_resolve_base() {
        assert_eq!(resolve_base("777", Base::Auto), Base::Octal);
        assert_eq!(resolve_base("XYZ", Base::Auto), Base::Decimal);
        assert_eq!(resolve_base("XYZ", Base::Hex), Base::Hex);
    }

    #[test]
    fn test_is_in_alphabet() {
        assert!(is_in_alphabet("0110", 2));
        assert!(!is_in_alphabet("012", 2));
        assert!(is_in_alphabet("aBcD", 16));
        assert!(!is_in_alphabet("", 10));
        assert!(!is_in_alphabet("+1", 10));
    }
}
