//! Number conversion
//!
//! Parses an input in its resolved base and renders the value into every
//! supported base. Stateless: identical arguments give identical output.

use super::detector::{is_in_alphabet, resolve_base};
use crate::core::{ConversionError, Result};
use crate::domain::entities::{Base, ConversionResult, DetectionOutcome};

/// Parses `input` as a non-negative integer in `base`.
///
/// The input is trimmed and must then consist only of digits valid for the
/// resolved radix. Signs, prefixes and separators are rejected, as are values
/// that do not fit in a `u64`.
pub fn parse_to_decimal(input: &str, base: Base) -> Result<u64> {
    let base = resolve_base(input, base);
    let Some(radix) = base.radix() else {
        return Err(ConversionError::invalid_input());
    };

    let digits = input.trim();
    if !is_in_alphabet(digits, radix) {
        tracing::debug!(input = digits, %base, "input has digits outside the alphabet");
        return Err(ConversionError::invalid_input());
    }

    u64::from_str_radix(digits, radix).map_err(|err| {
        tracing::debug!(input = digits, %base, %err, "value out of range");
        ConversionError::invalid_input()
    })
}

/// Converts `input` into all four bases.
///
/// Returns the rendered value together with the base the input was read in,
/// which is the detected base (or decimal) when `base` is `Auto`.
pub fn convert_all(input: &str, base: Base) -> Result<(ConversionResult, DetectionOutcome)> {
    let resolved = resolve_base(input, base);
    let value = parse_to_decimal(input, resolved)?;

    tracing::debug!(value, requested = %base, resolved = %resolved, "converted input");

    Ok((
        ConversionResult::from_value(value),
        DetectionOutcome::from(resolved),
    ))
}
