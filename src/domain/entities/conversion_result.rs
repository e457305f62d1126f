//! Conversion result entity
//!
//! The four renderings of one non-negative integer.

use super::Base;
use serde::{Deserialize, Serialize};

/// One value rendered in every supported base
///
/// All fields denote the same integer. `binary` and `octal` are plain digit
/// strings, `hex` uses uppercase `A`-`F`, none of them carry a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversionResult {
    pub decimal: String,
    pub binary: String,
    pub octal: String,
    pub hex: String,
}

impl ConversionResult {
    /// Renders `value` into all four bases
    pub fn from_value(value: u64) -> Self {
        Self {
            decimal: value.to_string(),
            binary: format!("{value:b}"),
            octal: format!("{value:o}"),
            hex: format!("{value:X}"),
        }
    }

    /// Rendering for a concrete base, `None` for `Auto`
    pub fn get(&self, base: Base) -> Option<&str> {
        match base {
            Base::Decimal => Some(&self.decimal),
            Base::Binary => Some(&self.binary),
            Base::Octal => Some(&self.octal),
            Base::Hex => Some(&self.hex),
            Base::Auto => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_255() {
        let result = ConversionResult::from_value(255);
        assert_eq!(result.decimal, "255");
        assert_eq!(result.binary, "11111111");
        assert_eq!(result.octal, "377");
        assert_eq!(result.hex, "FF");
    }

    #[test]
    fn test_from_value_zero() {
        let result = ConversionResult::from_value(0);
        assert_eq!(result.decimal, "0");
        assert_eq!(result.binary, "0");
        assert_eq!(result.octal, "0");
        assert_eq!(result.hex, "0");
    }

    #[test]
    fn test_hex_is_uppercase() {
        assert_eq!(ConversionResult::from_value(0xabcdef).hex, "ABCDEF");
    }

    #[test]
    fn test_get() {
        let result = ConversionResult::from_value(10);
        assert_eq!(result.get(Base::Binary), Some("1010"));
        assert_eq!(result.get(Base::Hex), Some("A"));
        assert_eq!(result.get(Base::Auto), None);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_string(&ConversionResult::from_value(255)).unwrap();
        assert_eq!(
            json,
            r#"{"decimal":"255","binary":"11111111","octal":"377","hex":"FF"}"#
        );
    }
}
