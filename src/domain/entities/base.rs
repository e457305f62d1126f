//! Numeric base entities
//!
//! `Base` is what a caller asks for, `DetectionOutcome` is what the
//! detector infers from an input's character set.

use crate::core::ParseBaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested input base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    Decimal,
    Binary,
    Octal,
    Hex,
    /// Infer the base from the input. Never produced by detection.
    #[default]
    Auto,
}

impl Base {
    /// Concrete bases in the order the form lists them
    pub const CONCRETE: [Base; 4] = [Base::Decimal, Base::Binary, Base::Hex, Base::Octal];

    /// Positional radix, `None` for `Auto`
    pub const fn radix(&self) -> Option<u32> {
        match self {
            Base::Binary => Some(2),
            Base::Octal => Some(8),
            Base::Decimal => Some(10),
            Base::Hex => Some(16),
            Base::Auto => None,
        }
    }

    /// Canonical lowercase name
    pub const fn name(&self) -> &'static str {
        match self {
            Base::Decimal => "decimal",
            Base::Binary => "binary",
            Base::Octal => "octal",
            Base::Hex => "hex",
            Base::Auto => "auto",
        }
    }

    /// Display label used by the converter form
    pub const fn label(&self) -> &'static str {
        match self {
            Base::Decimal => "Desimal",
            Base::Binary => "Biner",
            Base::Octal => "Oktal",
            Base::Hex => "Heksa",
            Base::Auto => "Auto",
        }
    }

    pub const fn is_auto(&self) -> bool {
        matches!(self, Base::Auto)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Base {
    type Err = ParseBaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Base::Auto),
            "decimal" | "dec" | "desimal" | "10" => Ok(Base::Decimal),
            "binary" | "bin" | "biner" | "2" => Ok(Base::Binary),
            "octal" | "oct" | "oktal" | "8" => Ok(Base::Octal),
            "hex" | "hexadecimal" | "heksa" | "heksadesimal" | "16" => Ok(Base::Hex),
            _ => Err(ParseBaseError(s.to_string())),
        }
    }
}

/// Result of inferring a base from an input's character set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionOutcome {
    Binary,
    Octal,
    Decimal,
    Hex,
    /// No digit alphabet matched
    Unknown,
}

impl DetectionOutcome {
    /// Applies the auto-detection fallback: anything undetected is read as decimal.
    pub const fn or_decimal(self) -> Base {
        match self {
            DetectionOutcome::Binary => Base::Binary,
            DetectionOutcome::Octal => Base::Octal,
            DetectionOutcome::Decimal | DetectionOutcome::Unknown => Base::Decimal,
            DetectionOutcome::Hex => Base::Hex,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            DetectionOutcome::Binary => "binary",
            DetectionOutcome::Octal => "octal",
            DetectionOutcome::Decimal => "decimal",
            DetectionOutcome::Hex => "hex",
            DetectionOutcome::Unknown => "unknown",
        }
    }
}

impl From<Base> for DetectionOutcome {
    fn from(base: Base) -> Self {
        match base {
            Base::Binary => DetectionOutcome::Binary,
            Base::Octal => DetectionOutcome::Octal,
            Base::Decimal => DetectionOutcome::Decimal,
            Base::Hex => DetectionOutcome::Hex,
            Base::Auto => DetectionOutcome::Unknown,
        }
    }
}

impl fmt::Display for DetectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radix() {
        assert_eq!(Base::Binary.radix(), Some(2));
        assert_eq!(Base::Octal.radix(), Some(8));
        assert_eq!(Base::Decimal.radix(), Some(10));
        assert_eq!(Base::Hex.radix(), Some(16));
        assert_eq!(Base::Auto.radix(), None);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("AUTO".parse::<Base>(), Ok(Base::Auto));
        assert_eq!("dec".parse::<Base>(), Ok(Base::Decimal));
        assert_eq!("biner".parse::<Base>(), Ok(Base::Binary));
        assert_eq!("8".parse::<Base>(), Ok(Base::Octal));
        assert_eq!(" Hexadecimal ".parse::<Base>(), Ok(Base::Hex));
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "base64".parse::<Base>().unwrap_err();
        assert_eq!(err, ParseBaseError("base64".to_string()));
        assert!(err.to_string().contains("base64"));
    }

    #[test]
    fn test_or_decimal_fallback() {
        assert_eq!(DetectionOutcome::Unknown.or_decimal(), Base::Decimal);
        assert_eq!(DetectionOutcome::Hex.or_decimal(), Base::Hex);
        assert_eq!(DetectionOutcome::Binary.or_decimal(), Base::Binary);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Base::Hex), "hex");
        assert_eq!(format!("{}", DetectionOutcome::Unknown), "unknown");
        assert_eq!(Base::Octal.label(), "Oktal");
    }

    #[test]
    fn test_default_is_auto() {
        assert_eq!(Base::default(), Base::Auto);
    }
}
