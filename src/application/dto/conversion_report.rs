//! Conversion report DTO

use crate::domain::entities::{Base, ConversionResult, DetectionOutcome};
use serde::Serialize;

/// Outcome of one conversion, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Trimmed input
    pub input: String,
    /// Base the caller asked for
    pub requested: Base,
    /// Base the input was read in
    pub detected: DetectionOutcome,
    pub result: ConversionResult,
}

impl ConversionReport {
    /// True when the base was inferred rather than given
    pub fn was_detected(&self) -> bool {
        self.requested.is_auto()
    }
}
