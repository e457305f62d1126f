//! Convert number use case
//!
//! Runs one conversion and packages the result with the base it was read in.

use crate::application::dto::{ConversionReport, ConvertOptions};
use crate::core::Result;
use crate::domain::entities::DetectionOutcome;
use crate::domain::services::{convert_all, detect_base};

/// Convert number use case
///
/// Holds no state between calls; the caller owns whatever it displays.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConvertNumberUseCase;

impl ConvertNumberUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Executes the conversion
    pub fn execute(&self, input: &str, options: &ConvertOptions) -> Result<ConversionReport> {
        let input = input.trim();

        match convert_all(input, options.base) {
            Ok((result, detected)) => {
                tracing::info!(input, requested = %options.base, %detected, "conversion succeeded");
                Ok(ConversionReport {
                    input: input.to_string(),
                    requested: options.base,
                    detected,
                    result,
                })
            }
            Err(err) => {
                tracing::warn!(input, requested = %options.base, %err, "conversion failed");
                Err(err)
            }
        }
    }

    /// Detection hint for input that has not been converted yet
    pub fn preview(&self, input: &str) -> DetectionOutcome {
        detect_base(input)
    }
}
