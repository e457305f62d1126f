//! Domain entities

mod base;
mod conversion_result;

pub use base::{Base, DetectionOutcome};
pub use conversion_result::ConversionResult;
