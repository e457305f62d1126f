pub mod application;
pub mod core;
pub mod domain;
pub mod presentation;

pub use crate::application::ConvertNumberUseCase;
pub use crate::application::dto::{ConversionReport, ConvertOptions};
pub use crate::core::{ConversionError, ParseBaseError};
pub use crate::domain::entities::{Base, ConversionResult, DetectionOutcome};
pub use crate::domain::services::{convert_all, detect_base, parse_to_decimal};
