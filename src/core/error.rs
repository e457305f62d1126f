use thiserror::Error;

/// Message carried by every rejected conversion input.
pub const INVALID_INPUT_MESSAGE: &str = "input tidak valid untuk basis yang dipilih";

/// Errors that can occur while parsing or converting a number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("{0}")]
    InvalidInput(String),
}

impl ConversionError {
    pub fn invalid_input() -> Self {
        Self::InvalidInput(INVALID_INPUT_MESSAGE.to_string())
    }
}

/// Error returned when a base name cannot be recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown base '{0}' (expected auto, decimal, binary, octal or hex)")]
pub struct ParseBaseError(pub String);

pub type Result<T> = std::result::Result<T, ConversionError>;
