//! Application layer
//!
//! Use cases that orchestrate the domain services for a caller.

pub mod dto;
mod convert_number;

pub use convert_number::ConvertNumberUseCase;
