//! Domain layer - Core conversion logic
//!
//! Entities and pure services. No I/O and no shared state.

pub mod entities;
pub mod services;
