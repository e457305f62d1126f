//! Presentation layer
//!
//! Terminal front end over the application use cases.

pub mod cli;
