//! Convert options DTO

use crate::domain::entities::Base;

/// Options for a single conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Base the input is written in (`Auto` = detect)
    pub base: Base,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input base
    pub fn with_base(mut self, base: Base) -> Self {
        self.base = base;
        self
    }
}
