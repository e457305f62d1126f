//! Domain services
//!
//! Pure detection and conversion functions operating on domain entities.

mod converter;
mod detector;

pub use converter::{convert_all, parse_to_decimal};
pub use detector::{detect_base, resolve_base};
