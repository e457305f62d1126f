pub mod error;

pub use error::{ConversionError, INVALID_INPUT_MESSAGE, ParseBaseError, Result};
