//! Data Transfer Objects

mod conversion_report;
mod convert_options;

pub use conversion_report::ConversionReport;
pub use convert_options::ConvertOptions;
