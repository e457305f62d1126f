//! CLI commands using clap

use crate::application::dto::ConvertOptions;
use crate::domain::entities::Base;
use clap::Parser;
use tracing::Level;

/// Baseconv - Number Base Converter
///
/// Converts an integer between decimal, binary, octal and hexadecimal.
/// With no NUMBER it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(name = "baseconv")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert numbers between decimal, binary, octal and hex", long_about = None)]
pub struct Cli {
    /// Number to convert (e.g. 255, FF, 11111111, 377)
    pub number: Option<String>,

    /// Input base: auto, decimal, binary, octal or hex
    #[arg(short, long, default_value = "auto")]
    pub base: Base,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

/// How a conversion is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new().with_base(self.base)
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }

    /// Most detailed log level requested on the command line
    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else {
            Level::WARN
        }
    }
}
