//! CLI module

mod commands;
mod interactive;
mod output;

pub use commands::{Cli, OutputFormat};
pub use interactive::run_interactive;
pub use output::{detected_line, render, render_json, render_table};
