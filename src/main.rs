use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::process::ExitCode;

use baseconv::ConvertNumberUseCase;
use baseconv::presentation::cli::{self, Cli};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let use_case = ConvertNumberUseCase::new();

    let Some(number) = cli.number.as_deref() else {
        cli::run_interactive(&use_case)?;
        return Ok(ExitCode::SUCCESS);
    };

    match use_case.execute(number, &cli.convert_options()) {
        Ok(report) => {
            let rendered = cli::render(&report, cli.output_format())
                .context("Failed to render conversion result")?;
            println!("{}", rendered.trim_end());
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{} {}", style("error:").red().bold(), err);
            Ok(ExitCode::FAILURE)
        }
    }
}
