//! Interactive prompt loop

use crate::application::ConvertNumberUseCase;
use crate::application::dto::ConvertOptions;
use crate::domain::entities::Base;
use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use super::output::{detected_line, render_table};

/// Entries of the base selector, `Auto` first
const BASE_CHOICES: [Base; 5] = [
    Base::Auto,
    Base::Decimal,
    Base::Binary,
    Base::Hex,
    Base::Octal,
];

/// Prompts for numbers until an empty line or `q`.
///
/// Conversion errors are printed and the loop continues with the next prompt.
pub fn run_interactive(use_case: &ConvertNumberUseCase) -> Result<()> {
    let theme = ColorfulTheme::default();
    let items: Vec<String> = BASE_CHOICES.iter().map(base_choice_label).collect();

    println!();
    println!("{}", style("Converter - Desimal / Biner / Heksa / Oktal").cyan().bold());
    println!("Leave the input empty or type q to quit.");

    loop {
        println!();
        let input: String = Input::with_theme(&theme)
            .with_prompt("Input")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        let trimmed = input.trim();
        if is_quit(trimmed) {
            return Ok(());
        }

        println!("{}", style(detected_line(trimmed, use_case.preview(trimmed))).dim());

        let selection = Select::with_theme(&theme)
            .with_prompt("Input base")
            .items(&items)
            .default(0)
            .interact()
            .context("Failed to select base")?;

        match handle_line(use_case, trimmed, BASE_CHOICES[selection]) {
            LineOutcome::Quit => return Ok(()),
            LineOutcome::Converted(table) => print!("{table}"),
            LineOutcome::Failed(message) => println!("{}", style(message).red()),
        }
    }
}

/// What the prompt loop does with one entered line
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineOutcome {
    Quit,
    Converted(String),
    /// Shown to the user; the loop keeps prompting
    Failed(String),
}

fn is_quit(input: &str) -> bool {
    let input = input.trim();
    input.is_empty() || input.eq_ignore_ascii_case("q")
}

fn handle_line(use_case: &ConvertNumberUseCase, input: &str, base: Base) -> LineOutcome {
    if is_quit(input) {
        return LineOutcome::Quit;
    }

    let options = ConvertOptions::new().with_base(base);
    match use_case.execute(input, &options) {
        Ok(report) => LineOutcome::Converted(render_table(&report)),
        Err(err) => LineOutcome::Failed(err.to_string()),
    }
}

fn base_choice_label(base: &Base) -> String {
    match base.radix() {
        Some(radix) => format!("{} (basis {radix})", base.label()),
        None => base.label().to_string(),
    }
}
