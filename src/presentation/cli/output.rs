//! Text and JSON rendering of conversion reports

use crate::application::dto::ConversionReport;
use crate::domain::entities::{Base, ConversionResult, DetectionOutcome};

use super::OutputFormat;

/// `Detected: <base>` hint; `-` for empty input, `unknown` when nothing matched
pub fn detected_line(input: &str, outcome: DetectionOutcome) -> String {
    if input.trim().is_empty() {
        "Detected: -".to_string()
    } else {
        format!("Detected: {outcome}")
    }
}

/// Four-row table in form order, each row with its digit count
pub fn render_table(report: &ConversionReport) -> String {
    let mut out = detected_line(&report.input, report.detected);
    out.push('\n');

    for base in Base::CONCRETE {
        let Some(value) = report.result.get(base) else {
            continue;
        };
        let unit = if value.len() == 1 { "digit" } else { "digits" };
        out.push_str(&format!(
            "{:<8} {} ({} {unit})\n",
            base.label(),
            value,
            value.len()
        ));
    }
    out
}

/// JSON object with `decimal`, `binary`, `octal` and `hex` fields
pub fn render_json(result: &ConversionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

pub fn render(report: &ConversionReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => render_json(&report.result),
    }
}
