//! Shared output formatting for check and build results.

use anyhow::Result;
use javats_core::{Diagnostic, DiagnosticReport, SourceUnit, ValidationReport};
use serde::Serialize;

use super::inputs::LoadFault;
use crate::OutputFormat;

/// Print validation results in the specified format.
pub fn print(
    report: &ValidationReport,
    units: &[SourceUnit],
    faults: &[LoadFault],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report, faults),
        OutputFormat::Json => return print_json(report, faults),
        OutputFormat::Compact => print_compact(report, faults),
        OutputFormat::Pretty => print_pretty(report, units, faults),
    }
    Ok(())
}

/// Diagnostics grouped by file, files in the order they were reported.
pub fn print_text(report: &ValidationReport, faults: &[LoadFault]) {
    print_faults(faults);
    for line in text_lines(report) {
        println!("{line}");
    }
}

fn text_lines(report: &ValidationReport) -> Vec<String> {
    if !report.has_diagnostics() {
        return vec!["\x1b[32m✓ All files passed validation\x1b[0m".to_string()];
    }

    let grouped = report.by_unit();
    let mut lines = Vec::new();
    for (file, diagnostics) in &grouped {
        lines.push(format!("\n\x1b[4mFile: {}\x1b[0m", file.display()));
        for diagnostic in diagnostics {
            lines.extend(diagnostic_lines(diagnostic));
        }
    }
    lines.push(format!(
        "\n\x1b[31m✗ Found {} error(s) in {} file(s)\x1b[0m",
        report.diagnostics.len(),
        grouped.len()
    ));
    lines
}

fn diagnostic_lines(diagnostic: &Diagnostic) -> Vec<String> {
    let mut lines = vec![format!(
        "  \x1b[31m✗\x1b[0m \x1b[90m[{}]\x1b[0m Line {}, Col {}: {}",
        diagnostic.rule, diagnostic.location.line, diagnostic.location.column, diagnostic.message
    )];
    if let Some(suggestion) = &diagnostic.suggestion {
        lines.push(format!("    = help: {}", suggestion.message));
    }
    lines
}

/// Prints per-file faults to stderr.
pub fn print_faults(faults: &[LoadFault]) {
    for fault in faults {
        eprintln!(
            "\x1b[31m✗ Error: {}: {}\x1b[0m",
            fault.path.display(),
            fault.message
        );
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: &'a ValidationReport,
    faults: &'a [LoadFault],
}

fn print_json(report: &ValidationReport, faults: &[LoadFault]) -> Result<()> {
    let json = serde_json::to_string_pretty(&JsonOutput { report, faults })?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &ValidationReport, faults: &[LoadFault]) {
    for diagnostic in &report.diagnostics {
        println!(
            "{}:{}:{}: {} [{}] {}",
            diagnostic.location.file.display(),
            diagnostic.location.line,
            diagnostic.location.column,
            diagnostic.code,
            diagnostic.rule,
            diagnostic.message,
        );
    }
    for fault in faults {
        println!("{}:1:1: fault {}", fault.path.display(), fault.message);
    }
}

fn print_pretty(report: &ValidationReport, units: &[SourceUnit], faults: &[LoadFault]) {
    print_faults(faults);

    for diagnostic in &report.diagnostics {
        match units.iter().find(|u| u.path() == diagnostic.unit()) {
            Some(unit) => {
                let rendered = miette::Report::new(DiagnosticReport::new(diagnostic, unit));
                eprintln!("{rendered:?}");
            }
            None => {
                for line in diagnostic_lines(diagnostic) {
                    println!("{line}");
                }
            }
        }
    }

    if report.has_diagnostics() {
        eprintln!("Found {} error(s)", report.diagnostics.len());
    } else {
        println!("✓ All files passed validation");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use javats_core::Validator;
    use javats_rules::NamingConvention;

    fn headers(lines: &[String]) -> Vec<&str> {
        lines
            .iter()
            .filter_map(|l| l.strip_prefix("\n\x1b[4mFile: "))
            .map(|l| l.trim_end_matches("\x1b[0m"))
            .collect()
    }

    #[test]
    fn text_keeps_input_order_of_files() {
        let units = vec![
            javats_syntax::parse_unit("B.javats", "export class b {}\n").unwrap(),
            javats_syntax::parse_unit("A.javats", "export class a {}\n").unwrap(),
        ];
        let validator = Validator::builder().unit_rule(NamingConvention::new()).build();

        let report = validator.validate_all(&units);
        let lines = text_lines(&report);

        assert_eq!(headers(&lines), vec!["B.javats", "A.javats"]);
        assert!(lines.last().unwrap().contains("Found 2 error(s) in 2 file(s)"));
    }

    #[test]
    fn text_reports_success_without_diagnostics() {
        let lines = text_lines(&ValidationReport::new());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("All files passed validation"));
    }
}
