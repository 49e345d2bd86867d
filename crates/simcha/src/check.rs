// SPDX-FileCopyrightText: 2026 Simcha Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `simcha check` command implementation.
//!
//! Prints the integrity report with one line per finding. Errors are marked
//! by severity, warnings with `!`. With `--plain`, colors are disabled.

use std::io::IsTerminal;

use simcha_catalog::CatalogStore;
use simcha_integrity::{IntegrityReport, Severity};

/// Run the check and print the report. Returns true if the report has errors.
pub fn run_check(store: &mut CatalogStore, plain: bool) -> bool {
    let use_color = !plain && std::io::stdout().is_terminal();
    let report = store.run_integrity_check();
    for line in render_report(&report, use_color) {
        println!("{line}");
    }
    report.has_errors
}

/// Format `report` as terminal lines.
pub fn render_report(report: &IntegrityReport, use_color: bool) -> Vec<String> {
    use colored::Colorize;

    let mut lines = vec![
        String::new(),
        "  simcha check".to_string(),
        format!("  {}", "-".repeat(50)),
    ];

    for error in &report.errors {
        let tag = format!("[{}]", error.severity.to_string().to_uppercase());
        let line = if use_color {
            let tag = match error.severity {
                Severity::Critical => tag.red().bold(),
                Severity::High => tag.red(),
                Severity::Medium => tag.yellow(),
                Severity::Low => tag.normal(),
            };
            format!("    {tag:<10} {:<32} {}", error.field, error.message)
        } else {
            format!("    {tag:<10} {:<32} {}", error.field, error.message)
        };
        lines.push(line);
    }

    for warning in &report.warnings {
        let mut line = if use_color {
            format!(
                "    {:<10} {:<32} {}",
                "!".yellow(),
                warning.field,
                warning.message.yellow()
            )
        } else {
            format!("    {:<10} {:<32} {}", "[WARN]", warning.field, warning.message)
        };
        if let Some(suggestion) = &warning.suggestion {
            line.push_str(&format!(" ({suggestion})"));
        }
        lines.push(line);
    }

    if report.errors.is_empty() && report.warnings.is_empty() {
        let ok = if use_color {
            "✓".green().to_string()
        } else {
            "[OK]".to_string()
        };
        lines.push(format!("    {ok} no issues found"));
    }

    let summary = report.summary();
    lines.push(String::new());
    lines.push(format!(
        "  score {}/100: {} critical, {} high, {} medium, {} low, {} warnings",
        report.score, summary.critical, summary.high, summary.medium, summary.low, summary.warnings
    ));
    lines
}
