//! Doctor command implementation.

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;

use crate::domain::{AppError, DiagnosticReport};

pub fn run_doctor(verbose: bool) -> Result<i32, AppError> {
    println!("🏥 System diagnostic");
    println!();

    let report = crate::app::api::doctor()?;
    print!("{}", render_report(&report, verbose));

    if report.all_passed() {
        println!("✓ All set. The environment is correctly configured.");
        Ok(0)
    } else {
        println!("✗ Found {} problem(s). Review the suggestions above.", report.failed_count());
        Ok(1)
    }
}

fn render_report(report: &DiagnosticReport, verbose: bool) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Check", "Status", "Details"]);

    for check in &report.checks {
        let status = if check.success {
            format!("✓ {}", check.message)
        } else {
            format!("✗ {}", check.message)
        };
        let details = match (&check.details, verbose || !check.success) {
            (Some(details), _) => details.clone(),
            (None, true) => "N/A".to_string(),
            (None, false) => "OK".to_string(),
        };
        table.add_row(vec![check.name.clone(), status, details]);
    }

    let mut out = format!("{}\n", table);

    if !report.warnings.is_empty() {
        out.push_str("\nWarnings:\n");
        for warning in &report.warnings {
            out.push_str(&format!("  ⚠ {}\n", warning));
        }
    }

    if !report.suggestions.is_empty() {
        out.push_str("\n💡 Suggestions:\n");
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, suggestion));
        }
    }

    out.push('\n');
    out
}
