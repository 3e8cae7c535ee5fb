//! Output formatting for CLI responses

use anyhow::Error;
use carsim_errors::{ErrorCategory, ErrorSeverity};
use carsim_service::LoopSummary;
use carsim_telemetry::VehicleSignal;
use colored::*;
use serde_json::json;

use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let (category, severity) = error
        .downcast_ref::<CliError>()
        .map_or((ErrorCategory::Other, ErrorSeverity::Error), |e| {
            (e.category(), e.severity())
        });
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "category": category.to_string(),
            "severity": severity.to_string(),
        }
    });
    match serde_json::to_string(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print one published signal
pub fn print_signal(elapsed_ms: u128, signal: &VehicleSignal, json: bool) {
    if json {
        match serde_json::to_string(&json!({ "t_ms": elapsed_ms, "signal": signal })) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format signal as JSON: {e}"),
        }
        return;
    }
    let text = signal.to_string();
    let (name, value) = text.split_once(' ').unwrap_or((text.as_str(), ""));
    println!("{:>7} ms  {:<14} {}", elapsed_ms, name.cyan(), value);
}

/// Print the end-of-run summary
pub fn print_run_summary(summary: &LoopSummary, signals: u64, dropped: u64, json: bool) {
    if json {
        let summary_json = json!({
            "success": true,
            "summary": {
                "ticks": summary.ticks,
                "events": summary.events,
                "signals": signals,
                "dropped": dropped,
                "exit": format!("{:?}", summary.exit),
            }
        });
        match serde_json::to_string(&summary_json) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format summary as JSON: {e}"),
        }
        return;
    }
    eprintln!(
        "{} {} ticks, {} events, {} signals",
        "Done:".green().bold(),
        summary.ticks,
        summary.events,
        signals
    );
    if dropped > 0 {
        eprintln!("  {} {} signals dropped on a full queue", "Warning:".yellow(), dropped);
    }
}

/// Print a validated configuration
pub fn print_config(rendered: &str, json: bool) {
    if json {
        println!("{rendered}");
        return;
    }
    println!("{}", "Configuration OK".green().bold());
    print!("{rendered}");
}
