use colored::*;
use serde::Serialize;

use synspec::Feasibility;

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print a satisfied/violated flag with color
pub fn print_sat(label: &str, sat: bool) {
    let value = if sat { "✓ sat".green().bold() } else { "✗ unsat".red().bold() };
    println!("{}: {}", label.bold(), value);
}

/// Print feasibility with color
pub fn print_feasibility(label: &str, feasibility: Feasibility) {
    let value = match feasibility {
        Feasibility::Satisfied => "✓ satisfied".green().bold(),
        Feasibility::Violated => "✗ violated".red().bold(),
        Feasibility::Undecided => "? undecided".yellow().bold(),
    };
    println!("{}: {}", label.bold(), value);
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render an optional number, `-` when absent
pub fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
