//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use colored::Colorize;

use keyresolve::models::ModuleError;

/// Render module validation errors for stderr.
pub fn format_module_errors(errors: &[ModuleError]) -> String {
    let mut output = String::new();
    for error in errors {
        output.push_str(&format!("  {} {}\n", "✖".red().bold(), error.to_string().red()));
    }
    output
}
