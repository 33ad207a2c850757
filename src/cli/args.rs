//! Clap argument types.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use keyresolve::output::PlaceholderRenderer;
use keyresolve::placeholders::ManifestPlaceholders;

/// Resolve build-time secrets into manifest placeholders.
#[derive(Parser, Debug)]
#[command(name = "keyresolve", version = keyresolve::constants::VERSION)]
pub struct Cli {
    /// Enable debug logging (overridden by KEYRESOLVE_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Resolve placeholders and print them for the build.
    Resolve(ResolveArgs),

    /// Resolve placeholders and validate module settings without printing secrets.
    Check(CheckArgs),

    /// Print the effective configuration as TOML.
    Config(ConfigArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `resolve` subcommand.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Module directory to start the `.env` search from (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Placeholder key to resolve; repeat for several (default: from config).
    #[arg(long = "key", value_name = "NAME")]
    pub keys: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Properties)]
    pub format: OutputFormat,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Module directory to start the `.env` search from (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Placeholder key to resolve; repeat for several (default: from config).
    #[arg(long = "key", value_name = "NAME")]
    pub keys: Vec<String>,
}

/// Arguments for the `config` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Module directory holding `.keyresolve.toml` (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

/// Supported output formats.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// `NAME=value` lines.
    Properties,
    /// `{"placeholders": {...}}`.
    Json,
    /// `export NAME='value'` lines.
    Shell,
    /// Names and lengths only.
    Terminal,
}

impl OutputFormat {
    /// Render placeholders using the renderer for this format.
    pub fn render(&self, placeholders: &ManifestPlaceholders) -> String {
        match self {
            OutputFormat::Properties => {
                keyresolve::output::properties::PropertiesRenderer.render(placeholders)
            }
            OutputFormat::Json => keyresolve::output::json::JsonRenderer.render(placeholders),
            OutputFormat::Shell => keyresolve::output::shell::ShellRenderer.render(placeholders),
            OutputFormat::Terminal => {
                keyresolve::output::terminal::TerminalRenderer.render(placeholders)
            }
        }
    }
}
