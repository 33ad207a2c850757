//! keyresolve — build-time secret resolution CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use keyresolve::config;
use keyresolve::constants;
use keyresolve::env;
use keyresolve::logging;
use keyresolve::placeholders;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{CheckArgs, Cli, Command, ConfigArgs, OutputFormat, ResolveArgs};
use config::Config;
use env::Env;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();

    logging::init(&env, cli.verbose)?;

    match cli.command {
        Command::Resolve(args) => run_resolve(args, &env),
        Command::Check(args) => run_check(args, &env),
        Command::Config(args) => run_config(args, &env),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Canonicalize the module directory given with `--path`.
fn module_dir(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("--path directory not found: {}", path.display()))
}

/// Load layered config and apply `--key` overrides.
fn load_config(dir: &Path, keys: &[String], env: &Env) -> Result<Config> {
    let mut config = Config::load(Some(dir), env).context("failed to load configuration")?;
    config.override_keys(keys);
    Ok(config)
}

/// Resolve placeholders and print them in the requested format.
fn run_resolve(args: ResolveArgs, env: &Env) -> Result<()> {
    let dir = module_dir(&args.path)?;
    let config = load_config(&dir, &args.keys, env)?;

    let (placeholders, _) =
        placeholders::resolve_placeholders(&config.placeholders.keys, &dir, env)?;

    print!("{}", args.format.render(&placeholders));
    Ok(())
}

/// Resolve placeholders and validate module settings, printing no secrets.
fn run_check(args: CheckArgs, env: &Env) -> Result<()> {
    use colored::Colorize;

    let dir = module_dir(&args.path)?;
    let config = load_config(&dir, &args.keys, env)?;

    let (placeholders, resolved) =
        placeholders::resolve_placeholders(&config.placeholders.keys, &dir, env)?;

    print!("{}", OutputFormat::Terminal.render(&placeholders));
    for key in &resolved {
        println!("    {} {}  {}", key.name.dimmed(), "from".cyan(), key.source);
    }

    if let Err(errors) = config.module.validate() {
        eprint!("{}", cli::format_module_errors(&errors));
        bail!("module settings have {} problem(s)", errors.len());
    }

    println!(
        "  {} {} ({})",
        "✔".green().bold(),
        config.module.application_id.bold(),
        format!(
            "sdk {}..{} compile {}, jvm {}",
            config.module.min_sdk,
            config.module.target_sdk,
            config.module.compile_sdk,
            config.module.jvm_target,
        )
        .dimmed(),
    );
    Ok(())
}

/// Print the effective configuration.
fn run_config(args: ConfigArgs, env: &Env) -> Result<()> {
    let dir = module_dir(&args.path)?;
    let config = load_config(&dir, &[], env)?;
    let rendered = config.to_toml().context("failed to render configuration")?;
    print!("{rendered}");
    Ok(())
}
