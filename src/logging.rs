//! Diagnostic logging setup.
//!
//! Library code logs through `tracing` macros only; the binary installs a
//! compact stderr subscriber here so stdout stays reserved for rendered
//! placeholders.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::constants::ENV_LOG;
use crate::env::Env;

/// Pick the filter directive: `KEYRESOLVE_LOG` wins, then `--verbose`.
pub fn filter_directive(env: &Env, verbose: bool) -> String {
    match env.get(ENV_LOG) {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ if verbose => "debug".to_string(),
        _ => "info".to_string(),
    }
}

/// Install the global subscriber.
pub fn init(env: &Env, verbose: bool) -> anyhow::Result<()> {
    let directive = filter_directive(env, verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .compact(),
    );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))?;

    Ok(())
}
