//! Diagnostics for liri go to stderr; stdout carries only command output.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Variable read before `RUST_LOG`, e.g. `LIRI_LOG=liri::data=debug`.
pub const LOG_ENV: &str = "LIRI_LOG";

/// Level used when neither variable is set; request logs stay hidden.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let directive = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .ok();
    let env_filter = filter_for(directive.as_deref())?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(fmt_layer).try_init()?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "liri starting");
    Ok(())
}

fn filter_for(directive: Option<&str>) -> Result<EnvFilter> {
    match directive.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => EnvFilter::try_new(d).with_context(|| format!("invalid log filter {d:?}")),
        None => Ok(EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}
