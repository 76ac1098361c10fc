//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber used across the crate:
//! an `EnvFilter` with the configured level and an fmt layer writing to
//! stderr, so diagnostics never interleave with the interactive output on
//! stdout.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set (also accepts full `EnvFilter` directives)
/// 2. Default: `"info"`
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.clone().unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
