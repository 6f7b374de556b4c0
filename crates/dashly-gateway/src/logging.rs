//! Tracing initialization for Dashly services
//!
//! - Console: colored, compact format
//! - File (optional): daily rotation through a non-blocking appender

use std::path::Path;

use anyhow::Context as _;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// RUST_LOG takes precedence; `directives` applies when it is unset.
fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

/// Initialize console logging. `directives` uses `RUST_LOG` syntax,
/// e.g. `"info,dashly_core=debug"`.
pub fn init_tracing(directives: &str) -> anyhow::Result<()> {
    let console_layer = fmt::layer()
        .with_ansi(true)
        .compact()
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(console_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

/// Console logging plus a daily-rolling file layer.
///
/// Creates files like `<prefix>.2026-08-06.log` under `logs_dir`. The
/// returned guard must stay alive for the life of the process or
/// buffered lines are lost.
pub fn init_tracing_with_file(
    directives: &str,
    logs_dir: &Path,
    file_prefix: &str,
) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("failed to create logs directory {}", logs_dir.display()))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_prefix)
        .filename_suffix("log")
        .build(logs_dir)
        .context("failed to create log file appender")?;
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_ansi(true)
        .compact()
        .with_target(true);
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}
