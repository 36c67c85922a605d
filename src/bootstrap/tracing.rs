//! Tracing configuration
//!
//! Registry with an `EnvFilter`, a timestamped stderr layer and, when the
//! data dir is writable, a non-blocking file layer. Command output owns
//! stdout, so the console layer writes to stderr.

use std::{fs, io, path::PathBuf, sync::OnceLock};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "portfolio.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is unset.
///
/// ## Behavior / 行为
/// - Dependencies stay at `warn`
/// - Workspace crates log at `debug` in dev builds, `info` otherwise
/// - `verbose` forces `debug` for workspace crates
fn build_filter_directives(is_dev: bool, verbose: bool) -> Vec<String> {
    let level = if is_dev || verbose { "debug" } else { "info" };
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        ["portfolio", "portfolio_lib", "pf_core", "pf_app", "pf_infra"]
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives
}

/// Initialize the global tracing subscriber. Call once, before any command runs.
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(verbose: bool) -> anyhow::Result<()> {
    let directives = build_filter_directives(is_development(), verbose);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directives.join(",")));

    let console_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match build_file_writer() {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, console only: {err:#}");
            None
        }
    };

    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(console_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Tracing subscriber already initialized")?;

    Ok(())
}

/// `<data dir>/portfolio/logs`
pub fn logs_dir() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_local_dir().context("No local data directory on this platform")?;
    Ok(data_dir.join("portfolio").join("logs"))
}

fn build_file_writer() -> anyhow::Result<NonBlocking> {
    let logs_dir = logs_dir()?;
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create logs dir: {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev = build_filter_directives(true, false);
        assert_eq!(dev[0], "warn");
        assert!(dev.contains(&"pf_app=debug".to_string()));

        let prod = build_filter_directives(false, false);
        assert!(prod.contains(&"pf_infra=info".to_string()));
        assert!(!prod.iter().any(|d| d.ends_with("=debug")));

        let verbose = build_filter_directives(false, true);
        assert!(verbose.contains(&"pf_core=debug".to_string()));
    }

    #[test]
    fn test_logs_dir_is_namespaced() {
        if let Ok(dir) = logs_dir() {
            assert!(dir.ends_with("portfolio/logs"));
        }
    }
}
