//! Tracing setup.
//!
//! `RUST_LOG` overrides the defaults. The server also writes a daily rolling
//! file under the config dir's `logs/` when that directory can be created.

use std::path::Path;

use coderev_infrastructure::CoderevPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE_PREFIX: &str = "coderev.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Long-running web server: info to stderr and a log file
    Server,
    /// Single review: warnings only, stderr only
    OneShot,
}

impl LogTarget {
    fn default_directive(self) -> &'static str {
        match self {
            LogTarget::Server => "coderev=info",
            LogTarget::OneShot => "coderev=warn",
        }
    }
}

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process so buffered file output is flushed.
pub fn init(target: LogTarget, config_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(target.default_directive()));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match file_writer(target, config_dir) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

fn file_writer(
    target: LogTarget,
    config_dir: Option<&Path>,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if target != LogTarget::Server {
        return None;
    }
    let log_dir = CoderevPaths::new(config_dir).log_dir().ok()?;
    std::fs::create_dir_all(&log_dir).ok()?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    Some(tracing_appender::non_blocking(appender))
}
