use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use std::io;
use std::path::Path;

use crate::config::AppConfig;

pub const LOG_FILE_NAME: &str = "advisor-api.log";

/// File layer: everything from this crate plus request spans
fn file_filter() -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::try_from_env("FILE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("debug"))
        .add_directive("advisor_api=trace".parse()?)
        .add_directive("tower_http=debug".parse()?))
}

fn console_filter() -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive("hyper=warn".parse()?)
        .add_directive("tower=warn".parse()?)
        .add_directive("advisor_api=info".parse()?))
}

/// Installs the global subscriber. Keep the guard alive for the life of the
/// process or buffered file output is lost.
pub fn init_logging(config: &AppConfig) -> anyhow::Result<WorkerGuard> {
    let log_dir = Path::new(&config.log_dir);
    std::fs::create_dir_all(log_dir)?;

    let (file_writer, guard) = tracing_appender::non_blocking(rolling::daily(log_dir, LOG_FILE_NAME));

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .json()
        .with_filter(file_filter()?);

    let stdout_layer = fmt::layer()
        .with_writer(io::stdout)
        .with_target(false)
        .compact()
        .with_filter(console_filter()?);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .init();

    tracing::info!("{} logging initialized", config.service_name);
    if config.log_dir != AppConfig::default().log_dir {
        tracing::info!("Writing {} to {}", LOG_FILE_NAME, log_dir.display());
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_parse_their_directives() {
        assert!(file_filter().is_ok());
        assert!(console_filter().is_ok());
    }
}
