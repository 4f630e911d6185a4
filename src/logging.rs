//! Log sink setup for the command-line binary.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io::Write;

use crate::config::LogConfig;

/// Install the global logger.
///
/// `RUST_LOG` takes precedence over the configured level. When a log file is
/// configured, records are appended to it; otherwise they go to stderr.
pub fn init(config: &LogConfig) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(config.level.as_str()));

    if let Some(path) = config.file.as_deref() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        builder
            .target(Target::Pipe(Box::new(file)))
            .write_style(env_logger::WriteStyle::Never)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} {}:{}: {}",
                    buf.timestamp_seconds(),
                    record.level(),
                    record.target(),
                    record.args()
                )
            });
    }

    builder.try_init().context("Failed to initialize logger")
}
