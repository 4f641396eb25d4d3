use std::{
    fs,
    path::Path,
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering},
};

use anyhow::{Context, Result};
use tracing::Metadata;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    filter::Directive,
    fmt::{
        self, FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    prelude::*,
};

use crate::config::Config;

const LOG_FILE_PREFIX: &str = "clipstack";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 7;

pub struct Logger;

impl Logger {
    /// Call **once** near the start of `main`, after the configuration is
    /// known. Keep the returned guard alive until exit or buffered lines are
    /// lost.
    ///
    /// Only a file layer is installed: the terminal belongs to the TUI.
    pub fn init(config: &Config) -> Result<WorkerGuard> {
        let log_dir = config.log_dir()?;
        fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let (writer, guard) = tracing_appender::non_blocking(Self::appender(&log_dir)?);

        let file_layer = fmt::layer()
            .event_format(SeqFileMod)
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(Self::filter(&config.logging.level)?);

        tracing_subscriber::registry()
            .with(file_layer)
            .try_init()
            .context("Failed to install global tracing subscriber")?;

        Ok(guard)
    }

    /// `RUST_LOG` first, then the configured level as the fallback directive.
    fn filter(level: &str) -> Result<EnvFilter> {
        let directive = Directive::from_str(level)
            .with_context(|| format!("Invalid log level in config: {level}"))?;
        Ok(EnvFilter::from_default_env().add_directive(directive))
    }

    /// daily rolling file appender → <dir>/clipstack.YYYY-MM-DD.log
    fn appender(log_dir: &Path) -> Result<RollingFileAppender> {
        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(MAX_LOG_FILES)
            .build(log_dir)
            .context("Failed to create file appender")
    }
}

static SEQ: AtomicU64 = AtomicU64::new(1);

/// Custom formatter: `SEQ LEVEL [file:line mod::path] message`
struct SeqFileMod;

impl<S, N> FormatEvent<S, N> for SeqFileMod
where
    S: tracing::Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut w: Writer<'_>,
        ev: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        // monotonically-increasing sequence number
        let seq = SEQ.fetch_add(1, Ordering::Relaxed);

        let meta: &'static Metadata<'static> = ev.metadata();
        write!(
            w,
            "{seq:06} {} {:5} [{}:{} {}] ",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
            meta.level(),
            meta.file().unwrap_or("??"),
            meta.line().unwrap_or(0),
            meta.module_path().unwrap_or("???"),
        )?;

        // write all key-value pairs for this event (usually just the message)
        ctx.field_format().format_fields(w.by_ref(), ev)?;
        writeln!(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_levels_and_directives() {
        assert!(Logger::filter("info").is_ok());
        assert!(Logger::filter("clipstack=debug").is_ok());
        assert!(Logger::filter("clipstack=verbose").is_err());
    }

    #[test]
    fn test_appender_creates_in_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(Logger::appender(dir.path()).is_ok());
    }
}
