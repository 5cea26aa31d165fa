//! Logging setup for the CLI.

use std::path::Path;

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// The verbosity of the logs.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum LogLevel {
    /// No logs.
    Off,
    /// Only errors.
    Error,
    /// Warnings and errors.
    Warn,
    /// A summary of each run.
    Info,
    /// The merge order and other run details.
    Debug,
    /// Every merge step.
    Trace,
}

impl LogLevel {
    /// The matching `ftlog` filter.
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Installs the global logger.
///
/// Logs are written to stderr, or to `<log_dir>/dna-msa.log` with daily
/// rotation when a directory is given. The returned guard must be kept alive
/// until the program exits so that buffered logs are flushed.
///
/// # Errors
///
/// - If the log directory cannot be created.
/// - If a logger has already been installed.
pub fn configure_logger(level: LevelFilter, log_dir: Option<&Path>) -> Result<LoggerGuard, String> {
    let builder = ftlog::Builder::new().max_log_level(level);

    let builder = if let Some(log_dir) = log_dir {
        if !log_dir.exists() {
            std::fs::create_dir_all(log_dir).map_err(|e| e.to_string())?;
        }
        let log_path = log_dir.join("dna-msa.log");
        let err_path = log_path.with_extension("err.log");
        let writer = FileAppender::builder().path(&log_path).rotate(Period::Day).build();

        builder
            .root(writer)
            // write `Debug` and higher logs in ftlog::appender to `err_path` instead of `log_path`
            .filter("ftlog::appender", "ftlog-appender", LevelFilter::Debug)
            .appender("ftlog-appender", FileAppender::new(err_path))
    } else {
        builder
    };

    builder.try_init().map_err(|e| e.to_string())
}
