//! Logging bootstrap for the folioview crates.
//!
//! # Responsibility
//! - Initialize rolling file logs exactly once per process.
//! - Keep emitted lines stable, metadata-only `key=value` events.
//!
//! # Invariants
//! - Initialization is idempotent for an identical configuration.
//! - Initialization never panics; conflicts are reported as errors.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "folioview";
const MAX_LOG_FILE_BYTES: u64 = 5 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 3;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogging {
    level: &'static str,
    directory: PathBuf,
    _handle: LoggerHandle,
}

/// Requested logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Absolute directory receiving the rolling log files.
    pub directory: PathBuf,
}

impl LogConfig {
    pub fn new(level: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            directory: directory.into(),
        }
    }
}

/// Logging bootstrap failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// Level string outside trace|debug|info|warn|error.
    InvalidLevel(String),
    /// Directory empty, relative, or impossible to create.
    InvalidDirectory(String),
    /// A different configuration is already active.
    AlreadyInitialized { active: String, requested: String },
    /// Logger backend refused to start.
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLevel(level) => {
                write!(f, "unsupported log level `{level}`; expected trace|debug|info|warn|error")
            }
            Self::InvalidDirectory(reason) => write!(f, "invalid log directory: {reason}"),
            Self::AlreadyInitialized { active, requested } => write!(
                f,
                "logging already initialized with `{active}`; refusing to switch to `{requested}`"
            ),
            Self::Backend(reason) => write!(f, "failed to start logger: {reason}"),
        }
    }
}

impl Error for LoggingError {}

/// Initializes file logging for the process.
///
/// # Invariants
/// - Repeating the call with the same configuration is idempotent.
/// - A conflicting level or directory is rejected, never applied.
/// - This function never panics.
///
/// # Errors
/// See [`LoggingError`].
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let level = normalize_level(&config.level)?;
    let directory = normalize_directory(&config.directory)?;

    if let Some(active) = ACTIVE.get() {
        return check_matches(active, level, &directory);
    }

    let state = ACTIVE.get_or_try_init(|| -> Result<ActiveLogging, LoggingError> {
        std::fs::create_dir_all(&directory).map_err(|err| {
            LoggingError::InvalidDirectory(format!("cannot create `{}`: {err}", directory.display()))
        })?;

        let handle = Logger::try_with_str(level)
            .map_err(|err| LoggingError::Backend(err.to_string()))?
            .log_to_file(
                FileSpec::default()
                    .directory(&directory)
                    .basename(LOG_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(KEPT_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| LoggingError::Backend(err.to_string()))?;

        install_panic_hook();

        info!(
            "event=logging_started module=core level={level} version={}",
            env!("CARGO_PKG_VERSION")
        );

        Ok(ActiveLogging {
            level,
            directory: directory.clone(),
            _handle: handle,
        })
    })?;

    // A racing initializer may have won with a different configuration.
    check_matches(state, level, &directory)
}

/// Returns `(level, directory)` of the active logger, `None` before init.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|state| (state.level, state.directory.clone()))
}

/// Default log level for the current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn check_matches(
    active: &ActiveLogging,
    level: &'static str,
    directory: &Path,
) -> Result<(), LoggingError> {
    if active.level == level && active.directory == directory {
        return Ok(());
    }
    Err(LoggingError::AlreadyInitialized {
        active: format!("{} @ {}", active.level, active.directory.display()),
        requested: format!("{} @ {}", level, directory.display()),
    })
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::InvalidLevel(other.to_string())),
    }
}

fn normalize_directory(directory: &Path) -> Result<PathBuf, LoggingError> {
    if directory.as_os_str().is_empty() {
        return Err(LoggingError::InvalidDirectory("path is empty".to_string()));
    }
    if !directory.is_absolute() {
        return Err(LoggingError::InvalidDirectory(format!(
            "path must be absolute, got `{}`",
            directory.display()
        )));
    }
    Ok(directory.to_path_buf())
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!("event=panic_captured module=core location={location}");
        previous(panic_info);
    }));
}
