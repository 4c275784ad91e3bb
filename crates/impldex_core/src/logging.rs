//! Core logging bootstrap and safety policy.
//!
//! # Responsibility
//! - Start rolling file logs exactly once per process.
//! - Capture panics as metadata-only log events.
//!
//! # Invariants
//! - Repeated init with identical config is accepted; conflicting config
//!   is rejected with a readable message.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "impldex";
const ROTATE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 3;
const PANIC_SUMMARY_MAX_CHARS: usize = 120;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogging {
    level: &'static str,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Initializes rolling file logging for this process.
///
/// Safe to call repeatedly with the same `level` and `log_dir`.
///
/// # Errors
/// - Unsupported `level` values.
/// - Empty or relative `log_dir`, or a directory that cannot be created.
/// - Re-initialization with a different level or directory.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = canonical_level(level)?;
    let log_dir = canonical_log_dir(log_dir)?;

    let state = ACTIVE.get_or_try_init(|| start_logger(level, log_dir.clone()))?;
    if state.level != level {
        return Err(format!(
            "logging already active at level `{}`; refusing `{}`",
            state.level, level
        ));
    }
    if state.log_dir != log_dir {
        return Err(format!(
            "logging already writing to `{}`; refusing `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }
    Ok(())
}

/// Returns active logging metadata, or `None` before initialization.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE.get().map(|state| (state.level, state.log_dir.clone()))
}

/// Returns the default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, log_dir: PathBuf) -> Result<ActiveLogging, String> {
    std::fs::create_dir_all(&log_dir).map_err(|err| {
        format!(
            "cannot create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir.as_path())
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("cannot start logger: {err}"))?;

    install_panic_hook();

    info!(
        "event=core_init module=logging status=ok level={} log_dir={} version={}",
        level,
        log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogging {
        level,
        log_dir,
        _handle: handle,
    })
}

fn canonical_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn canonical_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir must not be empty".to_string());
    }
    let path = Path::new(trimmed);
    if path.is_relative() {
        return Err(format!("log_dir must be absolute, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook() {
    PANIC_HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".to_string());
            error!(
                "event=panic_captured module=logging status=error location={} payload={}",
                location,
                panic_summary(info)
            );
            previous(info);
        }));
    });
}

fn panic_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    // Panic payloads can carry user-controlled text; flatten and cap before
    // they reach the log file.
    let payload = if let Some(text) = info.payload().downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = info.payload().downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    };
    single_line_capped(&payload, PANIC_SUMMARY_MAX_CHARS)
}

fn single_line_capped(value: &str, max_chars: usize) -> String {
    let flat = value.replace(['\n', '\r'], " ");
    let mut capped: String = flat.chars().take(max_chars).collect();
    if flat.chars().count() > max_chars {
        capped.push_str("...");
    }
    capped
}
