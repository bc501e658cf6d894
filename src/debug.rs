//! Debug logging for gridkit
//!
//! Routes the `log` facade into a debug file. The level comes from the
//! `--log-level` CLI flag when given, otherwise from the DEBUG_LEVEL
//! environment variable:
//! - 0 or unset: No debugging
//! - 1: Errors only
//! - 2: Info level (config, font and output events)
//! - 3: Debug level (grid reconciliation, painting)
//! - 4: Trace level (every refresh)
//!
//! All output goes to /tmp/gridkit_debug.log on Unix/macOS,
//! or %TEMP%\gridkit_debug.log on Windows.
//! When RUST_LOG is set, records are mirrored to stderr as well.

use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    fn from_env() -> Self {
        match std::env::var("DEBUG_LEVEL") {
            Ok(val) => Self::from_number(val.trim()),
            Err(_) => DebugLevel::Off,
        }
    }

    fn from_number(val: &str) -> Self {
        match val.parse::<u8>() {
            Ok(1) => DebugLevel::Error,
            Ok(2) => DebugLevel::Info,
            Ok(3) => DebugLevel::Debug,
            Ok(4) => DebugLevel::Trace,
            _ => DebugLevel::Off,
        }
    }

    /// The `log` filter matching this level. Warnings ride along with info.
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            DebugLevel::Off => LevelFilter::Off,
            DebugLevel::Error => LevelFilter::Error,
            DebugLevel::Info => LevelFilter::Info,
            DebugLevel::Debug => LevelFilter::Debug,
            DebugLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Global debug log file
struct DebugLogger {
    file: Option<std::fs::File>,
}

impl DebugLogger {
    fn open(level: LevelFilter) -> Self {
        if level == LevelFilter::Off {
            return DebugLogger { file: None };
        }
        // Silently run without a file if it can't be opened
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
            .ok();
        let mut logger = DebugLogger { file };
        logger.write_raw(&format!(
            "\n{}\ngridkit debug session started at {} (level={})\n{}\n",
            "=".repeat(80),
            get_timestamp(),
            level,
            "=".repeat(80)
        ));
        logger
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(ref mut file) = self.file {
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    let path = PathBuf::from("/tmp/gridkit_debug.log");
    #[cfg(not(unix))]
    let path = std::env::temp_dir().join("gridkit_debug.log");
    path
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Format one record the way it is written to the log file.
fn format_record(record: &Record<'_>) -> String {
    format!(
        "[{}] [{:<5}] [{}] {}\n",
        get_timestamp(),
        record.level(),
        record.target(),
        record.args()
    )
}

/// `log::Log` implementation writing to the debug file.
struct LogBridge {
    level: LevelFilter,
    mirror_stderr: bool,
    logger: Mutex<DebugLogger>,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        if self.mirror_stderr {
            eprint!("{line}");
        }
        self.logger.lock().write_raw(&line);
    }

    fn flush(&self) {
        if let Some(ref mut file) = self.logger.lock().file {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Resolve the effective level: CLI flag, then DEBUG_LEVEL, then RUST_LOG.
fn resolve_level(cli_level: Option<LevelFilter>) -> LevelFilter {
    if let Some(level) = cli_level {
        return level;
    }
    let env_level = DebugLevel::from_env();
    if env_level != DebugLevel::Off {
        return env_level.to_level_filter();
    }
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|val| val.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Off)
}

/// Install the debug log bridge as the global `log` logger.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let level = resolve_level(cli_level);
    let bridge = BRIDGE.get_or_init(|| LogBridge {
        level,
        mirror_stderr: std::env::var_os("RUST_LOG").is_some(),
        logger: Mutex::new(DebugLogger::open(level)),
    });
    if log::set_logger(bridge).is_ok() {
        log::set_max_level(bridge.level);
    }
}
