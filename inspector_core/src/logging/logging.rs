// inspector_core/src/logging/logging.rs
use std::io::*;
use std::path::Path;
use std::sync::Mutex;
use flexi_logger::*;
use log::Record;
use once_cell::sync::Lazy;

// Global mutable buffer that stores the most recent message.
pub static LAST_LOG: Lazy<Mutex<String>> = Lazy::new(|| Mutex::new(String::new()));

/// Helper macro that allow logs to be displayed by
/// the editor's status line and printed to the console.
#[macro_export]
macro_rules! onscreen_log {
    ($lvl:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        println!("{}", message);
        log::log!($lvl, "{}", message);
        $crate::logging::logging::set_last_log(message);
    }};
}

/// Helper macro that allow logs to be displayed by the editor.
#[macro_export]
macro_rules! onscreen_info  { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Info,  $($arg)*) }; }

/// Helper macro that allow logs to be displayed by the editor.
#[macro_export]
macro_rules! onscreen_warn  { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Warn,  $($arg)*) }; }

/// Helper macro that allow logs to be displayed by the editor.
#[macro_export]
macro_rules! onscreen_error { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Error, $($arg)*) }; }

/// Helper macro that allow logs to be displayed by the editor.
#[macro_export]
macro_rules! onscreen_debug { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Debug, $($arg)*) }; }

/// Replaces the status line message.
pub fn set_last_log(message: String) {
    if let Ok(mut buf) = LAST_LOG.lock() {
        *buf = message;
    }
}

/// The most recent on screen message.
pub fn last_log() -> String {
    LAST_LOG.lock().map(|buf| buf.clone()).unwrap_or_default()
}

/// Initializes the file logger. Keep the returned handle alive for as long
/// as logs should be written.
pub fn init_file_logger(log_dir: &Path, level: &str) -> std::result::Result<LoggerHandle, FlexiLoggerError> {
    let file_spec = FileSpec::default()
        .directory(log_dir)
        .basename("inspector")
        .suffix("log");

    let handle = Logger::try_with_str(level)?
        .log_to_file(file_spec)
        .format(my_formatter)
        .rotate(
            Criterion::Size(5_000_000),
            Naming::Numbers,
            Cleanup::KeepLogFiles(5),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;

    log::info!("Log dir: {}.", log_dir.display());
    Ok(handle)
}

/// Initializes a logger that writes to stderr only.
pub fn init_stderr_logger(level: &str) -> std::result::Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_str(level)?
        .format(my_formatter)
        .start()
}

fn my_formatter(
    write: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record
) -> Result<()> {
    write!(
        write,
        "{} {:5} [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unknown>"),
        &record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onscreen_macros_update_status_line() {
        crate::onscreen_info!("Undo: {}", "Set Mass");
        assert_eq!(last_log(), "Undo: Set Mass");
    }
}
