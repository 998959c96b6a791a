//! Simple file-based logging for debugging
//!
//! Logging is silent until [`init`] has been called with a path, so library
//! users and tests pay nothing for the `log!` calls sprinkled through the
//! engine.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Default log file location (`<data dir>/showbox/showbox.log`)
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join("showbox"))
        .unwrap_or_else(std::env::temp_dir)
        .join("showbox.log")
}

/// Initialize logging to the given file, truncating it
pub fn init(path: &Path) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    if let Ok(file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        *LOG_FILE.lock() = Some(file);
    }

    log("=== Showbox Log Started ===");
}

/// Stop logging and close the file
pub fn shutdown() {
    log("=== Showbox Log Finished ===");
    *LOG_FILE.lock() = None;
}

/// Whether a log file is currently open
pub fn is_enabled() -> bool {
    LOG_FILE.lock().is_some()
}

/// Log a message to the file
pub fn log(msg: &str) {
    let mut guard = LOG_FILE.lock();
    if let Some(ref mut file) = *guard {
        let ts = chrono::Local::now().format("%H:%M:%S%.3f");
        let _ = writeln!(file, "[{}] {}", ts, msg);
        let _ = file.flush();
    }
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}

/// Log with function context
#[macro_export]
macro_rules! log_fn {
    ($fn_name:expr) => {
        $crate::log::log(&format!("-> {}", $fn_name))
    };
    ($fn_name:expr, $($arg:tt)*) => {
        $crate::log::log(&format!("-> {}: {}", $fn_name, format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_log_writes_after_init() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("showbox.log");

        init(&path);
        assert!(is_enabled());
        crate::log!("hello {}", 42);
        crate::log_fn!("add_item", "row {}", 3);
        shutdown();
        assert!(!is_enabled());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Showbox Log Started"));
        assert!(content.contains("hello 42"));
        assert!(content.contains("-> add_item: row 3"));
    }
}
