// src/log.rs
//
// File-backed logging. Stdout belongs to the command reports, so
// everything diagnostic lands in data/debug.log instead. Lines carry
// wall-clock times; a paced wiki batch can run for hours and "time since
// start" tells you nothing when you open the log the next morning.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use crate::config::consts::LOG_FILE;

static LOG_LOCK: Mutex<()> = Mutex::new(());

/// Internal logging function
pub fn write_log(level: &str, msg: &str) {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let line = format!("[{}][{}] {}\n", now, level, msg);

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Some(parent) = Path::new(LOG_FILE).parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(LOG_FILE)
        {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
