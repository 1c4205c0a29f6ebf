// src/log.rs
//
// Append-only diagnostics file. Nothing here touches stdout; the report
// surface stays clean even when heuristics fall back.

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

const LOG_FILE: &str = "stat_scrape.log";
static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();

pub fn write_log(level: &str, msg: &str) {
    let ms = START.get_or_init(Instant::now).elapsed().as_millis() as u64;
    let line = format!(
        "[{:02}:{:02}:{:02}.{:03}][{}] {}\n",
        ms / 3_600_000,
        (ms % 3_600_000) / 60_000,
        (ms % 60_000) / 1_000,
        ms % 1_000,
        level,
        msg
    );

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(LOG_FILE) {
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

/// Warn-level logging (heuristic fallbacks, missing payloads)
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)*) => {
        $crate::log::write_log("WARN", &format!($($arg)*))
    };
}
