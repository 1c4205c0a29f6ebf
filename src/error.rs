// src/error.rs

use std::error::Error;
use std::fmt;

/// Failure taxonomy for one scrape run.
///
/// `Retrieval` aborts the run. `NotFound` means the fetched document held no
/// usable payload; callers report it as zero results instead of crashing.
/// Malformed rows inside a located table are not errors at all; they are
/// skipped silently.
#[derive(Debug)]
pub enum ScrapeError {
    Retrieval(String),
    NotFound(&'static str),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Retrieval(msg) => write!(f, "retrieval failed: {}", msg),
            ScrapeError::NotFound(what) => write!(f, "{}", what),
        }
    }
}

impl Error for ScrapeError {}
