// src/params.rs
use std::path::PathBuf;
use crate::csv::Delim;

pub const TOUCHDOWNS_URL: &str =
    "https://www.cbssports.com/nfl/stats/player/scoring/nfl/regular/qualifiers/";
pub const STOCK_URL: &str =
    "https://query1.finance.yahoo.com/v8/finance/chart/AAPL?interval=1d&range=1mo";

// Browser-like UA; the target sites refuse default client agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

pub const TIMEOUT_SECS: u64 = 20;
pub const MAX_RECORDS: usize = 20;

pub const TOUCHDOWNS_STEM: &str = "touchdowns";
pub const QUOTES_STEM: &str = "quotes";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Touchdowns,
    Stock,
}

#[derive(Clone, Debug)]
pub struct Params {
    pub page: PageKind,          // which scrape to run
    pub limit: usize,            // touchdowns record cap
    pub out: Option<PathBuf>,    // None = fixed-width report on stdout
    pub format: Delim,
    pub include_headers: bool,   // header row in CSV/TSV export
}

impl Params {
    pub fn new() -> Self {
        Self {
            page: PageKind::Touchdowns,
            limit: MAX_RECORDS,
            out: None,
            format: Delim::Csv,
            include_headers: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
