// src/core/net.rs

// Blocking HTTPS GET via ureq. One agent per call: each run fetches a
// single document, so connection reuse buys nothing.

use std::time::Duration;

use crate::error::ScrapeError;
use crate::params::{TIMEOUT_SECS, USER_AGENT};

/// Fetch `url` as text. Non-2xx status and transport failures both map to
/// `ScrapeError::Retrieval`, which is fatal for the run.
pub fn http_get(url: &str, extra_headers: &[(&str, &str)]) -> Result<String, ScrapeError> {
    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build();

    let mut req = agent.get(url).set("User-Agent", USER_AGENT);
    for (k, v) in extra_headers {
        req = req.set(k, v);
    }

    let resp = req
        .call()
        .map_err(|e| ScrapeError::Retrieval(e.to_string()))?;
    resp.into_string()
        .map_err(|e| ScrapeError::Retrieval(format!("reading body: {}", e)))
}
