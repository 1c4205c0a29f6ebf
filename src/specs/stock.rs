// src/specs/stock.rs
//
// AAPL daily closes from the Yahoo Finance chart API. Plain JSON traversal;
// the payload shape is chart.result[0].{timestamp, indicators.quote[0].close}.

use std::error::Error;

use chrono::DateTime;
use serde_json::Value;

use crate::core::net;
use crate::error::ScrapeError;
use crate::params;

/// One trading day: UTC calendar date and closing price.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub date: String, // ISO YYYY-MM-DD
    pub close: f64,
}

/// Fetch the chart endpoint and extract the (date, close) series.
/// A response without a chart result is reported as zero rows.
pub fn fetch_and_extract() -> Result<Vec<Quote>, Box<dyn Error>> {
    let body = net::http_get(
        params::STOCK_URL,
        &[
            ("Accept", "application/json,text/plain,*/*"),
            ("Accept-Language", "en-US,en;q=0.9"),
        ],
    )?;
    let doc: Value = serde_json::from_str(&body)
        .map_err(|e| ScrapeError::Retrieval(format!("chart payload is not JSON: {}", e)))?;

    match parse_chart(&doc) {
        Ok(quotes) => {
            logf!("stock: {} quotes extracted", quotes.len());
            Ok(quotes)
        }
        Err(ScrapeError::NotFound(_)) => {
            warnf!("stock: chart result missing from response");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Zip timestamps with closes pairwise, dropping days whose close is null.
/// Timestamps outside the representable date range are skipped like nulls.
pub fn parse_chart(doc: &Value) -> Result<Vec<Quote>, ScrapeError> {
    let result = doc
        .get("chart")
        .and_then(|c| c.get("result"))
        .and_then(|r| r.get(0))
        .ok_or(ScrapeError::NotFound("chart result missing from response"))?;

    let timestamps = result.get("timestamp").and_then(Value::as_array);
    let closes = result
        .get("indicators")
        .and_then(|i| i.get("quote"))
        .and_then(|q| q.get(0))
        .and_then(|q| q.get("close"))
        .and_then(Value::as_array);

    let (Some(timestamps), Some(closes)) = (timestamps, closes) else {
        return Err(ScrapeError::NotFound("chart series missing from response"));
    };

    let mut out = Vec::with_capacity(timestamps.len());
    for (ts, close) in timestamps.iter().zip(closes.iter()) {
        let (Some(ts), Some(close)) = (ts.as_i64(), close.as_f64()) else {
            continue;
        };
        let Some(when) = DateTime::from_timestamp(ts, 0) else {
            continue;
        };
        out.push(Quote { date: when.date_naive().to_string(), close });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chart(timestamps: Value, closes: Value) -> Value {
        json!({
            "chart": {
                "result": [{
                    "timestamp": timestamps,
                    "indicators": { "quote": [{ "close": closes }] }
                }]
            }
        })
    }

    #[test]
    fn pairs_dates_with_closes() {
        // 2024-01-02 and 2024-01-03, midnight UTC
        let doc = chart(json!([1704153600, 1704240000]), json!([185.5, 184.2]));
        let quotes = parse_chart(&doc).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0], Quote { date: s!("2024-01-02"), close: 185.5 });
        assert_eq!(quotes[1].date, "2024-01-03");
    }

    #[test]
    fn null_closes_are_dropped() {
        let doc = chart(json!([1704153600, 1704240000, 1704326400]), json!([null, 184.2, null]));
        let quotes = parse_chart(&doc).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].close, 184.2);
    }

    #[test]
    fn epoch_zero_renders_as_unix_origin() {
        let doc = chart(json!([0]), json!([1.0]));
        assert_eq!(parse_chart(&doc).unwrap()[0].date, "1970-01-01");
    }

    #[test]
    fn missing_chart_is_not_found() {
        let err = parse_chart(&json!({ "finance": {} })).unwrap_err();
        assert!(matches!(err, ScrapeError::NotFound(_)));
    }

    #[test]
    fn empty_result_list_is_not_found() {
        let err = parse_chart(&json!({ "chart": { "result": [] } })).unwrap_err();
        assert!(matches!(err, ScrapeError::NotFound(_)));
    }

    #[test]
    fn missing_series_is_not_found() {
        let doc = json!({ "chart": { "result": [{ "meta": {} }] } });
        assert!(matches!(parse_chart(&doc).unwrap_err(), ScrapeError::NotFound(_)));
    }
}
