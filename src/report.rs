// src/report.rs
//
// Fixed-width stdout rendering. Renderers return the whole block as a String
// so tests can assert on alignment without capturing stdout.

use crate::specs::stock::Quote;
use crate::specs::touchdowns::Record;

pub const NO_TABLE_RESULTS: &str = "No results parsed. The page structure may have changed.";
pub const NO_STOCK_RESULTS: &str = "No rows parsed. The API format may have changed.";

pub fn render_touchdowns(records: &[Record]) -> String {
    let mut out = s!("Top 20 NFL Players by Total Touchdowns (CBS Sports, Regular Season)\n");
    out.push_str(&format!(
        "{:<2}  {:<25} {:<3} {:<2} {:>3}\n",
        "#", "Player", "Pos", "Tm", "TD"
    ));
    for (i, r) in records.iter().enumerate() {
        out.push_str(&format!(
            "{:<2}  {:<25} {:<3} {:<2} {:>3}\n",
            i + 1,
            r.name,
            if r.position.is_empty() { "-" } else { r.position.as_str() },
            if r.team.is_empty() { "-" } else { r.team.as_str() },
            r.touchdowns,
        ));
    }
    if records.is_empty() {
        out.push_str(NO_TABLE_RESULTS);
        out.push('\n');
    }
    out
}

pub fn render_quotes(quotes: &[Quote]) -> String {
    let mut out = s!("AAPL Historical Prices (Date, Close)\n");
    for q in quotes {
        out.push_str(&format!("{}\t{}\n", q.date, q.close));
    }
    if quotes.is_empty() {
        out.push_str(NO_STOCK_RESULTS);
        out.push('\n');
    }
    out
}
