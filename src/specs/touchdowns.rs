// src/specs/touchdowns.rs
//
// NFL touchdown leaders from the CBS Sports scoring page.
//
// The page renders several <table> elements; the stats table is picked by
// header text and its loosely structured cells are mined positionally.
// Team/position detection is a best-effort lexical pass over the player
// cell's tail text: heuristic, not authoritative.

use std::error::Error;

use crate::core::html::{inner_after_open_tag, next_tag_block, strip_tags, tag_blocks};
use crate::core::net;
use crate::core::sanitize::normalize_entities;
use crate::error::ScrapeError;
use crate::params;

/// One extracted leader row, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub position: String, // "" when undetectable
    pub team: String,     // "" when undetectable
    pub touchdowns: u32,
}

/// Position abbreviations the tail-token classifier recognizes.
const POSITIONS: [&str; 11] = [
    "QB", "RB", "WR", "TE", "FB", "KR", "PR", "DB", "LB", "DL", "OL",
];

/// Fetch the leaders page and extract up to `limit` records.
/// A page with no table at all is reported as zero records, not an error.
pub fn fetch_and_extract(limit: usize) -> Result<Vec<Record>, Box<dyn Error>> {
    let doc = net::http_get(params::TOUCHDOWNS_URL, &[])?;
    match select_table(&doc) {
        Ok(table) => {
            let records = extract_records(table, limit);
            logf!("touchdowns: {} records extracted", records.len());
            Ok(records)
        }
        Err(ScrapeError::NotFound(_)) => {
            warnf!("touchdowns: no table element in document");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Pick the stats table: the first table whose header cells (uppercased,
/// trimmed) contain both PLAYER and TD; otherwise the first table on the
/// page. A document with no tables at all is `NotFound`.
pub fn select_table(doc: &str) -> Result<&str, ScrapeError> {
    let tables = tag_blocks(doc, "table");
    if tables.is_empty() {
        return Err(ScrapeError::NotFound("could not locate a qualifying table"));
    }
    for table in tables.iter().copied() {
        let headers: Vec<String> = tag_blocks(table, "th")
            .into_iter()
            .map(|th| strip_tags(normalize_entities(inner_after_open_tag(th))).to_uppercase())
            .collect();
        if headers.iter().any(|h| h == "PLAYER") && headers.iter().any(|h| h == "TD") {
            return Ok(table);
        }
    }
    warnf!("touchdowns: no PLAYER+TD header match, falling back to first table");
    Ok(tables[0])
}

/// Walk the table's rows in document order, emitting at most `max_records`
/// records. A record needs a non-empty name and a numeric touchdown cell;
/// rows that lack either are skipped without comment.
pub fn extract_records(table: &str, max_records: usize) -> Vec<Record> {
    let mut records = Vec::new();
    let mut pos = 0usize;

    while let Some((tr_s, tr_e)) = next_tag_block(table, "tr", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        let cells = tag_blocks(tr, "td");
        if cells.len() < 5 {
            continue; // header/separator rows carry fewer data cells
        }

        let texts: Vec<String> = cells
            .iter()
            .map(|td| strip_tags(normalize_entities(inner_after_open_tag(td))))
            .collect();

        // The touchdown total is the rightmost purely-numeric cell.
        let touchdowns = texts.iter().rev().find_map(|t| parse_count(t));

        // Rank sits in cell 0; identity in cell 1.
        let (name, position, team) = player_identity(cells[1], &texts[1]);

        if let Some(td_val) = touchdowns {
            if !name.is_empty() {
                records.push(Record { name, position, team, touchdowns: td_val });
            }
        }
        if records.len() >= max_records {
            break;
        }
    }
    records
}

/// A count cell is purely decimal digits.
fn parse_count(text: &str) -> Option<u32> {
    let t = text.trim();
    if t.is_empty() || !t.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    t.parse().ok()
}

/// Name plus best-effort team/position from the player cell.
///
/// The name is the first <a> child's text when present, otherwise the whole
/// cell. Whatever trails the name ("KC · RB", "KC RB", "| KC, RB") is
/// tokenized and classified: the first 2-3 letter all-caps token becomes the
/// team, the first token matching a known position abbreviation becomes the
/// position. First match wins for each field independently, so a leading
/// position token can also claim the team slot.
fn player_identity(cell: &str, full_text: &str) -> (String, String, String) {
    let name = match next_tag_block(cell, "a", 0) {
        Some((a_s, a_e)) => strip_tags(normalize_entities(inner_after_open_tag(&cell[a_s..a_e]))),
        None => s!(full_text),
    };

    let mut tail = full_text;
    if !name.is_empty() && tail.starts_with(name.as_str()) {
        tail = &tail[name.len()..];
    }
    let tail = tail.trim_matches([' ', '-', '·', '|', ',']);

    let mut team = s!();
    let mut position = s!();
    for token in tail.replace(['·', '|'], " ").split_whitespace() {
        if team.is_empty()
            && matches!(token.len(), 2 | 3)
            && token.chars().all(|c| c.is_ascii_uppercase())
        {
            team = s!(token);
        }
        let upper = token.to_uppercase();
        if position.is_empty()
            && (1..=3).contains(&token.chars().count())
            && POSITIONS.contains(&upper.as_str())
        {
            position = upper;
        }
    }
    (name, position, team)
}
