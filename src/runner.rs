// src/runner.rs

use std::error::Error;
use std::path::PathBuf;

use crate::{
    file,
    params::{PageKind, Params, QUOTES_STEM, TOUCHDOWNS_STEM},
    report, specs,
};

/// What a run produced: rows emitted and, for exports, the file written.
pub struct RunSummary {
    pub rows: usize,
    pub file_written: Option<PathBuf>,
}

/// Top-level runner: dispatch on page kind and run.
pub fn run(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    match params.page {
        PageKind::Touchdowns => run_touchdowns(params),
        PageKind::Stock => run_stock(params),
    }
}

fn run_touchdowns(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    let records = specs::touchdowns::fetch_and_extract(params.limit)?;

    if let Some(out) = &params.out {
        let headers = vec![s!("Player"), s!("Pos"), s!("Team"), s!("TD")];
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.position.clone(),
                    r.team.clone(),
                    r.touchdowns.to_string(),
                ]
            })
            .collect();
        export(params, out, TOUCHDOWNS_STEM, &headers, &rows)
    } else {
        print!("{}", report::render_touchdowns(&records));
        Ok(RunSummary { rows: records.len(), file_written: None })
    }
}

fn run_stock(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    let quotes = specs::stock::fetch_and_extract()?;

    if let Some(out) = &params.out {
        let headers = vec![s!("Date"), s!("Close")];
        let rows: Vec<Vec<String>> = quotes
            .iter()
            .map(|q| vec![q.date.clone(), q.close.to_string()])
            .collect();
        export(params, out, QUOTES_STEM, &headers, &rows)
    } else {
        print!("{}", report::render_quotes(&quotes));
        Ok(RunSummary { rows: quotes.len(), file_written: None })
    }
}

fn export(
    params: &Params,
    out: &PathBuf,
    stem: &str,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<RunSummary, Box<dyn Error>> {
    let path = file::resolve_out_path(out, stem, params.format);
    let headers = params.include_headers.then_some(headers);
    let written = file::write_export(&path, headers, rows, params.format)?;
    logf!("exported {} rows to {}", rows.len(), written.display());
    Ok(RunSummary { rows: rows.len(), file_written: Some(written) })
}
