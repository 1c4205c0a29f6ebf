// src/cli.rs
use std::{env, path::PathBuf};

use crate::csv::Delim;
use crate::params::{PageKind, Params};
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params, env::args().skip(1))?;

    let summary = runner::run(&params)?;
    if let Some(path) = summary.file_written {
        eprintln!("Wrote {} rows to {}", summary.rows, path.display());
    }
    Ok(())
}

fn parse_cli<I>(params: &mut Params, mut args: I) -> Result<(), Box<dyn std::error::Error>>
where
    I: Iterator<Item = String>,
{
    while let Some(a) = args.next() {
        match a.as_str() {
            "-p" | "--page" => {
                let v = args.next().ok_or("Missing value for --page")?;
                params.page = match v.to_ascii_lowercase().as_str() {
                    "touchdowns" | "td" => PageKind::Touchdowns,
                    "stock" | "aapl" => PageKind::Stock,
                    other => return Err(format!("Unknown page: {}", other).into()),
                };
            }
            "-n" | "--limit" => {
                let v: usize = args.next().ok_or("Missing value for --limit")?.parse()?;
                if v == 0 { return Err("Limit must be at least 1".into()); }
                params.limit = v;
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.include_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::MAX_RECORDS;

    fn parse(args: &[&str]) -> Result<Params, Box<dyn std::error::Error>> {
        let mut params = Params::new();
        parse_cli(&mut params, args.iter().map(|a| s!(*a)))?;
        Ok(params)
    }

    #[test]
    fn defaults_hold_with_no_args() {
        let p = parse(&[]).unwrap();
        assert_eq!(p.page, PageKind::Touchdowns);
        assert_eq!(p.limit, MAX_RECORDS);
        assert!(p.out.is_none());
        assert_eq!(p.format, Delim::Csv);
        assert!(!p.include_headers);
    }

    #[test]
    fn page_and_format_aliases_parse() {
        let p = parse(&["--page", "aapl", "--format", "TSV"]).unwrap();
        assert_eq!(p.page, PageKind::Stock);
        assert_eq!(p.format, Delim::Tsv);
    }

    #[test]
    fn limit_and_out_parse() {
        let p = parse(&["-n", "5", "-o", "exports/", "--include-headers"]).unwrap();
        assert_eq!(p.limit, 5);
        assert_eq!(p.out.as_deref(), Some(std::path::Path::new("exports/")));
        assert!(p.include_headers);
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert!(parse(&["--limit", "0"]).is_err());
    }

    #[test]
    fn unknown_arg_is_rejected() {
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn missing_value_is_rejected() {
        assert!(parse(&["--page"]).is_err());
    }
}
