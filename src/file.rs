// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::csv::{Delim, rows_to_string};

/// Create parent directories as needed and write one export file.
/// Returns the path written.
pub fn write_export(
    path: &Path,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    format: Delim,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, rows_to_string(rows, headers, format.sep()))?;
    Ok(path.to_path_buf())
}

/// `-o` may name a directory (existing, or hinted by a trailing separator);
/// resolve it to a file inside using the page's default stem and the format
/// extension. A plain file path passes through untouched.
pub fn resolve_out_path(out: &Path, stem: &str, format: Delim) -> PathBuf {
    if out.is_dir() || looks_like_dir_hint(out) {
        out.join(join!(stem, ".", format.ext()))
    } else {
        out.to_path_buf()
    }
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_separator_gets_default_filename() {
        let p = resolve_out_path(Path::new("exports/"), "touchdowns", Delim::Tsv);
        assert_eq!(p, Path::new("exports/").join("touchdowns.tsv"));
    }

    #[test]
    fn file_path_passes_through() {
        let p = resolve_out_path(Path::new("leaders.csv"), "touchdowns", Delim::Csv);
        assert_eq!(p, PathBuf::from("leaders.csv"));
    }
}
