// src/specs/mod.rs
//! Page-specific scraping specs.
//!
//! Each spec owns one remote document: where the payload lives in it and how
//! to extract it tolerantly. Specs parse; they do not decide when to fetch,
//! how to render, or where exports go; that lives in `runner` and `report`.
//!
//! Conventions:
//! - Case-insensitive tag detection via `core::html`; no full-document regexes.
//! - Scan locally within known blocks (`<table>…</table>`, one `<tr>` at a time).
//! - Stable output shapes per page so the rest of the pipeline can rely on them.
//! - Malformed rows are skipped, never reported row-by-row; log only where
//!   selection precedence matters (e.g. header-heuristic fallback).
pub mod stock;
pub mod touchdowns;
