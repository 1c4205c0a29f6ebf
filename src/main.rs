// src/main.rs
use color_eyre::eyre::{Result, eyre};

fn main() -> Result<()> {
    color_eyre::install()?;
    stat_scrape::cli::run().map_err(|e| eyre!("{e}"))
}
