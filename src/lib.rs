// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod specs;

pub mod csv;
pub mod error;
pub mod file;
pub mod params;
pub mod report;
pub mod runner;
