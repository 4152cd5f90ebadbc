// src/lib.rs
//! Heisig kanji keywords vs. jpdb.io: scrape, stem, detect collisions, report.
//!
//! Pipeline: `reference` → `scrape` (through `store` + `core::net`) →
//! `report` (with `collide`) → `file`. `runner` wires it together.

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod collide;
pub mod csv;
pub mod file;
pub mod kanji;
pub mod progress;
pub mod reference;
pub mod report;
pub mod runner;
pub mod scrape;
pub mod stem;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use error::{Error, Result};
