// src/specs/mod.rs
//! # Scraping "specs"
//!
//! Page-specific extraction rules. Each spec knows where the value lives in
//! one remote page's HTML and how to pull it out with `core::html` helpers.
//!
//! Specs never fetch, cache or log above debug level; they take a document
//! string and return plain data. Misses degrade to empty values so a layout
//! change shows up as blanks in the report rather than aborting a long run.
//!
//! ## Current specs
//! - `kanji` – the "Keyword" field of a jpdb.io kanji page.
//!
//! Specs are tested offline against small captured snippets.
pub mod kanji;
