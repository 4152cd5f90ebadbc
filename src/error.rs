// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reference data: missing column `{0}`")]
    MissingColumn(&'static str),

    #[error("reference data line {line}: invalid {column} `{value}`")]
    BadId {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("reference data line {line}: duplicate kanji {kanji}")]
    DuplicateKanji { line: usize, kanji: String },

    #[error("http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("GET {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("cache {}: {source}", .path.display())]
    Cache {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
