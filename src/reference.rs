// src/reference.rs
//! Heisig reference list: one row per kanji, with per-edition ids and keywords.
//!
//! Columns are found by header name, so extra columns (readings, components,
//! stroke count, JLPT level) and their order do not matter.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::csv::{self, COMMA};
use crate::error::{Error, Result};

pub const COL_KANJI: &str = "kanji";
pub const COL_ID_5TH: &str = "id_5th_ed";
pub const COL_ID_6TH: &str = "id_6th_ed";
pub const COL_KEYWORD_5TH: &str = "keyword_5th_ed";
pub const COL_KEYWORD_6TH: &str = "keyword_6th_ed";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edition {
    Fifth,
    Sixth,
}

impl Edition {
    /// Processing order.
    pub const ALL: [Edition; 2] = [Edition::Fifth, Edition::Sixth];

    pub fn number(self) -> u8 {
        match self {
            Edition::Fifth => 5,
            Edition::Sixth => 6,
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}th", self.number())
    }
}

/// One value per edition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PerEdition<T> {
    pub fifth: T,
    pub sixth: T,
}

impl<T> PerEdition<T> {
    pub fn new(fifth: T, sixth: T) -> Self {
        Self { fifth, sixth }
    }

    pub fn get(&self, edition: Edition) -> &T {
        match edition {
            Edition::Fifth => &self.fifth,
            Edition::Sixth => &self.sixth,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PerEdition<U> {
        PerEdition { fifth: f(&self.fifth), sixth: f(&self.sixth) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceRecord {
    pub kanji: String,
    /// `None` when the kanji is not part of that edition.
    pub heisig_id: PerEdition<Option<u32>>,
    pub heisig_keyword: PerEdition<String>,
}

pub fn load(path: &Path) -> Result<Vec<ReferenceRecord>> {
    let text = fs::read_to_string(path)
        .map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
    parse(&text)
}

/// Parse reference CSV text (header row required).
pub fn parse(text: &str) -> Result<Vec<ReferenceRecord>> {
    let mut rows = csv::parse_rows(text, COMMA).into_iter();
    let Some(header) = rows.next() else {
        return Err(Error::MissingColumn(COL_KANJI));
    };

    let col = |name: &'static str| {
        header
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(Error::MissingColumn(name))
    };
    let kanji_ix = col(COL_KANJI)?;
    let id_ix = PerEdition::new(col(COL_ID_5TH)?, col(COL_ID_6TH)?);
    let kw_ix = PerEdition::new(col(COL_KEYWORD_5TH)?, col(COL_KEYWORD_6TH)?);

    let mut seen = HashSet::new();
    let mut out = Vec::new();

    // Header is line 1.
    for (i, row) in rows.enumerate() {
        let line = i + 2;
        let cell = |ix: usize| row.get(ix).map(String::as_str).unwrap_or("");

        let kanji = s!(cell(kanji_ix).trim());
        if !seen.insert(kanji.clone()) {
            return Err(Error::DuplicateKanji { line, kanji });
        }

        let heisig_id = PerEdition::new(
            parse_id(cell(id_ix.fifth), line, COL_ID_5TH)?,
            parse_id(cell(id_ix.sixth), line, COL_ID_6TH)?,
        );
        let heisig_keyword = PerEdition::new(s!(cell(kw_ix.fifth)), s!(cell(kw_ix.sixth)));

        out.push(ReferenceRecord { kanji, heisig_id, heisig_keyword });
    }
    Ok(out)
}

/// Blank means "not in this edition"; anything else must be a number.
fn parse_id(raw: &str, line: usize, column: &'static str) -> Result<Option<u32>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| Error::BadId { line, column, value: s!(raw) })
}
