// src/kanji.rs
use crate::reference::{Edition, PerEdition, ReferenceRecord};
use crate::stem::stem;

/// A reference record enriched with the scraped keyword and the stems of
/// every keyword. Stems are only ever set alongside their keyword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KanjiInfo {
    kanji: String,
    heisig_id: PerEdition<Option<u32>>,
    heisig_keyword: PerEdition<String>,
    heisig_stem: PerEdition<String>,
    jpdb_keyword: String,
    jpdb_stem: String,
}

impl KanjiInfo {
    pub fn new(record: ReferenceRecord, jpdb_keyword: String) -> Self {
        let ReferenceRecord { kanji, heisig_id, heisig_keyword } = record;
        let heisig_stem = heisig_keyword.map(|k| stem(k));
        let jpdb_stem = stem(&jpdb_keyword);
        Self { kanji, heisig_id, heisig_keyword, heisig_stem, jpdb_keyword, jpdb_stem }
    }

    pub fn kanji(&self) -> &str { &self.kanji }

    pub fn heisig_id(&self, edition: Edition) -> Option<u32> {
        *self.heisig_id.get(edition)
    }

    pub fn heisig_keyword(&self, edition: Edition) -> &str {
        self.heisig_keyword.get(edition)
    }

    pub fn heisig_stem(&self, edition: Edition) -> &str {
        self.heisig_stem.get(edition)
    }

    pub fn jpdb_keyword(&self) -> &str { &self.jpdb_keyword }
    pub fn jpdb_stem(&self) -> &str { &self.jpdb_stem }

    /// Replace the scraped keyword; its stem follows.
    pub fn set_jpdb_keyword(&mut self, keyword: String) {
        self.jpdb_stem = stem(&keyword);
        self.jpdb_keyword = keyword;
    }

    /// Raw (unstemmed) keyword mismatch, used to shade report rows.
    pub fn is_different(&self, edition: Edition) -> bool {
        self.heisig_keyword(edition) != self.jpdb_keyword
    }
}
