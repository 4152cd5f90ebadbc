// src/collide.rs
//! Keyword collisions: other kanji in the same edition whose Heisig or jpdb
//! keyword stems to the same root. Computed on demand, never stored.

use crate::kanji::KanjiInfo;
use crate::reference::Edition;

/// Every record in `view` other than `subject` whose `edition` Heisig stem
/// or jpdb stem equals `stem`, in `view` order. An empty stem never matches.
pub fn find_collisions<'a>(
    view: &[&'a KanjiInfo],
    subject: &KanjiInfo,
    edition: Edition,
    stem: &str,
) -> Vec<&'a KanjiInfo> {
    if stem.is_empty() {
        return Vec::new();
    }
    view.iter()
        .copied()
        .filter(|other| other.kanji() != subject.kanji())
        .filter(|other| other.heisig_stem(edition) == stem || other.jpdb_stem() == stem)
        .collect()
}

/// The two independent collision sets shown for one report row.
#[derive(Clone, Debug, Default)]
pub struct RowCollisions<'a> {
    /// Against the subject's Heisig keyword stem.
    pub heisig: Vec<&'a KanjiInfo>,
    /// Against the subject's jpdb keyword stem.
    pub jpdb: Vec<&'a KanjiInfo>,
}

impl RowCollisions<'_> {
    pub fn is_empty(&self) -> bool {
        self.heisig.is_empty() && self.jpdb.is_empty()
    }
}

pub fn row_collisions<'a>(view: &[&'a KanjiInfo], subject: &KanjiInfo, edition: Edition) -> RowCollisions<'a> {
    RowCollisions {
        heisig: find_collisions(view, subject, edition, subject.heisig_stem(edition)),
        jpdb: find_collisions(view, subject, edition, subject.jpdb_stem()),
    }
}

/// Space-joined glyphs, as written to the CSV.
pub fn kanji_list(infos: &[&KanjiInfo]) -> String {
    infos.iter().map(|i| i.kanji()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{PerEdition, ReferenceRecord};

    fn info(kanji: &str, id: u32, heisig: &str, jpdb: &str) -> KanjiInfo {
        KanjiInfo::new(
            ReferenceRecord {
                kanji: s!(kanji),
                heisig_id: PerEdition::new(Some(id), Some(id)),
                heisig_keyword: PerEdition::new(s!(heisig), s!(heisig)),
            },
            s!(jpdb),
        )
    }

    #[test]
    fn matches_heisig_or_jpdb_stem_excluding_self() {
        let all = [
            info("終", 1, "finish", "end"),
            info("了", 2, "finished", "complete"),
            info("末", 3, "extremity", "finishing"),
            info("人", 4, "person", "human"),
        ];
        let view: Vec<&KanjiInfo> = all.iter().collect();

        let found = find_collisions(&view, &all[0], Edition::Fifth, all[0].heisig_stem(Edition::Fifth));
        assert_eq!(kanji_list(&found), "了 末");

        let found = find_collisions(&view, &all[3], Edition::Fifth, all[3].jpdb_stem());
        assert!(found.is_empty());
    }

    #[test]
    fn collisions_are_symmetric() {
        let all = [
            info("終", 1, "finish", "end"),
            info("了", 2, "finished", "complete"),
            info("端", 3, "edge", "ending"),
            info("人", 4, "person", "human"),
        ];
        let view: Vec<&KanjiInfo> = all.iter().collect();
        let e = Edition::Sixth;

        for x in &all {
            for stem in [x.heisig_stem(e), x.jpdb_stem()] {
                for y in find_collisions(&view, x, e, stem) {
                    let back = find_collisions(&view, y, e, stem);
                    assert!(back.iter().any(|b| b.kanji() == x.kanji()), "{} -> {}", x.kanji(), y.kanji());
                }
            }
        }
    }

    #[test]
    fn empty_keywords_do_not_collide() {
        let all = [info("一", 1, "one", ""), info("二", 2, "two", "")];
        let view: Vec<&KanjiInfo> = all.iter().collect();
        let rc = row_collisions(&view, &all[0], Edition::Fifth);
        assert!(rc.is_empty());
    }

    #[test]
    fn row_collisions_keeps_sets_apart() {
        let all = [
            info("終", 1, "finish", "end"),
            info("了", 2, "finished", "complete"),
            info("端", 3, "edge", "ending"),
        ];
        let view: Vec<&KanjiInfo> = all.iter().collect();
        let rc = row_collisions(&view, &all[0], Edition::Fifth);
        assert_eq!(kanji_list(&rc.heisig), "了");
        assert_eq!(kanji_list(&rc.jpdb), "端");
    }
}
