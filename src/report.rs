// src/report.rs
//! Per-edition report: filter + sort the enriched records, attach collisions,
//! and render the CSV and HTML artifacts in memory.

use std::fmt::Write as _;

use crate::collide::{kanji_list, row_collisions, RowCollisions};
use crate::config::options::SiteOptions;
use crate::core::sanitize::escape_html;
use crate::csv::{rows_to_string, COMMA};
use crate::kanji::KanjiInfo;
use crate::reference::Edition;

pub const CSV_HEADERS: [&str; 6] = [
    "kanji",
    "heisigId",
    "heisigKeyword",
    "heisigKeywordCollisions",
    "jpdbKeyword",
    "jpdbKeywordCollisions",
];

/// One rendered line of an edition report.
#[derive(Clone, Debug)]
pub struct ReportRow<'a> {
    pub info: &'a KanjiInfo,
    pub id: u32,
    pub collisions: RowCollisions<'a>,
}

/// Records in one edition, sorted by that edition's id, with collisions.
#[derive(Clone, Debug)]
pub struct EditionView<'a> {
    pub edition: Edition,
    pub rows: Vec<ReportRow<'a>>,
}

impl<'a> EditionView<'a> {
    pub fn new(all: &'a [KanjiInfo], edition: Edition) -> Self {
        let mut members: Vec<(u32, &'a KanjiInfo)> = all
            .iter()
            .filter_map(|info| info.heisig_id(edition).map(|id| (id, info)))
            .collect();
        members.sort_by_key(|(id, _)| *id);

        let view: Vec<&'a KanjiInfo> = members.iter().map(|(_, info)| *info).collect();
        let rows = members
            .iter()
            .map(|&(id, info)| ReportRow { info, id, collisions: row_collisions(&view, info, edition) })
            .collect();

        Self { edition, rows }
    }

    pub fn summary(&self) -> EditionSummary {
        EditionSummary {
            edition: self.edition,
            rows: self.rows.len(),
            different: self.rows.iter().filter(|r| r.info.is_different(self.edition)).count(),
            colliding: self.rows.iter().filter(|r| !r.collisions.is_empty()).count(),
        }
    }

    pub fn to_csv(&self) -> String {
        let e = self.edition;
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| {
                vec![
                    s!(r.info.kanji()),
                    r.id.to_string(),
                    s!(r.info.heisig_keyword(e)),
                    kanji_list(&r.collisions.heisig),
                    s!(r.info.jpdb_keyword()),
                    kanji_list(&r.collisions.jpdb),
                ]
            })
            .collect();
        rows_to_string(&CSV_HEADERS, &rows, COMMA)
    }

    pub fn to_html(&self, site: &SiteOptions) -> String {
        let e = self.edition;
        let mut out = String::with_capacity(512 + self.rows.len() * 400);
        out.push_str(&html_head(e));

        for r in &self.rows {
            let info = r.info;
            let class = if info.is_different(e) { r#" class="is-different""# } else { "" };
            let _ = writeln!(out, r#"        <tr id="{}"{class}>"#, anchor_id(info.kanji()));
            let _ = writeln!(out, "          <td>{}</td>", r.id);
            let _ = writeln!(out, "          <td>{}</td>", escape_html(info.kanji()));
            let _ = writeln!(
                out,
                "          <td>{}</td>",
                keyword_cell(&site.study_url(info.kanji()), info.heisig_keyword(e), &r.collisions.heisig)
            );
            let _ = writeln!(
                out,
                "          <td>{}</td>",
                keyword_cell(&site.lookup_url(info.kanji()), info.jpdb_keyword(), &r.collisions.jpdb)
            );
            out.push_str("        </tr>\n");
        }

        out.push_str(HTML_TAIL);
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditionSummary {
    pub edition: Edition,
    pub rows: usize,
    /// Rows whose Heisig and jpdb keywords differ.
    pub different: usize,
    /// Rows with at least one collision.
    pub colliding: usize,
}

/// Row anchor for a kanji, e.g. `kanji-人`.
pub fn anchor_id(kanji: &str) -> String {
    join!("kanji-", &escape_html(kanji))
}

fn keyword_cell(href: &str, keyword: &str, collisions: &[&KanjiInfo]) -> String {
    let mut cell = format!(r#"<a href="{}">{}</a>"#, escape_html(href), escape_html(keyword));
    for other in collisions {
        let _ = write!(
            cell,
            r##" (<a href="#{}">{}</a>)"##,
            anchor_id(other.kanji()),
            escape_html(other.kanji())
        );
    }
    cell
}

fn html_head(edition: Edition) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Kanji Keywords (Heisig {edition} Edition)</title>
    <style>
      table {{
        border-collapse: collapse;
      }}
      th, td {{
        border: 1px solid black;
        padding: 0.5em;
      }}
      .is-different {{
        background-color: #eee;
      }}
      tr:target {{
        outline: 2px solid #c00;
      }}
    </style>
  </head>
  <body>
    <h1>Kanji Keywords (Heisig {edition} Edition)</h1>
    <p>
      Shaded rows are kanji whose Heisig keyword differs from the JPDB keyword.
      A kanji in parentheses after a keyword is another kanji in this edition
      whose Heisig or JPDB keyword looks like the same word; click it to jump
      to its row.
    </p>
    <p>
      Keywords are compared after stemming each word with the English Snowball
      (Porter2) stemmer, so "finish" and "finished" count as the same keyword.
      Stemming is a heuristic: it misses some related words and merges some
      unrelated ones. A blank keyword (e.g. one JPDB does not show) is never
      compared, so kanji with blank keywords are not linked to each other.
    </p>
    <table>
      <thead>
        <tr>
          <th>Heisig ID</th>
          <th>Kanji</th>
          <th>Heisig Keyword</th>
          <th>JPDB Keyword</th>
        </tr>
      </thead>
      <tbody>
"#
    )
}

const HTML_TAIL: &str = "      </tbody>
    </table>
  </body>
</html>
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{PerEdition, ReferenceRecord};

    fn info(kanji: &str, ids: (Option<u32>, Option<u32>), heisig: &str, jpdb: &str) -> KanjiInfo {
        KanjiInfo::new(
            ReferenceRecord {
                kanji: s!(kanji),
                heisig_id: PerEdition::new(ids.0, ids.1),
                heisig_keyword: PerEdition::new(s!(heisig), s!(heisig)),
            },
            s!(jpdb),
        )
    }

    fn sample() -> Vec<KanjiInfo> {
        vec![
            info("了", (Some(30), Some(31)), "finished", "complete"),
            info("人", (Some(1), Some(1)), "person", "human"),
            info("終", (Some(20), None), "finish", "end"),
            info("丶", (None, None), "drop", "drop"),
            info("口", (Some(5), Some(6)), "mouth", "mouth"),
        ]
    }

    #[test]
    fn view_filters_and_sorts_by_edition_id() {
        let all = sample();
        let fifth = EditionView::new(&all, Edition::Fifth);
        let ids: Vec<u32> = fifth.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 5, 20, 30]);

        let sixth = EditionView::new(&all, Edition::Sixth);
        let kanji: Vec<&str> = sixth.rows.iter().map(|r| r.info.kanji()).collect();
        assert_eq!(kanji, vec!["人", "口", "了"]);
    }

    #[test]
    fn csv_rows_carry_collisions() {
        let all = sample();
        let csv = EditionView::new(&all, Edition::Fifth).to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADERS.join(","));
        assert_eq!(lines[1], "人,1,person,,human,");
        assert_eq!(lines[2], "口,5,mouth,,mouth,");
        assert_eq!(lines[3], "終,20,finish,了,end,");
        assert_eq!(lines[4], "了,30,finished,終,complete,");
        assert!(csv.ends_with("complete,\n"));
        assert!(!csv.contains('\r'));

        // 終 is not in the 6th edition, so 了 has nothing to collide with.
        let csv6 = EditionView::new(&all, Edition::Sixth).to_csv();
        assert!(csv6.lines().any(|l| l == "了,31,finished,,complete,"));
    }

    #[test]
    fn html_flags_differences_and_links_collisions() {
        let all = sample();
        let html = EditionView::new(&all, Edition::Fifth).to_html(&SiteOptions::default());

        assert!(html.contains("<title>Kanji Keywords (Heisig 5th Edition)</title>"));
        assert!(html.contains(r#"<tr id="kanji-人" class="is-different">"#));
        assert!(html.contains(r#"<tr id="kanji-口">"#));
        assert!(html.contains(r#"<a href="https://kanji.koohii.com/study/kanji/人">person</a>"#));
        assert!(html.contains(r#"<a href="https://jpdb.io/kanji/人">human</a>"#));
        assert!(html.contains(r##"<a href="https://kanji.koohii.com/study/kanji/終">finish</a> (<a href="#kanji-了">了</a>)"##));
        assert!(html.contains(r##"finished</a> (<a href="#kanji-終">終</a>)"##));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn html_escapes_keywords() {
        let all = vec![info("人", (Some(1), None), "<b>&", "x")];
        let html = EditionView::new(&all, Edition::Fifth).to_html(&SiteOptions::default());
        assert!(html.contains(">&lt;b&gt;&amp;</a>"));
        assert!(!html.contains("<b>&"));
    }

    #[test]
    fn blank_keywords_are_explained_and_not_linked() {
        let all = vec![info("一", (Some(1), None), "one", ""), info("二", (Some(2), None), "two", "")];
        let html = EditionView::new(&all, Edition::Fifth).to_html(&SiteOptions::default());
        assert!(html.contains("kanji with blank keywords are not linked"));
        assert!(!html.contains(r##"href="#kanji-"##));
    }

    #[test]
    fn summary_counts() {
        let all = sample();
        let s = EditionView::new(&all, Edition::Fifth).summary();
        assert_eq!(s, EditionSummary { edition: Edition::Fifth, rows: 4, different: 3, colliding: 2 });
    }
}
