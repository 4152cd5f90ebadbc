// src/specs/kanji.rs
//! Scraping spec for a jpdb.io kanji page.
//!
//! The keyword sits in the element right after its label:
//!
//! ```text
//! <div class="subsection-label">Keyword</div>
//! <div class="subsection">person</div>
//! ```

use tracing::debug;

use crate::core::html::{element_bounds, next_sibling, next_tag, text_content};

pub const LABEL_CLASS: &str = "subsection-label";
pub const SECTION_CLASS: &str = "subsection";
pub const KEYWORD_LABEL: &str = "Keyword";

/// Text of the section following the first "Keyword" label, or `""` when the
/// page has no such pair.
pub fn extract_keyword(doc: &str, kanji: &str) -> String {
    let mut pos = 0usize;
    while let Some(tag) = next_tag(doc, pos) {
        pos = tag.end;
        if tag.closing || !tag.has_class(LABEL_CLASS) {
            continue;
        }
        let Some((inner_end, outer_end)) = element_bounds(doc, &tag) else {
            continue;
        };
        if !text_content(&doc[tag.end..inner_end]).contains(KEYWORD_LABEL) {
            continue;
        }
        if let Some(keyword) = section_text(doc, outer_end) {
            return keyword;
        }
    }
    debug!(kanji, "no keyword section");
    s!()
}

fn section_text(doc: &str, after_label: usize) -> Option<String> {
    let section = next_sibling(doc, after_label).filter(|t| t.has_class(SECTION_CLASS))?;
    let (inner_end, _) = element_bounds(doc, &section)?;
    Some(text_content(&doc[section.end..inner_end]))
}
