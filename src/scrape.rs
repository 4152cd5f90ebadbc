// src/scrape.rs
use crate::{
    config::options::SiteOptions,
    core::net::Fetch,
    error::Result,
    kanji::KanjiInfo,
    progress::Progress,
    reference::ReferenceRecord,
    specs,
};

/// Look up every reference kanji, strictly in input order and one at a time.
/// The first failed fetch aborts the whole batch.
pub fn collect_kanji<F: Fetch>(
    records: Vec<ReferenceRecord>,
    fetcher: &mut F,
    site: &SiteOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<KanjiInfo>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(records.len());
    }

    let mut infos = Vec::with_capacity(records.len());
    let mut result = Ok(());

    for record in records {
        let url = site.lookup_url(&record.kanji);
        let doc = match fetcher.fetch(&url) {
            Ok(doc) => doc,
            Err(e) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Lookup failed for {}", record.kanji));
                }
                result = Err(e);
                break;
            }
        };
        let keyword = specs::kanji::extract_keyword(&doc, &record.kanji);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&record.kanji);
        }
        infos.push(KanjiInfo::new(record, keyword));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    result.map(|_| infos)
}
