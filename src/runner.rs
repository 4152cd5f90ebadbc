// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::AppOptions,
    core::net::{Fetch, HttpFetcher, Polite},
    error::Result,
    file::write_atomic,
    progress::Progress,
    reference::{self, Edition, ReferenceRecord},
    report::{EditionSummary, EditionView},
    scrape,
    store::{CacheStats, CachedFetcher, PageCache},
};

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub kanji: usize,
    pub editions: Vec<EditionSummary>,
    pub files_written: Vec<PathBuf>,
    pub cache: CacheStats,
}

/// Full pipeline against the live site: load the reference list, look up
/// every kanji through the on-disk cache (network calls spaced by
/// `opts.net.pause`), render both editions and write them.
pub fn run(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    // Bad reference data fails before any request goes out.
    let records = reference::load(&opts.input)?;
    info!("Loaded {} reference kanji from {}", records.len(), opts.input.display());

    let cache = PageCache::open(&opts.cache_dir)?;
    let http = Polite::new(HttpFetcher::new(&opts.net)?, opts.net.pause);
    let mut fetcher = CachedFetcher::new(cache, http);

    let mut summary = run_with(opts, records, &mut fetcher, progress)?;
    summary.cache = fetcher.stats();
    info!("Cache: {} hits, {} fetched", summary.cache.hits, summary.cache.misses);
    Ok(summary)
}

/// Pipeline with a caller-supplied fetcher.
///
/// Nothing is written unless every lookup succeeded; both editions are
/// rendered in memory first and each file is replaced atomically.
pub fn run_with<F: Fetch>(
    opts: &AppOptions,
    records: Vec<ReferenceRecord>,
    fetcher: &mut F,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let infos = scrape::collect_kanji(records, fetcher, &opts.site, progress)?;

    let mut outputs = Vec::with_capacity(Edition::ALL.len() * 2);
    let mut editions = Vec::with_capacity(Edition::ALL.len());
    for edition in Edition::ALL {
        let view = EditionView::new(&infos, edition);
        let s = view.summary();
        info!(
            "{} edition: {} kanji, {} differ from jpdb, {} with collisions",
            edition, s.rows, s.different, s.colliding
        );
        editions.push(s);
        outputs.push((opts.csv_path(edition), view.to_csv()));
        outputs.push((opts.html_path(edition), view.to_html(&opts.site)));
    }

    let mut files_written = Vec::with_capacity(outputs.len());
    for (path, contents) in outputs {
        write_atomic(&path, &contents)?;
        files_written.push(path);
    }

    Ok(RunSummary { kanji: infos.len(), editions, files_written, cache: CacheStats::default() })
}
