// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::reference::Edition;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Heisig reference CSV.
    pub input: PathBuf,
    /// Directory receiving the per-edition CSV + HTML files.
    pub out_dir: PathBuf,
    /// Directory holding cached lookup pages.
    pub cache_dir: PathBuf,
    pub net: NetOptions,
    pub site: SiteOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_REFERENCE_FILE),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            cache_dir: PathBuf::from(CACHE_DIR),
            net: NetOptions::default(),
            site: SiteOptions::default(),
        }
    }
}

impl AppOptions {
    /// Output path without extension, e.g. `docs/kanji-keywords-5th-edition`.
    pub fn out_base(&self, edition: Edition) -> PathBuf {
        edition_base(&self.out_dir, edition)
    }

    pub fn csv_path(&self, edition: Edition) -> PathBuf {
        self.out_base(edition).with_extension("csv")
    }

    pub fn html_path(&self, edition: Edition) -> PathBuf {
        self.out_base(edition).with_extension("html")
    }
}

fn edition_base(dir: &Path, edition: Edition) -> PathBuf {
    dir.join(format!("{OUT_FILE_PREFIX}-{edition}-edition"))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub user_agent: String,
    pub timeout: Duration,
    /// Wait after every real network call.
    pub pause: Duration,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

/// Where keywords are looked up and linked to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    /// Scraped page prefix; the kanji glyph is appended.
    pub lookup_base: String,
    /// Heisig study page prefix used for links in the HTML report.
    pub study_base: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            lookup_base: s!(JPDB_KANJI_URL),
            study_base: s!(KOOHII_KANJI_URL),
        }
    }
}

impl SiteOptions {
    pub fn lookup_url(&self, kanji: &str) -> String {
        join!(&self.lookup_base, kanji)
    }

    pub fn study_url(&self, kanji: &str) -> String {
        join!(&self.study_base, kanji)
    }
}
