// src/store.rs
//! Durable page cache.
//!
//! One file per URL under the cache directory, named by the BLAKE3 digest of
//! the URL and holding the raw response body. Entries never expire. The cache
//! assumes a single writer: running two scrapes against one directory at the
//! same time is unsupported.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::consts::CACHE_EXT;
use crate::core::net::Fetch;
use crate::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    /// Open (creating if needed) a cache rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| Error::Cache { path: dir.clone(), source })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path { &self.dir }

    /// Cache key: hex BLAKE3 of the URL. Request bodies never take part.
    pub fn key(url: &str) -> String {
        blake3::hash(url.as_bytes()).to_hex().to_string()
    }

    fn entry_path(&self, url: &str) -> PathBuf {
        self.dir.join(format!("{}.{CACHE_EXT}", Self::key(url)))
    }

    pub fn get(&self, url: &str) -> Result<Option<String>> {
        let path = self.entry_path(url);
        match fs::read_to_string(&path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::Cache { path, source }),
        }
    }

    /// Store `body` under `url`. Written to a temp file and renamed, so a
    /// crash never leaves a truncated entry behind.
    pub fn put(&self, url: &str, body: &str) -> Result<()> {
        let path = self.entry_path(url);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, body)
            .and_then(|_| fs::rename(&tmp, &path))
            .map_err(|source| {
                let _ = fs::remove_file(&tmp);
                Error::Cache { path, source }
            })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Serves from `cache` when possible, otherwise asks `inner` and remembers
/// the answer. Hits never reach `inner`, so they skip any politeness delay
/// that `inner` applies.
pub struct CachedFetcher<F> {
    cache: PageCache,
    inner: F,
    stats: CacheStats,
}

impl<F: Fetch> CachedFetcher<F> {
    pub fn new(cache: PageCache, inner: F) -> Self {
        Self { cache, inner, stats: CacheStats::default() }
    }

    pub fn get_or_fetch(&mut self, url: &str) -> Result<String> {
        if let Some(body) = self.cache.get(url)? {
            debug!("cache hit {url}");
            self.stats.hits += 1;
            return Ok(body);
        }
        let body = self.inner.fetch(url)?;
        self.cache.put(url, &body)?;
        self.stats.misses += 1;
        Ok(body)
    }

    pub fn stats(&self) -> CacheStats { self.stats }

    pub fn into_inner(self) -> F { self.inner }
}

impl<F: Fetch> Fetch for CachedFetcher<F> {
    fn fetch(&mut self, url: &str) -> Result<String> {
        self.get_or_fetch(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        calls: Vec<String>,
        fail: bool,
    }

    impl Fetch for Counting {
        fn fetch(&mut self, url: &str) -> Result<String> {
            self.calls.push(s!(url));
            if self.fail {
                return Err(Error::Fetch { url: s!(url), reason: s!("offline") });
            }
            Ok(format!("<p>{url}</p>"))
        }
    }

    #[test]
    fn miss_then_hit() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PageCache::open(dir.path()).unwrap();
        let mut f = CachedFetcher::new(cache, Counting::default());

        assert_eq!(f.get_or_fetch("https://x/a").unwrap(), "<p>https://x/a</p>");
        assert_eq!(f.get_or_fetch("https://x/a").unwrap(), "<p>https://x/a</p>");
        assert_eq!(f.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(f.into_inner().calls, vec![s!("https://x/a")]);
    }

    #[test]
    fn entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut f = CachedFetcher::new(PageCache::open(dir.path()).unwrap(), Counting::default());
            f.get_or_fetch("https://x/人").unwrap();
        }
        let offline = Counting { fail: true, ..Counting::default() };
        let mut f = CachedFetcher::new(PageCache::open(dir.path()).unwrap(), offline);
        assert_eq!(f.get_or_fetch("https://x/人").unwrap(), "<p>https://x/人</p>");
        assert!(f.into_inner().calls.is_empty());
    }

    #[test]
    fn failed_fetch_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PageCache::open(dir.path()).unwrap();
        let offline = Counting { fail: true, ..Counting::default() };
        let mut f = CachedFetcher::new(cache.clone(), offline);
        assert!(f.get_or_fetch("https://x/b").is_err());
        assert_eq!(cache.get("https://x/b").unwrap(), None);
    }

    #[test]
    fn failed_put_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PageCache::open(dir.path()).unwrap();
        let url = "https://x/c";
        // A directory squatting on the entry path makes the rename fail.
        fs::create_dir(cache.entry_path(url)).unwrap();

        assert!(matches!(cache.put(url, "<p>c</p>"), Err(Error::Cache { .. })));
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|x| x == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn key_depends_on_url_only() {
        assert_eq!(PageCache::key("https://x/a"), PageCache::key("https://x/a"));
        assert_ne!(PageCache::key("https://x/a"), PageCache::key("https://x/b"));
        assert_eq!(PageCache::key("u").len(), 64);
    }

    #[test]
    fn open_creates_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let cache = PageCache::open(&nested).unwrap();
        assert!(cache.dir().is_dir());
    }
}
