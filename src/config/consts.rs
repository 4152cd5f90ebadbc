// src/config/consts.rs

// Net config
pub const JPDB_KANJI_URL: &str = "https://jpdb.io/kanji/";
pub const KOOHII_KANJI_URL: &str = "https://kanji.koohii.com/study/kanji/";
pub const USER_AGENT: &str = concat!("kanji_keywords/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Politeness: the lookup site blocks clients that go faster
pub const REQUEST_PAUSE_MS: u64 = 1_000;

// Local cache
pub const CACHE_DIR: &str = ".cache";
pub const CACHE_EXT: &str = "html";

// Input
pub const DEFAULT_REFERENCE_FILE: &str = "vendor/heisig-kanjis/heisig-kanjis.csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "docs";
pub const OUT_FILE_PREFIX: &str = "kanji-keywords";
