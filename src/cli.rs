// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use crate::config::consts::{CACHE_DIR, DEFAULT_OUT_DIR, DEFAULT_REFERENCE_FILE, REQUEST_PAUSE_MS};
use crate::config::options::AppOptions;
use crate::progress::Progress;

/// Compare Heisig kanji keywords with jpdb.io and flag keyword collisions.
#[derive(Parser, Debug)]
#[command(name = "kanji_keywords", version, about)]
pub struct Args {
    /// Heisig reference CSV
    #[arg(short, long, default_value = DEFAULT_REFERENCE_FILE)]
    pub input: PathBuf,

    /// Directory for the per-edition CSV and HTML reports
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Directory for cached lookup pages
    #[arg(long, default_value = CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Pause after each network request, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        let mut opts = AppOptions {
            input: self.input,
            out_dir: self.out_dir,
            cache_dir: self.cache_dir,
            ..AppOptions::default()
        };
        opts.net.pause = Duration::from_millis(self.pause_ms);
        opts
    }
}

/// Logs a line per kanji at debug level and every `STEP` kanji at info.
struct CliProgress {
    total: usize,
    done: usize,
}

impl CliProgress {
    const STEP: usize = 100;
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        info!("Looking up {total} kanji");
    }

    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }

    fn item_done(&mut self, kanji: &str) {
        self.done += 1;
        tracing::debug!("[{}/{}] {kanji}", self.done, self.total);
        if self.done % Self::STEP == 0 {
            info!("[{}/{}]", self.done, self.total);
        }
    }

    fn finish(&mut self) {
        info!("Looked up {}/{} kanji", self.done, self.total);
    }
}

pub fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    crate::log::init();

    let opts = Args::parse().into_options();
    let mut progress = CliProgress { total: 0, done: 0 };
    let summary = crate::runner::run(&opts, Some(&mut progress))?;

    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
