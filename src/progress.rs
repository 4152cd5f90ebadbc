// src/progress.rs
/// Lightweight progress reporting for the scrape loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of kanji to look up.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once a kanji's keyword has been looked up.
    fn item_done(&mut self, _kanji: &str) {}

    /// Called at the end of the scrape, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
