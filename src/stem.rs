// src/stem.rs
//! Keyword normalization for collision checks.
//!
//! Each word of a keyword is lowercased and reduced with the Snowball English
//! (Porter2) stemmer, so "finished" and "finish" compare equal. Stemming is a
//! heuristic: it can both miss related words and merge unrelated ones.

use rust_stemmers::{Algorithm, Stemmer};

/// Stem every word of `keyword` and rejoin with single spaces.
/// Empty or punctuation-only input yields `""`.
pub fn stem(keyword: &str) -> String {
    let stemmer = Stemmer::create(Algorithm::English);
    let lower = keyword.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");

    let mut out = String::with_capacity(lower.len());
    for word in words(&lower) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&stemmer.stem(word));
    }
    out
}

/// Letters, digits and apostrophes form words; everything else separates.
fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
}
