//! Character n-gram frequency counting.
//!
//! [`NgramCounter`] accumulates, for every window length in its range,
//! how often each character n-gram occurs across the natural-language
//! words of a text. Only words that pass the language charset filter
//! contribute. Lines are processed in input order; the resulting counts
//! are maps, so the final state is order-independent.

use std::io::{self, BufRead};

use rustc_hash::FxHashMap;

use crate::analyzer::charset::is_valid_language_word;
use crate::analyzer::ngram::for_each_ngram;
use crate::analyzer::words::extract_words;
use paracorp_types::NgramRange;

/// Accumulates n-gram occurrence counts for one language.
#[derive(Debug)]
pub struct NgramCounter {
    language: String,
    range: NgramRange,
    /// One count map per window length, indexed by `range.slot_of(len)`.
    counts: Vec<FxHashMap<String, u64>>,
}

impl NgramCounter {
    /// Creates an empty counter for a language and a window-length range.
    pub fn new(language: impl Into<String>, range: NgramRange) -> Self {
        Self {
            language: language.into(),
            range,
            counts: (0..range.count()).map(|_| FxHashMap::default()).collect(),
        }
    }

    /// The window-length range this counter covers.
    #[inline]
    pub fn range(&self) -> NgramRange {
        self.range
    }

    /// The ISO 639-1 code the charset filter runs against.
    #[inline]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Counts every n-gram of every natural-language word on one line.
    pub fn add_line(&mut self, line: &str) {
        let language = &self.language;
        let range = self.range;
        let counts = &mut self.counts;

        extract_words(line, |word| {
            if !is_valid_language_word(word, language) {
                return;
            }
            for (slot, len) in range.lengths().enumerate() {
                let map = &mut counts[slot];
                for_each_ngram(word, len, |gram| {
                    if let Some(n) = map.get_mut(gram) {
                        *n += 1;
                    } else {
                        map.insert(gram.to_string(), 1);
                    }
                });
            }
        });
    }

    /// Counts every line of a text body.
    pub fn add_text(&mut self, text: &str) {
        for line in text.lines() {
            self.add_line(line);
        }
    }

    /// Counts every line of a reader, propagating I/O errors.
    pub fn add_reader<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        for line in reader.lines() {
            self.add_line(&line?);
        }
        Ok(())
    }

    /// The count map for one window length, `None` outside the range.
    pub fn counts_for(&self, ngram_len: usize) -> Option<&FxHashMap<String, u64>> {
        self.range.slot_of(ngram_len).map(|slot| &self.counts[slot])
    }

    /// Total number of occurrences counted for one window length.
    pub fn total_for(&self, ngram_len: usize) -> u64 {
        self.counts_for(ngram_len)
            .map(|map| map.values().sum())
            .unwrap_or(0)
    }

    /// Consumes the counter and returns the per-length maps, ordered
    /// from the smallest to the largest window length.
    pub fn into_counts(self) -> Vec<FxHashMap<String, u64>> {
        self.counts
    }
}
