//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Words**: extracts natural-language words from raw text
//! - **Ngram**: slides fixed-length character windows over padded words
//! - **Charset**: per-language character validity filtering

pub mod charset;
pub mod ngram;
pub mod words;

pub use charset::is_valid_language_word;
pub use ngram::{for_each_ngram, ngrams};
pub use words::{extract_words, natural_language_words};
