//! Natural-language word extraction.
//!
//! This module turns a line of raw Unicode text into the words worth
//! keeping for language modelling: maximal runs of letters and digits
//! glued by the connectors `’`, `'` and `-`, filtered down to tokens of
//! at least two characters that contain no digit. Underscore poisons
//! its neighbours: no word boundary can separate a letter from `_`, so
//! a run that touches an underscore on either side yields no candidate
//! at all. Lines that look like a URL or path (no separator anywhere,
//! at least one `/`) yield nothing either.
//!
//! ## Zero Allocation
//!
//! Extracted words are `&str` slices of the original input, emitted
//! through a callback. [`natural_language_words`] collects them into a
//! `Vec` when a materialized list is more convenient.
//!
//! ## Character classes
//!
//! The contract is pinned down by explicit classification functions
//! rather than a regex engine, so the exact same boundaries hold on any
//! platform:
//!
//! - *word character*: `char::is_alphanumeric` (letters, digits, numeric
//!   letters)
//! - *connector*: `’` (U+2019), `'`, `-`
//! - *separator*: `char::is_whitespace` plus the CJK/full-width dot and
//!   space variants U+00B7, U+2027, U+3000, U+30FB, U+FF65
//! - *digit*: decimal digits and other non-letter numerics (numeric
//!   letters such as Roman numerals stay word characters)
//! - *underscore*: boundary-poisoning; adjacent runs are discarded

use memchr::memchr;

/// Word-character class: Unicode alphanumerics. Underscore is excluded
/// by construction (`'_'.is_alphanumeric()` is false).
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Connector class: apostrophes and hyphen, allowed inside a word but
/// never at its edge.
#[inline(always)]
pub const fn is_connector(c: char) -> bool {
    matches!(c, '\u{2019}' | '\'' | '-')
}

/// Separator class: Unicode whitespace plus CJK/full-width dot and
/// space variants that common regex engines do not treat as `\s`.
#[inline(always)]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '\u{00b7}' | '\u{2027}' | '\u{3000}' | '\u{30fb}' | '\u{ff65}'
        )
}

/// Digit class used by the natural-word shape filter: decimal digits
/// and other non-letter numerics. Numeric letters (Roman numerals and
/// kin) are alphabetic and stay ordinary word characters.
#[inline(always)]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || (c.is_numeric() && !c.is_alphabetic())
}

/// Returns true when the whole line should be treated as one
/// non-linguistic token such as a URL or filesystem path: it contains a
/// forward slash but no separator character anywhere.
#[inline]
pub fn is_url_like(text: &str) -> bool {
    memchr(b'/', text.as_bytes()).is_some() && !text.chars().any(is_separator)
}

/// Extracts natural-language words and emits each as a slice of `text`.
///
/// Words are emitted left to right; repeated occurrences are all
/// emitted (this is extraction, not deduplication). Candidates shorter
/// than two characters or containing a digit are dropped.
///
/// # Example
///
/// ```
/// use paracorp_core::analyzer::words::extract_words;
///
/// let mut out = Vec::new();
/// extract_words("I'm reading a2 book", |w| out.push(w));
/// assert_eq!(out, ["I'm", "reading", "book"]);
/// ```
#[inline]
pub fn extract_words<'t, F>(text: &'t str, mut emit: F)
where
    F: FnMut(&'t str),
{
    if is_url_like(text) {
        return;
    }

    // Byte offsets of the first word char of the current run and one
    // past its last word char. Connectors extend a run but a candidate
    // only ever spans word char to word char, so leading and trailing
    // connectors fall off. Underscore cannot carry a word boundary, so
    // it discards the run it touches: a run it terminates is dropped,
    // and a run opening immediately after it is marked tainted.
    let mut word_start: Option<usize> = None;
    let mut word_end = 0usize;
    let mut in_run = false;
    let mut run_tainted = false;
    let mut after_underscore = false;

    let flush = |start: Option<usize>, end: usize, emit: &mut F| {
        if let Some(start) = start {
            let candidate = &text[start..end];
            if is_natural_word(candidate) {
                emit(candidate);
            }
        }
    };

    for (i, c) in text.char_indices() {
        if c == '_' {
            in_run = false;
            word_start = None;
            run_tainted = false;
            after_underscore = true;
        } else if is_word_char(c) {
            if !in_run {
                run_tainted = after_underscore;
            }
            in_run = true;
            after_underscore = false;
            if word_start.is_none() {
                word_start = Some(i);
            }
            word_end = i + c.len_utf8();
        } else if is_connector(c) {
            // Extends or opens a run, but candidate bounds only ever
            // move on a word char.
            if !in_run {
                run_tainted = after_underscore;
            }
            in_run = true;
            after_underscore = false;
        } else {
            if in_run && !run_tainted {
                flush(word_start, word_end, &mut emit);
            }
            in_run = false;
            word_start = None;
            run_tainted = false;
            after_underscore = false;
        }
    }

    if in_run && !run_tainted {
        flush(word_start, word_end, &mut emit);
    }
}

/// Collects the words of [`extract_words`] into a `Vec`.
#[inline]
pub fn natural_language_words(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    extract_words(text, |w| out.push(w));
    out
}

/// Shape filter applied to each candidate: at least two characters and
/// no digit anywhere. Candidates already consist solely of word chars
/// and connectors, so no other class needs re-checking.
#[inline]
fn is_natural_word(candidate: &str) -> bool {
    let mut chars = 0usize;
    for c in candidate.chars() {
        if is_digit(c) {
            return false;
        }
        chars += 1;
    }
    chars >= 2
}
