//! Character n-gram windows.
//!
//! A word is padded with exactly one space on each side and a window of
//! `ngram_size` characters slides across the padded sequence. Windows
//! that consist entirely of whitespace are skipped; everything else is
//! emitted in order. The padding makes word boundaries visible to the
//! model: `"cat"` at size 2 becomes `" c"`, `"ca"`, `"at"`, `"t "`.
//!
//! Windows are measured in characters, not bytes, so multi-byte input
//! produces n-grams of the expected character length.

use smallvec::SmallVec;

/// Slides an `ngram_size`-character window over the padded word and
/// emits every window that is not entirely whitespace.
///
/// Nothing is emitted when `ngram_size` is 0 or when the padded word is
/// shorter than the window (neither is an error). Every emitted n-gram
/// has exactly `ngram_size` characters.
///
/// # Example
///
/// ```
/// use paracorp_core::analyzer::ngram::for_each_ngram;
///
/// let mut grams = Vec::new();
/// for_each_ngram("cat", 2, |g| grams.push(g.to_string()));
/// assert_eq!(grams, [" c", "ca", "at", "t "]);
/// ```
#[inline]
pub fn for_each_ngram<F>(word: &str, ngram_size: usize, mut emit: F)
where
    F: FnMut(&str),
{
    if ngram_size == 0 {
        return;
    }

    let mut padded: SmallVec<[char; 24]> = SmallVec::new();
    padded.push(' ');
    padded.extend(word.chars());
    padded.push(' ');

    if padded.len() < ngram_size {
        return;
    }

    let mut buf = String::with_capacity(ngram_size * 4);
    for window in padded.windows(ngram_size) {
        if window.iter().all(|c| c.is_whitespace()) {
            continue;
        }
        buf.clear();
        buf.extend(window.iter());
        emit(&buf);
    }
}

/// Collects the n-grams of [`for_each_ngram`] into a `Vec`.
#[inline]
pub fn ngrams(word: &str, ngram_size: usize) -> Vec<String> {
    let mut out = Vec::new();
    for_each_ngram(word, ngram_size, |g| out.push(g.to_string()));
    out
}

/// Rewrites a raw line as its space-joined character n-gram form.
///
/// This is a raw-text transform: the whole line is treated as one
/// padded character sequence, so every character position (punctuation
/// and digits included) becomes part of an n-gram token. Used by the
/// directory batch converter.
pub fn line_to_ngram_string(line: &str, ngram_size: usize) -> String {
    let mut out = String::with_capacity(line.len() * 2);
    for_each_ngram(line, ngram_size, |g| {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(g);
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn unigrams_skip_the_padding() {
        assert_eq!(ngrams("cat", 1), ["c", "a", "t"]);
    }

    #[test]
    fn bigrams_include_boundary_spaces() {
        assert_eq!(ngrams("cat", 2), [" c", "ca", "at", "t "]);
    }

    #[test]
    fn window_as_long_as_padded_minus_one() {
        assert_eq!(ngrams("cat", 4), [" cat", "cat "]);
    }

    #[test]
    fn window_exactly_padded_length() {
        assert_eq!(ngrams("cat", 5), [" cat "]);
    }

    #[test]
    fn window_longer_than_padded_word() {
        assert_eq!(ngrams("a", 5), Vec::<String>::new());
        assert_eq!(ngrams("cat", 6), Vec::<String>::new());
    }

    #[test]
    fn empty_word_yields_nothing() {
        // Padded form is two spaces; every window is all-whitespace.
        assert_eq!(ngrams("", 1), Vec::<String>::new());
        assert_eq!(ngrams("", 2), Vec::<String>::new());
    }

    #[test]
    fn zero_size_yields_nothing() {
        assert_eq!(ngrams("cat", 0), Vec::<String>::new());
    }

    #[test]
    fn single_char_word() {
        assert_eq!(ngrams("a", 1), ["a"]);
        assert_eq!(ngrams("a", 2), [" a", "a "]);
        assert_eq!(ngrams("a", 3), [" a "]);
    }

    #[test]
    fn windows_measured_in_chars_not_bytes() {
        assert_eq!(ngrams("žā", 2), [" ž", "žā", "ā "]);
        assert_eq!(ngrams("犬", 1), ["犬"]);
    }

    #[test]
    fn interior_whitespace_windows_skipped() {
        // Degenerate input: a word containing a space produces some
        // all-whitespace windows at size 1.
        assert_eq!(ngrams("a b", 1), ["a", "b"]);
    }

    #[test]
    fn deterministic() {
        assert_eq!(ngrams("reading", 3), ngrams("reading", 3));
    }

    #[test]
    fn line_transform_joins_with_spaces() {
        assert_eq!(line_to_ngram_string("cat", 2), " c ca at t ");
        assert_eq!(line_to_ngram_string("cat", 1), "c a t");
    }

    #[test]
    fn line_transform_keeps_non_word_chars() {
        assert_eq!(line_to_ngram_string("a,b", 1), "a , b");
    }

    #[test]
    fn line_transform_empty_line() {
        assert_eq!(line_to_ngram_string("", 3), "");
    }

    quickcheck! {
        fn every_ngram_has_exact_length(word: String, size: u8) -> bool {
            let n = (size % 6) as usize + 1;
            let mut ok = true;
            for_each_ngram(&word, n, |g| ok &= g.chars().count() == n);
            ok
        }

        fn ngram_count_bounded_by_window_count(word: String, size: u8) -> bool {
            let n = (size % 6) as usize + 1;
            let chars = word.chars().count();
            let mut count = 0usize;
            for_each_ngram(&word, n, |_| count += 1);
            count <= (chars + 3).saturating_sub(n)
        }

        fn collected_matches_emitted(word: String) -> bool {
            (1..=4).all(|n| {
                let mut emitted = Vec::new();
                for_each_ngram(&word, n, |g| emitted.push(g.to_string()));
                emitted == ngrams(&word, n)
            })
        }
    }
}
