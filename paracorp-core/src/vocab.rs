//! Vocabulary building.
//!
//! Produces one lowercase unique natural-language word per line, in
//! first-seen order. Running the builder twice over the same input
//! yields byte-identical output.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::analyzer::words::natural_language_words;

/// Streams a source through the word extractor and writes each new
/// lowercase word on its own line. Returns the number of words written.
pub fn build_vocabulary<R, W>(source: R, out: &mut W) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut written = 0usize;

    for line in source.lines() {
        let line = line?;
        let lowered = line.trim().to_lowercase();

        for word in natural_language_words(&lowered) {
            if seen.contains(word) {
                continue;
            }
            out.write_all(word.as_bytes())?;
            out.write_all(b"\n")?;
            seen.insert(word.to_string());
            written += 1;
        }
    }

    Ok(written)
}

/// Path-based wrapper around [`build_vocabulary`].
pub fn build_vocabulary_file(source: &Path, output: &Path) -> io::Result<usize> {
    let reader = BufReader::new(File::open(source)?);
    let mut writer = BufWriter::new(File::create(output)?);
    let written = build_vocabulary(reader, &mut writer)?;
    writer.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn vocab(input: &str) -> String {
        let mut out = Vec::new();
        build_vocabulary(Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn words_are_lowercased() {
        assert_eq!(vocab("Hello World\n"), "hello\nworld\n");
    }

    #[test]
    fn duplicates_written_once() {
        assert_eq!(vocab("cat dog\ndog cat\n"), "cat\ndog\n");
    }

    #[test]
    fn case_variants_collapse() {
        assert_eq!(vocab("Cat CAT cat\n"), "cat\n");
    }

    #[test]
    fn first_seen_order_is_kept() {
        assert_eq!(vocab("zebra apple\nmango\n"), "zebra\napple\nmango\n");
    }

    #[test]
    fn digit_and_short_tokens_excluded() {
        assert_eq!(vocab("a b2 c33 reading\n"), "reading\n");
    }

    #[test]
    fn url_lines_contribute_nothing() {
        assert_eq!(vocab("http://example.com/page\nhello\n"), "hello\n");
    }

    #[test]
    fn empty_input_writes_nothing() {
        assert_eq!(vocab(""), "");
        assert_eq!(vocab("\n\n"), "");
    }

    #[test]
    fn returns_number_of_words_written() {
        let mut out = Vec::new();
        let n = build_vocabulary(Cursor::new("one two\ntwo three\n"), &mut out).unwrap();
        assert_eq!(n, 3);
    }

    #[test]
    fn idempotent_across_runs() {
        let input = "The quick brown fox\njumps over the lazy dog\n";
        assert_eq!(vocab(input), vocab(input));
    }

    #[test]
    fn unicode_lowercasing() {
        assert_eq!(vocab("ŽĀVĒT Iela\n"), "žāvēt\niela\n");
    }
}
