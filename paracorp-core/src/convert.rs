//! Directory batch n-gram conversion.
//!
//! Rewrites every line of every file in a source directory as its
//! space-joined character n-gram form and writes a same-named file into
//! the destination directory. This is the raw-text transform from
//! [`crate::analyzer::ngram::line_to_ngram_string`]: every character
//! position becomes an n-gram token, word or not.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::analyzer::ngram::line_to_ngram_string;

/// Converts one reader line by line, writing `\n`-terminated output.
pub fn convert_reader<R, W>(input: R, out: &mut W, ngram_size: usize) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        writeln!(out, "{}", line_to_ngram_string(line.trim(), ngram_size))?;
    }
    Ok(())
}

/// Converts every regular file in `src_dir` into a same-named file in
/// `dest_dir`. Subdirectories are skipped. Returns the number of files
/// converted.
pub fn convert_dir(src_dir: &Path, dest_dir: &Path, ngram_size: usize) -> io::Result<usize> {
    let mut converted = 0usize;

    for entry in fs::read_dir(src_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let input = BufReader::new(File::open(entry.path())?);
        let mut out = BufWriter::new(File::create(dest_dir.join(entry.file_name()))?);
        convert_reader(input, &mut out, ngram_size)?;
        out.flush()?;
        converted += 1;
    }

    Ok(converted)
}
