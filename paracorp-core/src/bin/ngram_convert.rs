//! Directory batch n-gram conversion tool.
//!
//! Rewrites every file of a source directory into its character n-gram
//! form, one same-named output file per input file.
//!
//! ## Usage
//!
//! ```bash
//! ngram_convert <src_dir> <dest_dir> <ngram_length>
//! ```

use std::env;
use std::path::Path;
use std::process;

use paracorp_core::convert::convert_dir;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 4 {
        eprintln!("Usage: ngram_convert <src_dir> <dest_dir> <ngram_length>");
        process::exit(1);
    }

    let ngram_size: usize = match args[3].parse() {
        Ok(n) if n >= 1 => n,
        _ => {
            eprintln!("ngram_convert: ngram_length must be a positive integer");
            process::exit(1);
        }
    };

    match convert_dir(Path::new(&args[1]), Path::new(&args[2]), ngram_size) {
        Ok(count) => println!("Converted {} file(s)", count),
        Err(err) => {
            eprintln!("ngram_convert: {}", err);
            process::exit(1);
        }
    }
}
