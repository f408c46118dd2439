//! Vocabulary building tool.
//!
//! Writes one lowercase unique natural-language word per line, in
//! first-seen order.
//!
//! ## Usage
//!
//! ```bash
//! build_vocab <source_file> <output_file>
//! ```

use std::env;
use std::path::Path;
use std::process;

use paracorp_core::vocab::build_vocabulary_file;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: build_vocab <source_file> <output_file>");
        process::exit(1);
    }

    match build_vocabulary_file(Path::new(&args[1]), Path::new(&args[2])) {
        Ok(count) => println!("Wrote {} word(s)", count),
        Err(err) => {
            eprintln!("build_vocab: {}", err);
            process::exit(1);
        }
    }
}
