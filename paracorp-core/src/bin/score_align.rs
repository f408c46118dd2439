//! Sentence-alignment scoring tool.
//!
//! Compares an aligned parallel corpus against a benchmark pair of
//! files and prints precision, recall and F1, one per line, to two
//! decimal places.
//!
//! ## Usage
//!
//! ```bash
//! score_align <bench_src> <bench_trg> <aligned_src> <aligned_trg>
//! ```

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use paracorp_core::scoring::{load_sentence_pairs, score_alignment, SentencePairs};

fn load(src_path: &str, trg_path: &str) -> io::Result<SentencePairs> {
    load_sentence_pairs(
        BufReader::new(File::open(src_path)?),
        BufReader::new(File::open(trg_path)?),
    )
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 5 {
        eprintln!("Usage: score_align <bench_src> <bench_trg> <aligned_src> <aligned_trg>");
        process::exit(1);
    }

    let benchmark = load(&args[1], &args[2]).unwrap_or_else(|err| {
        eprintln!("score_align: {}", err);
        process::exit(1);
    });

    let aligned = load(&args[3], &args[4]).unwrap_or_else(|err| {
        eprintln!("score_align: {}", err);
        process::exit(1);
    });

    match score_alignment(&benchmark, &aligned) {
        Ok(scores) => println!("{}", scores),
        Err(err) => {
            eprintln!("score_align: {}", err);
            process::exit(1);
        }
    }
}
