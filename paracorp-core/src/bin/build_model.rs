//! Language-model building tool.
//!
//! Builds a character n-gram frequency model from a plaintext file and
//! writes it as JSON to `<output_dir>/<language>`.
//!
//! ## Usage
//!
//! ```bash
//! build_model <input_file> <language> <output_dir> [min_n max_n]
//! ```
//!
//! The window-length range defaults to 1 4.

use std::env;
use std::path::Path;
use std::process;

use paracorp_core::model::build_language_model;
use paracorp_types::NgramRange;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 4 && args.len() != 6 {
        eprintln!("Usage: build_model <input_file> <language> <output_dir> [min_n max_n]");
        process::exit(1);
    }

    let range = if args.len() == 6 {
        let bounds: Option<(usize, usize)> = args[4]
            .parse()
            .ok()
            .zip(args[5].parse().ok());

        match bounds.and_then(|(min, max)| NgramRange::new(min, max)) {
            Some(range) => range,
            None => {
                eprintln!("build_model: min_n and max_n must satisfy 1 <= min_n <= max_n");
                process::exit(1);
            }
        }
    } else {
        NgramRange::MODEL_DEFAULT
    };

    match build_language_model(Path::new(&args[1]), &args[2], Path::new(&args[3]), range) {
        Ok(path) => println!("Wrote model to {}", path.display()),
        Err(err) => {
            eprintln!("build_model: {}", err);
            process::exit(1);
        }
    }
}
