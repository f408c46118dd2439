//! JSON language-model files.
//!
//! A model file is a single JSON object, named after its language code:
//!
//! ```json
//! {"freq": {" c": 2, "ca": 2, ...}, "n_words": [9, 12, 12, 9], "name": "lv"}
//! ```
//!
//! `freq` merges all window lengths into one map (strings of different
//! lengths never collide), `n_words[i]` is the total occurrence count
//! at length `range.min + i`, and `name` is the language code. Keys are
//! kept in a `BTreeMap`, so the serialized form is deterministic;
//! serde_json writes non-ASCII characters raw, so the file stays
//! readable UTF-8. The schema is consumed by frequency-profile language
//! detectors.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::builder::NgramCounter;
use paracorp_types::NgramRange;

/// A character n-gram frequency model for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageModel {
    /// Occurrence count per n-gram, all window lengths merged.
    pub freq: BTreeMap<String, u64>,
    /// Total occurrence count per window length, smallest length first.
    pub n_words: Vec<u64>,
    /// The ISO 639-1 code the model was built for.
    pub name: String,
}

impl LanguageModel {
    /// Folds a finished counter into the file representation.
    pub fn from_counter(counter: NgramCounter) -> Self {
        let name = counter.language().to_string();
        let range = counter.range();

        let mut freq = BTreeMap::new();
        let mut n_words = vec![0u64; range.count()];

        for (slot, map) in counter.into_counts().into_iter().enumerate() {
            for (gram, count) in map {
                n_words[slot] += count;
                freq.insert(gram, count);
            }
        }

        Self { freq, n_words, name }
    }

    /// Serializes the model as compact JSON.
    pub fn write_json<W: Write>(&self, writer: W) -> io::Result<()> {
        serde_json::to_writer(writer, self).map_err(io::Error::other)
    }

    /// Deserializes a model from JSON.
    pub fn read_json<R: io::Read>(reader: R) -> io::Result<Self> {
        serde_json::from_reader(reader).map_err(io::Error::other)
    }
}

/// Builds a character n-gram language model from a plaintext file and
/// writes it to `output_dir/<language>`. Returns the written path.
///
/// Counts only n-grams drawn from natural-language words that pass the
/// language's charset filter.
pub fn build_language_model(
    input: &Path,
    language: &str,
    output_dir: &Path,
    range: NgramRange,
) -> io::Result<PathBuf> {
    let mut counter = NgramCounter::new(language, range);
    counter.add_reader(BufReader::new(File::open(input)?))?;

    let model = LanguageModel::from_counter(counter);
    let model_path = output_dir.join(language);

    let mut out = BufWriter::new(File::create(&model_path)?);
    model.write_json(&mut out)?;
    out.flush()?;

    Ok(model_path)
}
