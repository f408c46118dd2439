//! Parallel-corpus preparation and alignment-scoring toolkit.
//!
//! paracorp is a small set of independent, single-pass text transforms
//! used to prepare and evaluate parallel-text corpora:
//!
//! - **Analyzer**: natural-language word extraction, character n-gram
//!   windows and per-language charset validity ([`analyzer`])
//! - **Language models**: character n-gram frequency counting and the
//!   JSON model file format ([`model`])
//! - **Vocabulary**: first-seen-order unique word lists ([`vocab`])
//! - **Conversion**: raw-line character n-gram rewriting over whole
//!   directories ([`convert`])
//! - **Scoring**: precision/recall/F1 for sentence alignment ([`scoring`])
//!
//! Everything is synchronous and single-threaded: each operation reads
//! its input line by line, applies a pure function and writes the result.
//! There is no shared state across invocations.

pub mod analyzer;
pub mod convert;
pub mod model;
pub mod scoring;
pub mod vocab;
