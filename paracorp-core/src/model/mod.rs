//! Character n-gram language models.
//!
//! - **Builder**: counts n-gram occurrences over natural-language words
//! - **File**: the JSON model format and its path-based writer

pub mod builder;
pub mod file;

pub use builder::NgramCounter;
pub use file::{build_language_model, LanguageModel};
