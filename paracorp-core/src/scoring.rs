//! Sentence-alignment quality scoring.
//!
//! A benchmark and a candidate alignment are each a map from source
//! sentence to its claimed target translation, loaded from a pair of
//! line-aligned plaintext files. Precision asks how many of the
//! benchmark pairs the aligner got right among those it attempted;
//! recall asks how many it got right out of all benchmark pairs; F1 is
//! their harmonic mean.
//!
//! One counting rule deserves a note: a benchmark pair whose source is
//! missing from the aligned set still counts toward the precision
//! denominator when its *target* appears anywhere among the aligned
//! values. The pair was attempted, just attached to the wrong source.
//! This is a scoring-methodology choice and is kept as-is.

use std::io::{self, BufRead};

use rustc_hash::FxHashMap;

use paracorp_types::{AlignmentScores, ScoreError};

/// A map from source-language sentence to its target-language translation.
pub type SentencePairs = FxHashMap<String, String>;

/// Zips two line-aligned readers into sentence pairs.
///
/// Lines are trimmed on both sides. Pairing stops at the shorter file;
/// a duplicated source sentence keeps its last translation.
pub fn load_sentence_pairs<S, T>(src: S, trg: T) -> io::Result<SentencePairs>
where
    S: BufRead,
    T: BufRead,
{
    let mut pairs = SentencePairs::default();

    for (src_line, trg_line) in src.lines().zip(trg.lines()) {
        pairs.insert(
            src_line?.trim().to_string(),
            trg_line?.trim().to_string(),
        );
    }

    Ok(pairs)
}

/// Fraction of counted benchmark pairs the aligner got exactly right.
///
/// # Errors
///
/// Returns [`ScoreError::NoOverlap`] when no benchmark pair occurs in
/// the aligned set at all (zero denominator).
pub fn precision(
    benchmark: &SentencePairs,
    aligned: &SentencePairs,
) -> Result<f64, ScoreError> {
    let mut from_benchmark = 0u64;
    let mut correct = 0u64;

    for (src, trg) in benchmark {
        if let Some(aligned_trg) = aligned.get(src) {
            from_benchmark += 1;
            if aligned_trg == trg {
                correct += 1;
            }
        } else if aligned.values().any(|v| v == trg) {
            from_benchmark += 1;
        }
    }

    if from_benchmark == 0 {
        return Err(ScoreError::NoOverlap);
    }

    Ok(correct as f64 / from_benchmark as f64)
}

/// Fraction of all benchmark pairs the aligner got exactly right.
///
/// # Errors
///
/// Returns [`ScoreError::EmptyBenchmark`] when the benchmark holds no pairs.
pub fn recall(
    benchmark: &SentencePairs,
    aligned: &SentencePairs,
) -> Result<f64, ScoreError> {
    if benchmark.is_empty() {
        return Err(ScoreError::EmptyBenchmark);
    }

    let correct = benchmark
        .iter()
        .filter(|&(src, trg)| aligned.get(src) == Some(trg))
        .count();

    Ok(correct as f64 / benchmark.len() as f64)
}

/// Harmonic mean of precision and recall; exactly 0.0 when either is 0.
#[inline]
pub fn f1(precision: f64, recall: f64) -> f64 {
    if precision == 0.0 || recall == 0.0 {
        return 0.0;
    }
    (2.0 * precision * recall) / (precision + recall)
}

/// Computes all three scores for one aligned corpus against a benchmark.
pub fn score_alignment(
    benchmark: &SentencePairs,
    aligned: &SentencePairs,
) -> Result<AlignmentScores, ScoreError> {
    if benchmark.is_empty() {
        return Err(ScoreError::EmptyBenchmark);
    }

    let p = precision(benchmark, aligned)?;
    let r = recall(benchmark, aligned)?;

    Ok(AlignmentScores {
        precision: p,
        recall: r,
        f1: f1(p, r),
    })
}
