//! Core types for the paracorp corpus-preparation toolkit.
//!
//! This crate provides the fundamental types that are shared across
//! the paracorp ecosystem. Keeping types separate ensures:
//!
//! - **Cheap values**: everything here is `Copy`-sized or close to it
//! - **Cross-crate compatibility**: core and the CLI bins share the same types
//! - **Clean boundaries**: no circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;
use core::ops::RangeInclusive;

/// An inclusive range of character n-gram lengths.
///
/// Used by the language-model builder to decide which window sizes to
/// count. The range is validated on construction: `min` must be at least
/// 1 and no greater than `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramRange {
    min: usize,
    max: usize,
}

impl NgramRange {
    /// The range used by character-level language models: lengths 1 through 4.
    pub const MODEL_DEFAULT: Self = Self { min: 1, max: 4 };

    /// Creates a validated range. Returns `None` if `min` is zero or
    /// greater than `max`.
    #[inline]
    pub const fn new(min: usize, max: usize) -> Option<Self> {
        if min >= 1 && min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Smallest n-gram length in the range.
    #[inline(always)]
    pub const fn min(self) -> usize {
        self.min
    }

    /// Largest n-gram length in the range.
    #[inline(always)]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Number of distinct lengths covered by the range.
    #[inline(always)]
    pub const fn count(self) -> usize {
        self.max - self.min + 1
    }

    /// Iterates the lengths from `min` to `max` inclusive.
    #[inline]
    pub fn lengths(self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    /// Zero-based slot of a length within the range, if covered.
    #[inline]
    pub fn slot_of(self, len: usize) -> Option<usize> {
        if len >= self.min && len <= self.max {
            Some(len - self.min)
        } else {
            None
        }
    }
}

impl Default for NgramRange {
    fn default() -> Self {
        Self::MODEL_DEFAULT
    }
}

/// Errors produced by the alignment scorer.
///
/// These are the only failure modes beyond plain I/O: both correspond to
/// a zero denominator that would otherwise surface as a raw arithmetic
/// fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    /// The benchmark set contains no sentence pairs, so recall is undefined.
    #[error("benchmark set contains no sentence pairs")]
    EmptyBenchmark,
    /// No benchmark pair occurs in the aligned set, so precision is undefined.
    #[error("no benchmark pair occurs in the aligned set")]
    NoOverlap,
}

/// Precision, recall and F1 for one aligned corpus against a benchmark.
///
/// `Display` renders the scorer's CLI contract: one score per line,
/// formatted to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentScores {
    /// Fraction of counted benchmark pairs that were aligned correctly.
    pub precision: f64,
    /// Fraction of all benchmark pairs that were aligned correctly.
    pub recall: f64,
    /// Harmonic mean of precision and recall; exactly 0.0 when either is 0.
    pub f1: f64,
}

impl fmt::Display for AlignmentScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Precision: {:.2}", self.precision)?;
        writeln!(f, "Recall: {:.2}", self.recall)?;
        write!(f, "F1: {:.2}", self.f1)
    }
}
