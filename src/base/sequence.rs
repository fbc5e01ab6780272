use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Nucleotide;
use crate::errors::InvalidSequence;

/// A single DNA strand, read 5'->3' left to right.
///
/// `Sequence` stores an ordered vector of `Nucleotide`s. Pipeline stages
/// treat sequences as values: every operation returns a fresh `Sequence`
/// and never mutates its input in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence(Vec<Nucleotide>);

impl Sequence {
    /// Create a new, empty `Sequence`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a `Sequence` with reserved capacity for `capacity` bases.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Create a `Sequence` from a vector of `Nucleotide`s.
    pub fn from_nucleotides(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }

    /// Return the length of the sequence in bases.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence contains no bases.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the `Nucleotide` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0.get(index).copied()
    }

    /// Borrow the underlying `Nucleotide` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0
    }

    /// Append `base` to the end of the sequence.
    #[inline]
    pub fn push(&mut self, base: Nucleotide) {
        self.0.push(base);
    }

    /// Append all bases of `other` to the end of this sequence.
    #[inline]
    pub fn append(&mut self, other: &Sequence) {
        self.0.extend_from_slice(&other.0);
    }

    /// Return the base-pair complement: A <-> T, C <-> G.
    ///
    /// Order is preserved; reversal, when "reverse complement" semantics
    /// are needed, is a separate explicit operation.
    pub fn complement(&self) -> Sequence {
        Self(self.0.iter().map(|base| base.complement()).collect())
    }

    /// Return the reverse complement: the opposite strand of this sequence,
    /// read 5'->3'.
    pub fn reverse_complement(&self) -> Sequence {
        Self(self.0.iter().rev().map(|base| base.complement()).collect())
    }

    /// Return the bases in `range` as a new `Sequence`.
    ///
    /// Panics if the range is out of bounds (matching slice indexing).
    pub fn subseq(&self, range: Range<usize>) -> Sequence {
        Self(self.0[range].to_vec())
    }

    /// Return the first `n` bases, or the whole sequence if shorter.
    pub fn prefix(&self, n: usize) -> Sequence {
        self.subseq(0..n.min(self.len()))
    }

    /// Return the last `n` bases, or the whole sequence if shorter.
    pub fn suffix(&self, n: usize) -> Sequence {
        self.subseq(self.len().saturating_sub(n)..self.len())
    }

    /// Exact fixed-width window test: does this sequence begin with `other`?
    ///
    /// A sequence shorter than `other` never matches.
    pub fn starts_with(&self, other: &Sequence) -> bool {
        self.0.starts_with(&other.0)
    }

    /// Exact fixed-width window test: does this sequence end with `other`?
    pub fn ends_with(&self, other: &Sequence) -> bool {
        self.0.ends_with(&other.0)
    }

    /// Return the start offsets of every non-overlapping literal occurrence
    /// of `motif`, scanning left to right.
    ///
    /// After a match at offset `i` the scan resumes at `i + motif.len()`,
    /// so occurrences never overlap. An empty motif yields no matches.
    pub fn match_positions(&self, motif: &Sequence) -> Vec<usize> {
        let mut positions = Vec::new();
        if motif.is_empty() || motif.len() > self.len() {
            return positions;
        }

        let mut offset = 0;
        while offset + motif.len() <= self.len() {
            if self.0[offset..offset + motif.len()] == motif.0[..] {
                positions.push(offset);
                offset += motif.len();
            } else {
                offset += 1;
            }
        }
        positions
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &nuc in &self.0 {
            write!(f, "{}", nuc.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    /// Parse a textual representation (e.g. "ACGT") into a `Sequence`.
    ///
    /// Lowercase bases are accepted and normalized to uppercase; any other
    /// character produces an `InvalidSequence` error naming the offender.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data: Result<Vec<Nucleotide>, _> = s
            .chars()
            .enumerate()
            .map(|(position, character)| {
                u8::try_from(character)
                    .ok()
                    .and_then(Nucleotide::from_ascii)
                    .ok_or(InvalidSequence {
                        position,
                        character,
                    })
            })
            .collect();

        Ok(Self(data?))
    }
}

// Sequences cross the serialization boundary in their textual form so that
// JSON configuration stays readable ("AATTCC" rather than a base array).
impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Sequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}
