//! Synthetic genome scaffolds.

use rand::Rng;

use crate::base::{Nucleotide, Sequence};

/// Generate a scaffold of exactly `length` bases, each drawn independently
/// and uniformly from {A, C, G, T}.
///
/// Length zero yields the empty sequence. The result is deterministic only
/// if the caller seeds `rng`.
pub fn generate_scaffold<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Sequence {
    let mut scaffold = Sequence::with_capacity(length);
    for _ in 0..length {
        let idx = rng.random_range(0..Nucleotide::ALPHABET.len());
        scaffold.push(Nucleotide::ALPHABET[idx]);
    }
    scaffold
}
