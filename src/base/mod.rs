//! Core sequence types: nucleotides and single-strand sequences.

pub mod nucleotide;
pub mod sequence;

pub use nucleotide::Nucleotide;
pub use sequence::Sequence;
