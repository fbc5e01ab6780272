//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use radprep::prelude::*;
//!
//! let site = RecognitionSite::new("CTGCAG".parse().unwrap(), 5).unwrap();
//! let chemistry = Chemistry::new(site, Adapters::illumina());
//! let fragments = digest(&"AACTGCAGAA".parse().unwrap(), chemistry.site());
//! assert_eq!(fragments.len(), 2);
//! ```

pub use crate::base::{Nucleotide, Sequence};
pub use crate::errors::{BuilderError, InvalidNucleotide, InvalidSequence, MalformedSite};
pub use crate::protocol::{
    amplify, digest, ligate, multiplex, repair_ends, shear, Adapters, Barcode, Chemistry, End,
    Fragment, Library, RecognitionSite,
};
pub use crate::simulation::{generate_scaffold, LibraryPrep, PrepBuilder, PrepConfig};
