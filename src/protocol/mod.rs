//! The library-preparation protocol: pure sequence-transformation stages.
//!
//! Stages consume and produce whole `Library` collections and are
//! referentially transparent given their inputs. The intended composition
//! order is digestion, ligation, multiplexing, shearing, end repair, and
//! selective amplification; every stage tolerates an empty input and
//! returns an empty output for it.

pub mod amplify;
pub mod digest;
pub mod fragment;
pub mod ligate;
pub mod multiplex;
pub mod reagents;
pub mod repair;
pub mod shear;

pub use amplify::amplify;
pub use digest::digest;
pub use fragment::{End, Fragment, Library};
pub use ligate::ligate;
pub use multiplex::multiplex;
pub use reagents::{Adapters, Barcode, Chemistry, RecognitionSite};
pub use repair::repair_ends;
pub use shear::shear;
