//! Pooling of per-sample libraries.

use crate::protocol::fragment::Library;

/// Pool any number of barcoded libraries into one, preserving every
/// fragment and the order of the inputs. No deduplication, no reordering;
/// zero inputs yield an empty pool.
pub fn multiplex(libraries: impl IntoIterator<Item = Library>) -> Library {
    libraries.into_iter().flatten().collect()
}
