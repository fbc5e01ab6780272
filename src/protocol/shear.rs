//! Size-selecting shear.

use rayon::prelude::*;

use crate::protocol::fragment::{Fragment, Library};
use crate::protocol::reagents::Chemistry;

/// Shear every fragment into pieces near `target_size`.
///
/// A fragment of rendered length `L` is cut into `k = max(2, L /
/// target_size)` contiguous pieces at the `k + 1` evenly spaced breakpoints
/// spanning `[0, L]`, rounded to integers. Rounding can make adjacent
/// breakpoints coincide, producing a zero-length piece; the pieces still
/// partition the fragment exactly, with no gaps, overlaps, or lost bases.
///
/// Breakpoint placement is deterministic given the fragment lengths; the
/// output order follows the input fragments and, within a fragment, the
/// left-to-right pieces. Sheared pieces are blunt: any adapter or barcode
/// content they inherit lives in their sequence, not in end tags.
///
/// Panics if `target_size` is zero.
pub fn shear(fragments: &[Fragment], chemistry: &Chemistry, target_size: usize) -> Library {
    assert!(target_size > 0, "shear target size must be positive");
    fragments
        .par_iter()
        .flat_map_iter(|fragment| shear_one(fragment, chemistry, target_size))
        .collect()
}

fn shear_one(fragment: &Fragment, chemistry: &Chemistry, target_size: usize) -> Vec<Fragment> {
    let full = fragment.render(chemistry);
    let len = full.len();
    let pieces = (len / target_size).max(2);

    let mut out = Vec::with_capacity(pieces);
    let mut start = 0;
    for i in 1..=pieces {
        let end = breakpoint(i, pieces, len);
        out.push(Fragment::blunt(full.subseq(start..end)));
        start = end;
    }
    out
}

/// The `i`-th of `pieces + 1` evenly spaced integer breakpoints over
/// `[0, len]`, by linear interpolation rounded to the nearest integer.
fn breakpoint(i: usize, pieces: usize, len: usize) -> usize {
    ((i as f64) * (len as f64) / (pieces as f64)).round() as usize
}
