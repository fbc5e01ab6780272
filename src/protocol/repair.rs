//! End repair and secondary-adapter ligation.

use rayon::prelude::*;

use crate::protocol::fragment::{End, Fragment, Library};
use crate::protocol::reagents::Chemistry;

/// Repair fragment ends that lost the primary adapter during shearing.
///
/// Each end is examined independently with an exact fixed-width window
/// test on the rendered fragment: the leading window against the reverse
/// complement of the primary adapter, the trailing window against the
/// primary adapter itself. An end that fails its test gains `End::P2`,
/// a poly-A spacer plus the secondary adapter, oriented for that side.
/// A fragment carrying the primary adapter correctly at both ends passes
/// through unchanged.
pub fn repair_ends(fragments: &[Fragment], chemistry: &Chemistry) -> Library {
    let p1 = chemistry.adapters().p1();
    let p1_rc = p1.reverse_complement();

    fragments
        .par_iter()
        .map(|fragment| {
            let full = fragment.render(chemistry);
            let left = if full.starts_with(&p1_rc) {
                End::Blunt
            } else {
                End::P2
            };
            let right = if full.ends_with(p1) {
                End::Blunt
            } else {
                End::P2
            };
            Fragment::new(full, left, right)
        })
        .collect()
}
