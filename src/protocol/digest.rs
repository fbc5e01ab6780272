//! Restriction digestion.

use crate::base::Sequence;
use crate::protocol::fragment::{End, Fragment, Library};
use crate::protocol::reagents::RecognitionSite;

/// Digest `scaffold` at every non-overlapping occurrence of the recognition
/// motif.
///
/// The motif itself is removed by the split, but each resulting fragment
/// re-gains the staggered cut remainders as sticky `Overhang` ends: the
/// motif remainder downstream of the cut is prepended and the remainder
/// upstream of the cut is appended. This applies to the first and last
/// pieces as well, whose outer ends therefore carry a synthetic stub that
/// does not correspond to a true in-genome cut; this is the accepted
/// artifact of digesting a finite, linear scaffold.
///
/// The fragment count is always (motif occurrences) + 1; a scaffold without
/// any occurrence yields a single stub-flanked fragment.
pub fn digest(scaffold: &Sequence, site: &RecognitionSite) -> Library {
    let motif = site.motif();
    let positions = scaffold.match_positions(motif);

    let mut fragments = Library::with_capacity(positions.len() + 1);
    let mut start = 0;
    for &pos in &positions {
        fragments.push(cut_piece(scaffold.subseq(start..pos), site));
        start = pos + motif.len();
    }
    fragments.push(cut_piece(scaffold.subseq(start..scaffold.len()), site));
    fragments
}

fn cut_piece(interior: Sequence, site: &RecognitionSite) -> Fragment {
    Fragment::new(
        interior,
        End::Overhang(site.leading_stub()),
        End::Overhang(site.trailing_stub()),
    )
}
