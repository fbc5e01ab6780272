//! Barcoded primary-adapter ligation.

use crate::base::Sequence;
use crate::protocol::fragment::{End, Fragment, Library};
use crate::protocol::reagents::{Barcode, Chemistry};

/// Ligate the barcoded primary adapter onto both ends of every fragment.
///
/// Each end becomes `End::P1`, rendering left to right as:
/// reverse-complemented adapter, reverse-complemented barcode,
/// reverse-complemented cut-length motif suffix (the adapter's sticky end),
/// then the restriction stub the digestor left at that end. The right end
/// mirrors this on the opposite strand: stub, barcode, adapter.
///
/// The sticky ends only anneal correctly when `chemistry` carries the same
/// recognition site that was used for digestion; that coupling is a caller
/// contract, not validated here.
pub fn ligate(fragments: &[Fragment], chemistry: &Chemistry, barcode: &Barcode) -> Library {
    fragments
        .iter()
        .map(|fragment| ligate_one(fragment, chemistry, barcode))
        .collect()
}

fn ligate_one(fragment: &Fragment, chemistry: &Chemistry, barcode: &Barcode) -> Fragment {
    // Sticky or blunt input ends keep the interior untouched; anything else
    // (re-ligation of an already adaptered molecule) is flattened first so
    // the new blocks wrap the full rendered content.
    let (interior, left_stub, right_stub) = match (stub_of(fragment.left()), stub_of(fragment.right())) {
        (Some(left), Some(right)) => (fragment.interior().clone(), left, right),
        _ => (fragment.render(chemistry), Sequence::new(), Sequence::new()),
    };

    Fragment::new(
        interior,
        End::P1 {
            stub: left_stub,
            barcode: barcode.clone(),
        },
        End::P1 {
            stub: right_stub,
            barcode: barcode.clone(),
        },
    )
}

fn stub_of(end: &End) -> Option<Sequence> {
    match end {
        End::Blunt => Some(Sequence::new()),
        End::Overhang(stub) => Some(stub.clone()),
        End::P1 { .. } | End::P2 => None,
    }
}
