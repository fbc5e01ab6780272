//! Structured fragment records.
//!
//! A molecule's "shape", that is, which features sit at which end, is
//! modeled as explicit end descriptors on a `Fragment` rather than implied by
//! offsets into one flat string. The literal single-strand representation
//! is computed at the display boundary by `Fragment::render`, which keeps
//! the externally observable byte content identical to the flat-string
//! formulation of the protocol.

use crate::base::Sequence;
use crate::protocol::reagents::{Barcode, Chemistry};

/// Descriptor for one physical end of a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum End {
    /// A bare end with no attached feature (sheared piece, amplifier
    /// output).
    Blunt,

    /// A sticky restriction overhang: the motif-remainder stub digestion
    /// left exposed at this end.
    Overhang(Sequence),

    /// A barcoded primary adapter, including its own sticky overhang and
    /// the restriction stub it annealed to.
    P1 {
        /// Restriction stub carried over from the digested end
        stub: Sequence,
        /// Sample barcode between the overhang and the adapter
        barcode: Barcode,
    },

    /// A poly-A spacer plus the secondary adapter, attached by end repair.
    P2,
}

impl End {
    /// Rendered width of this end on the left side of a fragment.
    fn left_len(&self, chemistry: &Chemistry) -> usize {
        match self {
            Self::Blunt => 0,
            Self::Overhang(stub) => stub.len(),
            Self::P1 { stub, barcode } => {
                chemistry.adapters().p1().len()
                    + barcode.len()
                    + chemistry.site().cut()
                    + stub.len()
            }
            Self::P2 => chemistry.adapters().p2().len() + chemistry.spacer_len(),
        }
    }

    /// Rendered width of this end on the right side of a fragment.
    fn right_len(&self, chemistry: &Chemistry) -> usize {
        match self {
            Self::Blunt => 0,
            Self::Overhang(stub) => stub.len(),
            Self::P1 { stub, barcode } => {
                stub.len() + barcode.len() + chemistry.adapters().p1().len()
            }
            Self::P2 => chemistry.spacer_len() + chemistry.adapters().p2().len(),
        }
    }

    /// Write the literal block this end contributes at the 5' (left) side.
    ///
    /// The left-hand prefix encodes what is bound to the opposite strand's
    /// 3' end, so adapter and barcode appear reverse-complemented.
    fn write_left(&self, chemistry: &Chemistry, out: &mut Sequence) {
        match self {
            Self::Blunt => {}
            Self::Overhang(stub) => out.append(stub),
            Self::P1 { stub, barcode } => {
                out.append(&chemistry.adapters().p1().reverse_complement());
                out.append(&barcode.seq().reverse_complement());
                out.append(&chemistry.site().adapter_overhang());
                out.append(stub);
            }
            Self::P2 => {
                out.append(&chemistry.adapters().p2().reverse_complement());
                out.append(&chemistry.spacer().complement());
            }
        }
    }

    /// Write the literal block this end contributes at the 3' (right) side.
    fn write_right(&self, chemistry: &Chemistry, out: &mut Sequence) {
        match self {
            Self::Blunt => {}
            Self::Overhang(stub) => out.append(stub),
            Self::P1 { stub, barcode } => {
                out.append(stub);
                out.append(barcode.seq());
                out.append(chemistry.adapters().p1());
            }
            Self::P2 => {
                out.append(&chemistry.spacer());
                out.append(chemistry.adapters().p2());
            }
        }
    }
}

/// One strand of a double-stranded molecule at some pipeline stage:
/// an interior sequence flanked by two tagged ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    interior: Sequence,
    left: End,
    right: End,
}

/// An ordered collection of fragments, passed stage to stage.
pub type Library = Vec<Fragment>;

impl Fragment {
    /// Create a fragment from an interior sequence and two end descriptors.
    pub fn new(interior: Sequence, left: End, right: End) -> Self {
        Self {
            interior,
            left,
            right,
        }
    }

    /// Create a fragment with bare ends.
    pub fn blunt(interior: Sequence) -> Self {
        Self::new(interior, End::Blunt, End::Blunt)
    }

    /// The interior sequence, excluding any end blocks.
    pub fn interior(&self) -> &Sequence {
        &self.interior
    }

    /// The 5' (left) end descriptor.
    pub fn left(&self) -> &End {
        &self.left
    }

    /// The 3' (right) end descriptor.
    pub fn right(&self) -> &End {
        &self.right
    }

    /// Total rendered length in bases.
    pub fn rendered_len(&self, chemistry: &Chemistry) -> usize {
        self.left.left_len(chemistry) + self.interior.len() + self.right.right_len(chemistry)
    }

    /// Compute the literal single-strand representation of this fragment.
    pub fn render(&self, chemistry: &Chemistry) -> Sequence {
        let mut out = Sequence::with_capacity(self.rendered_len(chemistry));
        self.left.write_left(chemistry, &mut out);
        out.append(&self.interior);
        self.right.write_right(chemistry, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::reagents::{Adapters, RecognitionSite};

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    fn chemistry() -> Chemistry {
        let site = RecognitionSite::new(seq("CTGCAG"), 5).unwrap();
        Chemistry::new(site, Adapters::illumina())
    }

    #[test]
    fn test_blunt_fragment_renders_interior() {
        let chem = chemistry();
        let fragment = Fragment::blunt(seq("ACGTACGT"));
        assert_eq!(fragment.render(&chem), seq("ACGTACGT"));
        assert_eq!(fragment.rendered_len(&chem), 8);
    }

    #[test]
    fn test_overhang_ends_render_stubs() {
        let chem = chemistry();
        let fragment = Fragment::new(
            seq("AA"),
            End::Overhang(chem.site().leading_stub()),
            End::Overhang(chem.site().trailing_stub()),
        );
        assert_eq!(fragment.render(&chem), seq("GAACTGCA"));
        assert_eq!(fragment.rendered_len(&chem), 8);
    }

    #[test]
    fn test_p1_end_layout() {
        let chem = chemistry();
        let barcode: Barcode = "AATTCC".parse().unwrap();
        let fragment = Fragment::new(
            seq("AA"),
            End::P1 {
                stub: chem.site().leading_stub(),
                barcode: barcode.clone(),
            },
            End::P1 {
                stub: chem.site().trailing_stub(),
                barcode,
            },
        );

        let rendered = fragment.render(&chem);
        let p1 = chem.adapters().p1();

        // Left block: revcomp(P1) ++ revcomp(barcode) ++ overhang ++ stub
        assert!(rendered.starts_with(&p1.reverse_complement()));
        assert_eq!(rendered.subseq(33..39), seq("GGAATT"));
        assert_eq!(rendered.subseq(39..44), seq("CTGCA"));
        assert_eq!(rendered.subseq(44..45), seq("G"));

        // Right block: stub ++ barcode ++ P1
        assert!(rendered.ends_with(p1));
        let n = rendered.len();
        assert_eq!(rendered.subseq(n - 39..n - 33), seq("AATTCC"));
        assert_eq!(rendered.subseq(n - 44..n - 39), seq("CTGCA"));

        // Left block 33+6+5+1, interior 2, right block 5+6+33
        assert_eq!(rendered.len(), 45 + 2 + 44);
        assert_eq!(rendered.len(), fragment.rendered_len(&chem));
    }

    #[test]
    fn test_p2_end_layout() {
        let chem = chemistry();
        let fragment = Fragment::new(seq("ACGT"), End::P2, End::P2);
        let rendered = fragment.render(&chem);
        let p2 = chem.adapters().p2();

        // Left: revcomp(P2) ++ complement(polyA) == revcomp(P2) ++ poly-T
        assert!(rendered.starts_with(&p2.reverse_complement()));
        assert_eq!(rendered.subseq(33..47), seq("TTTTTTTTTTTTTT"));

        // Right: polyA ++ P2
        assert!(rendered.ends_with(p2));
        let n = rendered.len();
        assert_eq!(rendered.subseq(n - 47..n - 33), seq("AAAAAAAAAAAAAA"));

        assert_eq!(rendered.len(), 4 + 2 * (33 + 14));
        assert_eq!(rendered.len(), fragment.rendered_len(&chem));
    }

    #[test]
    fn test_mixed_ends() {
        let chem = chemistry();
        let fragment = Fragment::new(seq("ACGT"), End::Blunt, End::P2);
        let rendered = fragment.render(&chem);
        assert!(rendered.starts_with(&seq("ACGT")));
        assert!(rendered.ends_with(chem.adapters().p2()));
        assert_eq!(rendered.len(), 4 + 14 + 33);
    }
}
