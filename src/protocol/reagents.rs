//! Reagents of the library preparation: platform adapters, sample barcodes,
//! the restriction enzyme recognition site, and the shared `Chemistry`
//! configuration that carries them through the pipeline.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::base::{Nucleotide, Sequence};
use crate::errors::{InvalidSequence, MalformedSite};

/// The primary (P1) sequencing adapter: the Illumina read-2 adapter,
/// reverse-complemented, truncated to 33 bases.
pub const ADAPTER_P1: &str = "AGATCGGAAGAGCACACGTCTGAACTCCAGTCA";

/// The secondary (P2) sequencing adapter: the Illumina read-1 adapter,
/// reverse-complemented, truncated to 33 bases.
pub const ADAPTER_P2: &str = "AGATCGGAAGAGCGTCGTGTAGGGAAAGAGTGT";

/// Default length of the poly-A spacer placed between a repaired end and
/// the secondary adapter.
pub const DEFAULT_SPACER_LEN: usize = 14;

/// The two platform-specific flow-cell-binding adapter literals.
///
/// Adapters are explicit immutable configuration, passed into every stage
/// that needs them rather than living as module-level state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adapters {
    p1: Sequence,
    p2: Sequence,
}

impl Adapters {
    /// Create an adapter pair from caller-supplied literals.
    pub fn new(p1: Sequence, p2: Sequence) -> Self {
        Self { p1, p2 }
    }

    /// The default Illumina adapter pair.
    pub fn illumina() -> Self {
        Self {
            p1: ADAPTER_P1.parse().expect("hard-coded adapter literal"),
            p2: ADAPTER_P2.parse().expect("hard-coded adapter literal"),
        }
    }

    /// The primary adapter, ligated alongside the barcode after digestion.
    pub fn p1(&self) -> &Sequence {
        &self.p1
    }

    /// The secondary adapter, ligated during end repair.
    pub fn p2(&self) -> &Sequence {
        &self.p2
    }
}

impl Default for Adapters {
    fn default() -> Self {
        Self::illumina()
    }
}

/// A sample-identifying barcode.
///
/// Barcodes are caller-supplied; the protocol-level requirement that
/// multiplexed barcodes differ by at least two bases is a usage contract,
/// not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Barcode(Sequence);

impl Barcode {
    /// Create a barcode from a sequence.
    pub fn new(seq: Sequence) -> Self {
        Self(seq)
    }

    /// The barcode sequence.
    pub fn seq(&self) -> &Sequence {
        &self.0
    }

    /// Barcode length in bases.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` for the degenerate empty barcode.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Barcode {
    type Err = InvalidSequence;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// A restriction enzyme recognition site: a literal motif plus the offset at
/// which the top strand is cut, leaving staggered (sticky) ends.
///
/// For PstI the motif is CTGCAG with cut offset 5: digestion splits
/// `...CTGCA|G...`, so downstream fragments begin with the motif remainder
/// `G` and upstream fragments end with `CTGCA`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionSite {
    motif: Sequence,
    cut: usize,
}

impl RecognitionSite {
    /// Create a validated recognition site.
    ///
    /// Fails with `MalformedSite` if the motif is empty or the cut offset
    /// lies outside `[0, motif length]`.
    pub fn new(motif: Sequence, cut: usize) -> Result<Self, MalformedSite> {
        if motif.is_empty() {
            return Err(MalformedSite::EmptyMotif);
        }
        if cut > motif.len() {
            return Err(MalformedSite::CutOutOfRange {
                cut,
                motif_len: motif.len(),
            });
        }
        Ok(Self { motif, cut })
    }

    /// The literal recognition motif.
    pub fn motif(&self) -> &Sequence {
        &self.motif
    }

    /// The cut offset within the motif.
    pub fn cut(&self) -> usize {
        self.cut
    }

    /// The motif remainder downstream of the cut (`motif[cut..]`), which
    /// digestion prepends to every fragment.
    pub fn leading_stub(&self) -> Sequence {
        self.motif.subseq(self.cut..self.motif.len())
    }

    /// The motif remainder upstream of the cut (`motif[..cut]`), which
    /// digestion appends to every fragment.
    pub fn trailing_stub(&self) -> Sequence {
        self.motif.subseq(0..self.cut)
    }

    /// The sticky end carried by the ligated primary adapter: the reverse
    /// complement of the cut-length motif suffix. For palindromic sites this
    /// reconstitutes the full recognition motif at every ligated junction.
    pub fn adapter_overhang(&self) -> Sequence {
        self.motif.suffix(self.cut).reverse_complement()
    }
}

/// Shared immutable reagent configuration for one library preparation:
/// recognition site, adapter pair, and poly-A spacer length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chemistry {
    site: RecognitionSite,
    adapters: Adapters,
    spacer_len: usize,
}

impl Chemistry {
    /// Create a chemistry with the default spacer length.
    pub fn new(site: RecognitionSite, adapters: Adapters) -> Self {
        Self {
            site,
            adapters,
            spacer_len: DEFAULT_SPACER_LEN,
        }
    }

    /// Override the poly-A spacer length.
    pub fn with_spacer_len(mut self, spacer_len: usize) -> Self {
        self.spacer_len = spacer_len;
        self
    }

    /// The recognition site used for digestion and ligation. Ligation is
    /// only behaviorally correct when it sees the same site digestion used.
    pub fn site(&self) -> &RecognitionSite {
        &self.site
    }

    /// The platform adapter pair.
    pub fn adapters(&self) -> &Adapters {
        &self.adapters
    }

    /// Poly-A spacer length in bases.
    pub fn spacer_len(&self) -> usize {
        self.spacer_len
    }

    /// The poly-A spacer sequence.
    pub fn spacer(&self) -> Sequence {
        Sequence::from_nucleotides(vec![Nucleotide::A; self.spacer_len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    fn pst_i() -> RecognitionSite {
        RecognitionSite::new(seq("CTGCAG"), 5).unwrap()
    }

    #[test]
    fn test_default_adapters_are_33_bases() {
        let adapters = Adapters::illumina();
        assert_eq!(adapters.p1().len(), 33);
        assert_eq!(adapters.p2().len(), 33);
        assert_ne!(adapters.p1(), adapters.p2());
    }

    #[test]
    fn test_adapter_p1_matches_protocol_literal() {
        let adapters = Adapters::default();
        assert_eq!(
            adapters.p1().to_string(),
            "AGATCGGAAGAGCACACGTCTGAACTCCAGTCA"
        );
    }

    #[test]
    fn test_barcode_from_str() {
        let barcode: Barcode = "AATTCC".parse().unwrap();
        assert_eq!(barcode.len(), 6);
        assert_eq!(barcode.seq(), &seq("AATTCC"));
        assert!("AAXTCC".parse::<Barcode>().is_err());
    }

    #[test]
    fn test_recognition_site_valid() {
        let site = pst_i();
        assert_eq!(site.motif(), &seq("CTGCAG"));
        assert_eq!(site.cut(), 5);
    }

    #[test]
    fn test_recognition_site_cut_bounds() {
        // Cut at 0 and at motif length are both legal (blunt cutters).
        assert!(RecognitionSite::new(seq("CTGCAG"), 0).is_ok());
        assert!(RecognitionSite::new(seq("CTGCAG"), 6).is_ok());

        let err = RecognitionSite::new(seq("CTGCAG"), 7).unwrap_err();
        assert_eq!(
            err,
            MalformedSite::CutOutOfRange {
                cut: 7,
                motif_len: 6
            }
        );
    }

    #[test]
    fn test_recognition_site_empty_motif() {
        assert_eq!(
            RecognitionSite::new(seq(""), 0).unwrap_err(),
            MalformedSite::EmptyMotif
        );
    }

    #[test]
    fn test_recognition_site_stubs() {
        let site = pst_i();
        assert_eq!(site.leading_stub(), seq("G"));
        assert_eq!(site.trailing_stub(), seq("CTGCA"));
    }

    #[test]
    fn test_adapter_overhang_reconstitutes_palindromic_site() {
        let site = pst_i();
        // revcomp("TGCAG") == "CTGCA"
        assert_eq!(site.adapter_overhang(), seq("CTGCA"));

        // Overhang followed by the leading stub restores the full motif.
        let mut junction = site.adapter_overhang();
        junction.append(&site.leading_stub());
        assert_eq!(junction, seq("CTGCAG"));
    }

    #[test]
    fn test_chemistry_spacer() {
        let chem = Chemistry::new(pst_i(), Adapters::default());
        assert_eq!(chem.spacer_len(), DEFAULT_SPACER_LEN);
        assert_eq!(chem.spacer(), seq("AAAAAAAAAAAAAA"));

        let chem = chem.with_spacer_len(3);
        assert_eq!(chem.spacer(), seq("AAA"));
    }
}
