//! Selective amplification.

use rayon::prelude::*;

use crate::protocol::fragment::{Fragment, Library};
use crate::protocol::reagents::Chemistry;

/// Retain only molecules a primer pair would amplify: exactly one
/// primary-adapter end and one secondary-adapter end.
///
/// A fragment whose rendered sequence begins with the reverse complement of
/// the primary adapter and ends with the secondary adapter is kept as-is.
/// A fragment with the opposite layout (reverse-complemented secondary
/// adapter prefix, primary adapter suffix) is the same molecule read from
/// the other strand; it is kept after reverse-complementing the whole
/// sequence, so every survivor shares one canonical 5'->3' layout.
///
/// Everything else (two primary ends, two secondary ends, or no valid
/// adapter signature) is silently dropped: an expected outcome of the
/// protocol, not a fault. Survivors keep their input relative order.
pub fn amplify(fragments: &[Fragment], chemistry: &Chemistry) -> Library {
    let p1 = chemistry.adapters().p1();
    let p2 = chemistry.adapters().p2();
    let p1_rc = p1.reverse_complement();
    let p2_rc = p2.reverse_complement();

    fragments
        .par_iter()
        .filter_map(|fragment| {
            let full = fragment.render(chemistry);
            if full.starts_with(&p1_rc) && full.ends_with(p2) {
                Some(fragment.clone())
            } else if full.starts_with(&p2_rc) && full.ends_with(p1) {
                Some(Fragment::blunt(full.reverse_complement()))
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Sequence;
    use crate::protocol::reagents::{Adapters, RecognitionSite};

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    fn chemistry() -> Chemistry {
        let site = RecognitionSite::new(seq("CTGCAG"), 5).unwrap();
        Chemistry::new(site, Adapters::illumina())
    }

    fn canonical(chemistry: &Chemistry, middle: &str) -> Fragment {
        let mut content = chemistry.adapters().p1().reverse_complement();
        content.append(&seq(middle));
        content.append(chemistry.adapters().p2());
        Fragment::blunt(content)
    }

    #[test]
    fn test_amplify_is_identity_on_canonical_library() {
        let chem = chemistry();
        let library = vec![
            canonical(&chem, "ACGTACGT"),
            canonical(&chem, "TTTTAAAA"),
        ];
        assert_eq!(amplify(&library, &chem), library);
    }

    #[test]
    fn test_amplify_drops_double_p1() {
        let chem = chemistry();
        let mut content = chem.adapters().p1().reverse_complement();
        content.append(&seq("ACGT"));
        content.append(chem.adapters().p1());
        let library = vec![Fragment::blunt(content)];
        assert!(amplify(&library, &chem).is_empty());
    }

    #[test]
    fn test_amplify_drops_double_p2() {
        let chem = chemistry();
        let mut content = chem.adapters().p2().reverse_complement();
        content.append(&seq("ACGT"));
        content.append(chem.adapters().p2());
        assert!(amplify(&[Fragment::blunt(content)], &chem).is_empty());
    }

    #[test]
    fn test_amplify_drops_unadaptered() {
        let chem = chemistry();
        assert!(amplify(&[Fragment::blunt(seq("ACGTACGT"))], &chem).is_empty());
    }

    #[test]
    fn test_amplify_normalizes_orientation() {
        let chem = chemistry();
        let forward = canonical(&chem, "ACGTAACC");
        let flipped = Fragment::blunt(forward.render(&chem).reverse_complement());

        let amplified = amplify(&[flipped], &chem);
        assert_eq!(amplified.len(), 1);
        assert_eq!(amplified[0].render(&chem), forward.render(&chem));
    }

    #[test]
    fn test_amplify_preserves_survivor_order() {
        let chem = chemistry();
        let a = canonical(&chem, "AAAA");
        let b = Fragment::blunt(seq("ACGT")); // dropped
        let c = canonical(&chem, "CCCC");
        let amplified = amplify(&[a.clone(), b, c.clone()], &chem);
        assert_eq!(amplified, vec![a, c]);
    }

    #[test]
    fn test_amplify_keeps_repaired_fragment_with_p2_tag() {
        use crate::protocol::fragment::End;

        // A repaired fragment whose P2 lives in an end tag renders to the
        // canonical layout and must survive with its tag intact.
        let chem = chemistry();
        let mut content = chem.adapters().p1().reverse_complement();
        content.append(&seq("ACGTACGT"));
        let fragment = Fragment::new(content, End::Blunt, End::P2);

        let amplified = amplify(&[fragment.clone()], &chem);
        assert_eq!(amplified, vec![fragment]);
    }

    #[test]
    fn test_amplify_empty_library() {
        let chem = chemistry();
        assert!(amplify(&[], &chem).is_empty());
    }
}
