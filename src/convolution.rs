use fnv::FnvHashMap;
use itertools::Itertools;

use crate::mass::{Mass, MAX_RESIDUE_MASS, MIN_RESIDUE_MASS};
use crate::rank::truncate_ties;
use crate::spectrum::Spectrum;

/// Spectral convolution: every strictly positive pairwise difference
/// within `spectrum`, counted with multiplicity. A difference arising
/// from peaks with multiplicities `cx` and `cy` contributes `cx * cy`.
/// Sorted by count descending, then mass ascending
pub fn convolution(spectrum: &Spectrum) -> Vec<(Mass, u32)> {
    let mut counts = FnvHashMap::<Mass, u32>::default();
    for ((x, cx), (y, cy)) in spectrum.iter().cartesian_product(spectrum.iter()) {
        if x > y {
            *counts.entry(x - y).or_insert(0) += cx * cy;
        }
    }
    let mut ranked = counts.into_iter().collect::<Vec<_>>();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}

/// Candidate residue masses for an observed spectrum: convolution
/// differences within the single-residue range, keeping the `k` most
/// frequent together with every mass that ties the k-th count
pub fn candidate_masses(spectrum: &Spectrum, k: usize) -> Vec<Mass> {
    let mut ranked = convolution(spectrum)
        .into_iter()
        .filter(|&(mass, _)| (MIN_RESIDUE_MASS..=MAX_RESIDUE_MASS).contains(&mass))
        .collect::<Vec<_>>();
    truncate_ties(&mut ranked, k, |&(_, count)| count as usize);
    ranked.into_iter().map(|(mass, _)| mass).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn differences_are_positive_and_counted() {
        let spectrum = Spectrum::parse("0 137 186 323").unwrap();
        let conv = convolution(&spectrum);
        // 137 and 186 each arise twice, every other difference once
        assert_eq!(conv[0], (137, 2));
        assert_eq!(conv[1], (186, 2));
        assert!(conv.iter().all(|&(mass, _)| mass > 0));
        assert_eq!(conv.len(), 4);
        assert!(conv.contains(&(49, 1)));
        assert!(conv.contains(&(323, 1)));
    }

    #[test]
    fn multiplicities_multiply() {
        // 113 appears twice, so 113 - 0 alone contributes 2, and
        // 226 - 113 contributes 2 more
        let spectrum = Spectrum::parse("0 113 113 226").unwrap();
        let conv = convolution(&spectrum);
        assert_eq!(conv[0], (113, 4));
    }

    #[test]
    fn textbook_example() {
        let spectrum = Spectrum::parse("0 97 99 113 114").unwrap();
        let conv = convolution(&spectrum);
        for expected in [1, 2, 14, 15, 16, 17, 97, 99, 113, 114] {
            assert!(conv.iter().any(|&(mass, _)| mass == expected));
        }
        assert_eq!(conv.len(), 10);
    }

    #[test]
    fn candidates_stay_in_residue_range() {
        let spectrum = Spectrum::parse("0 97 99 113 114").unwrap();
        let candidates = candidate_masses(&spectrum, 20);
        let mut sorted = candidates.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![97, 99, 113, 114]);
    }

    #[test]
    fn candidate_cut_keeps_ties() {
        // cyclic spectrum of NQEL: counts tie heavily, so the cut at
        // k = 6 keeps the whole tie block
        let spectrum = Spectrum::cyclic_of(&[114, 128, 129, 113]);
        let mut candidates = candidate_masses(&spectrum, 6);
        candidates.sort_unstable();
        assert_eq!(candidates, vec![98, 99, 113, 114, 128, 129, 143, 144]);
        // moving the cut within the block changes nothing
        let mut again = candidate_masses(&spectrum, 8);
        again.sort_unstable();
        assert_eq!(again, candidates);
    }
}
