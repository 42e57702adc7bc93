use fnv::FnvHashMap;

use crate::mass::{Alphabet, Mass};
use crate::peptide::Peptide;
use crate::Error;

/// A fragment-mass multiset. Multiplicities are significant: scoring and
/// consistency checks both count them. Stored counts are always >= 1, so
/// derived equality is multiset equality
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Spectrum {
    counts: FnvHashMap<Mass, u32>,
}

impl Spectrum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse whitespace-separated integer masses. Order is irrelevant and
    /// duplicates are significant. A malformed token is an error, never
    /// skipped
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut spectrum = Spectrum::new();
        for token in text.split_whitespace() {
            let mass = token
                .parse::<Mass>()
                .map_err(|_| Error::MassToken(token.into()))?;
            spectrum.add(mass);
        }
        Ok(spectrum)
    }

    pub fn add(&mut self, mass: Mass) {
        *self.counts.entry(mass).or_insert(0) += 1;
    }

    pub fn multiplicity(&self, mass: Mass) -> u32 {
        self.counts.get(&mass).copied().unwrap_or(0)
    }

    /// Number of peaks, counted with multiplicity
    pub fn peak_count(&self) -> usize {
        self.counts.values().map(|&count| count as usize).sum()
    }

    /// Largest observed mass. For a cyclic spectrum this is the mass of
    /// the whole peptide
    pub fn max_mass(&self) -> Option<Mass> {
        self.counts.keys().copied().max()
    }

    /// Does every peak of `other` fit within this spectrum's
    /// multiplicities?
    pub fn contains(&self, other: &Spectrum) -> bool {
        other
            .counts
            .iter()
            .all(|(&mass, &count)| self.multiplicity(mass) >= count)
    }

    /// Multiset intersection size: for each mass, the smaller of the two
    /// multiplicities. This is the shared peak count used to score
    /// candidates against noisy spectra
    pub fn shared_peaks(&self, other: &Spectrum) -> usize {
        self.counts
            .iter()
            .map(|(&mass, &count)| count.min(other.multiplicity(mass)) as usize)
            .sum()
    }

    /// Distinct masses with their multiplicities, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (Mass, u32)> + Clone + '_ {
        self.counts.iter().map(|(&mass, &count)| (mass, count))
    }

    /// Every peak expanded by multiplicity, ascending
    pub fn sorted_masses(&self) -> Vec<Mass> {
        let mut masses = Vec::with_capacity(self.peak_count());
        for (&mass, &count) in &self.counts {
            masses.extend(std::iter::repeat(mass).take(count as usize));
        }
        masses.sort_unstable();
        masses
    }

    /// Theoretical spectrum of a linear peptide: the mass of every
    /// contiguous fragment, with 0 for the empty fragment and the full
    /// peptide included. A peptide of n residues yields n(n+1)/2 + 1 peaks
    pub fn linear_of(masses: &[Mass]) -> Self {
        Self::linear_up_to(masses, masses.len())
    }

    /// Linear spectrum restricted to fragments of at most `max_len`
    /// residues
    pub fn linear_up_to(masses: &[Mass], max_len: usize) -> Self {
        let n = masses.len();
        let cumulative = cumulative_masses(masses);
        let mut spectrum = Spectrum::new();
        spectrum.add(0);
        for len in 1..=max_len.min(n) {
            for start in 0..=n - len {
                spectrum.add(cumulative[start + len] - cumulative[start]);
            }
        }
        spectrum
    }

    /// Theoretical spectrum of a cyclic peptide: every fragment of the
    /// circularized sequence, enumerated over the doubled sequence so that
    /// each length below n contributes one fragment per starting rotation.
    /// A peptide of n residues yields n(n-1) + 2 peaks
    pub fn cyclic_of(masses: &[Mass]) -> Self {
        let n = masses.len();
        let mut doubled = masses.to_vec();
        if n > 1 {
            doubled.extend_from_slice(&masses[..n - 1]);
        }
        let cumulative = cumulative_masses(&doubled);
        let mut spectrum = Spectrum::new();
        spectrum.add(0);
        // total mass; a second 0 for the empty peptide
        spectrum.add(cumulative[n]);
        for len in 1..n {
            for start in 0..n {
                spectrum.add(cumulative[start + len] - cumulative[start]);
            }
        }
        spectrum
    }

    /// Linear spectrum of a symbol peptide
    pub fn linear(peptide: &Peptide, alphabet: &Alphabet) -> Result<Self, Error> {
        Ok(Self::linear_of(&peptide.residue_masses(alphabet)?))
    }

    /// Cyclic spectrum of a symbol peptide
    pub fn cyclic(peptide: &Peptide, alphabet: &Alphabet) -> Result<Self, Error> {
        Ok(Self::cyclic_of(&peptide.residue_masses(alphabet)?))
    }
}

impl FromIterator<Mass> for Spectrum {
    fn from_iter<I: IntoIterator<Item = Mass>>(iter: I) -> Self {
        let mut spectrum = Spectrum::new();
        for mass in iter {
            spectrum.add(mass);
        }
        spectrum
    }
}

fn cumulative_masses(masses: &[Mass]) -> Vec<Mass> {
    let mut cumulative = Vec::with_capacity(masses.len() + 1);
    cumulative.push(0);
    let mut sum = 0;
    for &mass in masses {
        sum += mass;
        cumulative.push(sum);
    }
    cumulative
}

#[cfg(test)]
mod test {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn residue_masses(seed: &[u8]) -> Vec<Mass> {
        seed.iter().map(|&b| 57 + (b % 144) as Mass).collect()
    }

    #[test]
    fn parse_roundtrip() {
        let spectrum = Spectrum::parse("0 113 114 128 129 242 242 257 370 371 484").unwrap();
        assert_eq!(spectrum.peak_count(), 11);
        assert_eq!(spectrum.multiplicity(242), 2);
        assert_eq!(spectrum.max_mass(), Some(484));
        assert_eq!(
            spectrum.sorted_masses(),
            vec![0, 113, 114, 128, 129, 242, 242, 257, 370, 371, 484]
        );
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        assert_eq!(
            Spectrum::parse("0 113 x 128"),
            Err(Error::MassToken("x".into()))
        );
        assert_eq!(
            Spectrum::parse("0 -4"),
            Err(Error::MassToken("-4".into()))
        );
        assert_eq!(Spectrum::parse(""), Ok(Spectrum::new()));
    }

    #[test]
    fn linear_spectrum_of_nqel() {
        let alphabet = Alphabet::standard();
        let peptide = Peptide::parse("NQEL", &alphabet).unwrap();
        let spectrum = Spectrum::linear(&peptide, &alphabet).unwrap();
        assert_eq!(
            spectrum.sorted_masses(),
            vec![0, 113, 114, 128, 129, 242, 242, 257, 370, 371, 484]
        );
    }

    #[test]
    fn cyclic_spectrum_of_nqel() {
        let alphabet = Alphabet::standard();
        let peptide = Peptide::parse("NQEL", &alphabet).unwrap();
        let spectrum = Spectrum::cyclic(&peptide, &alphabet).unwrap();
        assert_eq!(
            spectrum.sorted_masses(),
            vec![0, 113, 114, 128, 129, 227, 242, 242, 257, 355, 356, 370, 371, 484]
        );
    }

    #[test]
    fn degenerate_peptides() {
        // the empty peptide contributes 0 twice: empty fragment and total
        assert_eq!(Spectrum::cyclic_of(&[]).sorted_masses(), vec![0, 0]);
        assert_eq!(Spectrum::cyclic_of(&[113]).sorted_masses(), vec![0, 113]);
        assert_eq!(Spectrum::linear_of(&[]).sorted_masses(), vec![0]);
        assert_eq!(Spectrum::linear_of(&[113]).sorted_masses(), vec![0, 113]);
    }

    #[test]
    fn truncated_linear_spectrum() {
        let masses = [114, 128, 129, 113];
        let spectrum = Spectrum::linear_up_to(&masses, 2);
        // 0, the four residues, and the three adjacent pairs
        assert_eq!(
            spectrum.sorted_masses(),
            vec![0, 113, 114, 128, 129, 242, 242, 257]
        );
        // a limit beyond the peptide length changes nothing
        assert_eq!(
            Spectrum::linear_up_to(&masses, 10),
            Spectrum::linear_of(&masses)
        );
    }

    #[test]
    fn containment_counts_multiplicity() {
        let target = Spectrum::parse("0 113 113 226").unwrap();
        let once = Spectrum::parse("0 113").unwrap();
        let twice = Spectrum::parse("0 113 113").unwrap();
        let thrice = Spectrum::parse("0 113 113 113").unwrap();
        assert!(target.contains(&once));
        assert!(target.contains(&twice));
        assert!(!target.contains(&thrice));
        assert!(!once.contains(&target));
    }

    #[test]
    fn shared_peaks_is_multiset_intersection() {
        let a = Spectrum::parse("0 99 113 113 226").unwrap();
        let b = Spectrum::parse("0 113 113 113 227").unwrap();
        // 0 once, 113 twice
        assert_eq!(a.shared_peaks(&b), 3);
        assert_eq!(b.shared_peaks(&a), 3);
        assert_eq!(a.shared_peaks(&Spectrum::new()), 0);
    }

    #[quickcheck]
    fn cardinality(seed: Vec<u8>) {
        let mut masses = residue_masses(&seed);
        masses.truncate(24);
        let n = masses.len();
        assert_eq!(
            Spectrum::linear_of(&masses).peak_count(),
            n * (n + 1) / 2 + 1
        );
        let cyclic = Spectrum::cyclic_of(&masses);
        assert!(cyclic.multiplicity(0) >= 1);
        assert!(cyclic.multiplicity(masses.iter().sum()) >= 1);
        if n > 0 {
            assert_eq!(cyclic.peak_count(), n * (n - 1) + 2);
        }
    }

    #[quickcheck]
    fn linear_fits_within_cyclic(seed: Vec<u8>) {
        let mut masses = residue_masses(&seed);
        masses.truncate(24);
        let linear = Spectrum::linear_of(&masses);
        let cyclic = Spectrum::cyclic_of(&masses);
        assert!(cyclic.contains(&linear));
    }
}
