use crate::convolution::candidate_masses;
use crate::mass::{Alphabet, Mass, Residue};
use crate::peptide::Peptide;
use crate::scoring::{cyclic_score, LeaderboardSearch, ScoredPeptide};
use crate::spectrum::Spectrum;
use crate::Error;

/// A peptide known to resemble the one being sequenced. Its residues are
/// folded into the inferred alphabet, and every `window`-residue run of
/// its circularized sequence becomes a pre-scored seed for the board
#[derive(Clone, Copy)]
pub struct Reference<'a> {
    pub peptide: &'a Peptide,
    /// Resolves the reference residues. The inferred alphabet alone may
    /// not contain them all
    pub alphabet: &'a Alphabet,
    /// Length of the seeded windows
    pub window: usize,
}

impl Reference<'_> {
    fn entries(&self) -> Result<Vec<(Residue, Mass)>, Error> {
        self.peptide
            .residues
            .iter()
            .map(|&residue| {
                residue
                    .resolve(self.alphabet)
                    .map(|mass| (residue, mass))
                    .ok_or(Error::UnknownResidue(residue))
            })
            .collect()
    }

    fn seeds(&self, target: &Spectrum) -> Result<Vec<ScoredPeptide>, Error> {
        let entries = self.entries()?;
        if self.window == 0 || entries.is_empty() {
            return Ok(Vec::new());
        }
        // one window per rotation of the circle, via the doubled sequence
        let window = self.window.min(entries.len());
        let mut doubled = entries.clone();
        doubled.extend_from_slice(&entries[..entries.len() - 1]);
        let mut seeds = Vec::new();
        for run in doubled.windows(window).take(entries.len()) {
            let mut peptide = Peptide::default();
            let mut masses = Vec::with_capacity(window);
            for &(residue, mass) in run {
                peptide.push(residue, mass);
                masses.push(mass);
            }
            seeds.push(ScoredPeptide {
                score: cyclic_score(&masses, target),
                peptide,
            });
        }
        Ok(seeds)
    }
}

/// Sequencing with no alphabet given up front: infer candidate residue
/// masses from the spectrum's own convolution, then run the leaderboard
/// search over them
pub struct ConvolutionSearch<'a> {
    /// Leaderboard width
    pub width: usize,
    /// How many convolution masses to keep, ties included
    pub top_masses: usize,
    /// Optional known peptide for alphabet enrichment and board seeding
    pub reference: Option<Reference<'a>>,
}

impl ConvolutionSearch<'_> {
    pub fn run(&self, observed: &[Mass]) -> Result<Peptide, Error> {
        let target = observed.iter().copied().collect::<Spectrum>();
        let mut alphabet = Alphabet::from_masses(candidate_masses(&target, self.top_masses))?;
        log::debug!(
            "inferred {} residue masses from the convolution",
            alphabet.len()
        );
        let seeds = match &self.reference {
            Some(reference) => {
                alphabet = alphabet.merged(reference.entries()?);
                reference.seeds(&target)?
            }
            None => Vec::new(),
        };
        LeaderboardSearch {
            alphabet: &alphabet,
            width: self.width,
            seeds: &seeds,
        }
        .run(&target)
    }
}
