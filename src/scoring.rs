use rayon::prelude::*;
use serde::Serialize;

use crate::mass::{Alphabet, Mass};
use crate::peptide::Peptide;
use crate::rank::truncate_ties;
use crate::spectrum::Spectrum;
use crate::Error;

/// Shared peak count between the cyclic spectrum of a residue-mass
/// sequence and a target spectrum
pub fn cyclic_score(masses: &[Mass], target: &Spectrum) -> usize {
    Spectrum::cyclic_of(masses).shared_peaks(target)
}

/// Shared peak count for a symbol peptide
pub fn score(peptide: &Peptide, alphabet: &Alphabet, target: &Spectrum) -> Result<usize, Error> {
    Ok(cyclic_score(&peptide.residue_masses(alphabet)?, target))
}

/// A peptide carrying the score it earned against some target spectrum
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoredPeptide {
    pub score: usize,
    pub peptide: Peptide,
}

/// Board entry with residue masses resolved once, so extension rounds
/// never touch the alphabet again
struct Entry {
    score: usize,
    peptide: Peptide,
    masses: Vec<Mass>,
}

/// Width-bounded, score-guided search for the peptide whose cyclic
/// spectrum best explains a (possibly noisy) target spectrum.
///
/// Every round extends each board entry by every alphabet residue,
/// discards candidates heavier than the largest target peak, and trims
/// the board back to `width` by score, keeping ties. A candidate whose
/// mass equals the largest peak exactly becomes the leader if it beats
/// the best score seen so far. The search ends when the board is empty
/// and returns the leader, which stays empty if no candidate ever
/// reached full mass with a positive score
pub struct LeaderboardSearch<'a> {
    pub alphabet: &'a Alphabet,
    /// Board width N. Ties with the N-th score survive trimming
    pub width: usize,
    /// Starting board. Empty means start from the empty peptide
    pub seeds: &'a [ScoredPeptide],
}

impl LeaderboardSearch<'_> {
    pub fn run(&self, target: &Spectrum) -> Result<Peptide, Error> {
        let full_mass = target.max_mass().unwrap_or(0);
        let mut board = self.initial_board()?;
        let mut leader = Peptide::default();
        let mut leader_score = 0;
        let mut round = 0;
        while !board.is_empty() {
            round += 1;
            let mut extensions = board
                .par_iter()
                .flat_map_iter(|entry| self.extensions(entry, target, full_mass))
                .collect::<Vec<_>>();
            for entry in &extensions {
                if entry.peptide.mass == full_mass && entry.score > leader_score {
                    leader_score = entry.score;
                    leader = entry.peptide.clone();
                }
            }
            // stable sort: tied entries keep their generation order
            extensions.sort_by(|a, b| b.score.cmp(&a.score));
            truncate_ties(&mut extensions, self.width, |entry| entry.score);
            log::trace!(
                "round {}: {} candidates on the board, leader score {}",
                round,
                extensions.len(),
                leader_score
            );
            board = extensions;
        }
        log::debug!(
            "leaderboard converged after {} rounds with leader score {}",
            round,
            leader_score
        );
        Ok(leader)
    }

    fn initial_board(&self) -> Result<Vec<Entry>, Error> {
        if self.seeds.is_empty() {
            return Ok(vec![Entry {
                score: 0,
                peptide: Peptide::default(),
                masses: Vec::new(),
            }]);
        }
        self.seeds
            .iter()
            .map(|seed| {
                let masses = seed.peptide.residue_masses(self.alphabet)?;
                let mut peptide = seed.peptide.clone();
                // the cached mass must agree with the masses being scored
                peptide.mass = masses.iter().sum();
                Ok(Entry {
                    score: seed.score,
                    peptide,
                    masses,
                })
            })
            .collect()
    }

    fn extensions(&self, entry: &Entry, target: &Spectrum, full_mass: Mass) -> Vec<Entry> {
        let mut out = Vec::new();
        for (residue, mass) in self.alphabet.residues() {
            if entry.peptide.mass + mass > full_mass {
                continue;
            }
            let mut masses = entry.masses.clone();
            masses.push(mass);
            out.push(Entry {
                score: cyclic_score(&masses, target),
                peptide: entry.peptide.extended(residue, mass),
                masses,
            });
        }
        out
    }
}
