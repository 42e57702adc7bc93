use std::collections::VecDeque;

use rayon::prelude::*;

use crate::mass::{Alphabet, Mass};
use crate::peptide::Peptide;
use crate::spectrum::Spectrum;

/// Exhaustive search for every peptide whose cyclic spectrum equals the
/// target exactly.
///
/// Candidates grow breadth-first, one residue per round. An extension
/// whose cyclic spectrum matches the target is emitted and never grown
/// further; an extension whose linear spectrum fits within the target as
/// a sub-multiset stays on the frontier; everything else is pruned. A
/// surviving candidate's total mass is a target peak, so candidate length
/// is bounded and the frontier always empties.
///
/// Rounds are advanced lazily as the iterator is drained
pub struct ExactSearch<'a> {
    target: &'a Spectrum,
    alphabet: &'a Alphabet,
    depth_limit: Option<usize>,
    frontier: Vec<Node>,
    matches: VecDeque<Peptide>,
    depth: usize,
}

struct Node {
    peptide: Peptide,
    masses: Vec<Mass>,
}

enum Extension {
    Match(Peptide),
    Consistent(Node),
}

impl<'a> ExactSearch<'a> {
    pub fn new(target: &'a Spectrum, alphabet: &'a Alphabet) -> Self {
        ExactSearch {
            target,
            alphabet,
            depth_limit: None,
            frontier: vec![Node {
                peptide: Peptide::default(),
                masses: Vec::new(),
            }],
            matches: VecDeque::new(),
            depth: 0,
        }
    }

    /// Stop growing candidates past `limit` residues. Unset, the search
    /// runs until the frontier prunes itself empty
    pub fn depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    fn advance_round(&mut self) {
        if let Some(limit) = self.depth_limit {
            if self.depth >= limit {
                self.frontier.clear();
                return;
            }
        }
        self.depth += 1;
        let round = self
            .frontier
            .par_iter()
            .flat_map_iter(|node| self.extend(node))
            .collect::<Vec<_>>();
        let mut frontier = Vec::new();
        for extension in round {
            match extension {
                Extension::Match(peptide) => self.matches.push_back(peptide),
                Extension::Consistent(node) => frontier.push(node),
            }
        }
        log::trace!(
            "round {}: frontier {}, {} match(es) pending",
            self.depth,
            frontier.len(),
            self.matches.len()
        );
        self.frontier = frontier;
    }

    fn extend(&self, node: &Node) -> Vec<Extension> {
        let mut out = Vec::new();
        for (residue, mass) in self.alphabet.residues() {
            let mut masses = node.masses.clone();
            masses.push(mass);
            if Spectrum::cyclic_of(&masses) == *self.target {
                out.push(Extension::Match(node.peptide.extended(residue, mass)));
            } else if self.target.contains(&Spectrum::linear_of(&masses)) {
                out.push(Extension::Consistent(Node {
                    peptide: node.peptide.extended(residue, mass),
                    masses,
                }));
            }
        }
        out
    }
}

impl Iterator for ExactSearch<'_> {
    type Item = Peptide;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(peptide) = self.matches.pop_front() {
                return Some(peptide);
            }
            if self.frontier.is_empty() {
                return None;
            }
            self.advance_round();
        }
    }
}
