use std::fmt::Write;

use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Integer residue or fragment mass, in daltons
pub type Mass = u32;

/// Smallest mass a single residue may have
pub const MIN_RESIDUE_MASS: Mass = 57;
/// Largest mass a single residue may have
pub const MAX_RESIDUE_MASS: Mass = 200;

// The 20 standard amino acids. Two mass collisions are real: I/L at 113
// and K/Q at 128
const STANDARD: [(u8, Mass); 20] = [
    (b'G', 57),
    (b'A', 71),
    (b'S', 87),
    (b'P', 97),
    (b'V', 99),
    (b'T', 101),
    (b'C', 103),
    (b'I', 113),
    (b'L', 113),
    (b'N', 114),
    (b'D', 115),
    (b'K', 128),
    (b'Q', 128),
    (b'E', 129),
    (b'M', 131),
    (b'H', 137),
    (b'F', 147),
    (b'R', 156),
    (b'Y', 163),
    (b'W', 186),
];

// Standard table with one amino acid per mass: I and Q are dropped in
// favor of L and K
const UNIQUE: [(u8, Mass); 18] = [
    (b'G', 57),
    (b'A', 71),
    (b'S', 87),
    (b'P', 97),
    (b'V', 99),
    (b'T', 101),
    (b'C', 103),
    (b'L', 113),
    (b'N', 114),
    (b'D', 115),
    (b'K', 128),
    (b'E', 129),
    (b'M', 131),
    (b'H', 137),
    (b'F', 147),
    (b'R', 156),
    (b'Y', 163),
    (b'W', 186),
];

// Unique-mass table extended with the two nonstandard letters U and O
const EXPANDED: [(u8, Mass); 20] = [
    (b'G', 57),
    (b'A', 71),
    (b'S', 87),
    (b'P', 97),
    (b'V', 99),
    (b'T', 101),
    (b'C', 103),
    (b'L', 113),
    (b'N', 114),
    (b'D', 115),
    (b'K', 128),
    (b'E', 129),
    (b'M', 131),
    (b'H', 137),
    (b'F', 147),
    (b'R', 156),
    (b'Y', 163),
    (b'U', 168),
    (b'W', 186),
    (b'O', 255),
];

/// One-letter code for `mass`, if the expanded table has an amino acid there
pub fn expanded_symbol(mass: Mass) -> Option<u8> {
    EXPANDED
        .iter()
        .find(|&&(_, m)| m == mass)
        .map(|&(symbol, _)| symbol)
}

/// A peptide building block: either a one-letter amino acid code resolved
/// through an [`Alphabet`], or a raw integer mass with no canonical letter
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Residue {
    Symbol(u8),
    Mass(Mass),
}

impl Residue {
    /// Resolve this residue to its mass. Symbols consult `alphabet`, raw
    /// masses stand for themselves
    pub fn resolve(self, alphabet: &Alphabet) -> Option<Mass> {
        match self {
            Residue::Symbol(_) => alphabet.mass_of(self),
            Residue::Mass(mass) => Some(mass),
        }
    }
}

impl std::fmt::Display for Residue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Residue::Symbol(c) => f.write_char(*c as char),
            Residue::Mass(mass) => write!(f, "[{}]", mass),
        }
    }
}

/// A residue -> mass table with a fixed iteration order (mass ascending,
/// then residue), so that searches extend candidates deterministically
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
    entries: Vec<(Residue, Mass)>,
    index: FnvHashMap<Residue, Mass>,
}

impl Alphabet {
    fn from_entries<I: IntoIterator<Item = (Residue, Mass)>>(iter: I) -> Self {
        let mut index = FnvHashMap::default();
        for (residue, mass) in iter {
            index.entry(residue).or_insert(mass);
        }
        let mut entries = index
            .iter()
            .map(|(&residue, &mass)| (residue, mass))
            .collect::<Vec<_>>();
        entries.sort_unstable_by_key(|&(residue, mass)| (mass, residue));
        Alphabet { entries, index }
    }

    /// All 20 standard amino acids, I/L and K/Q collisions included
    pub fn standard() -> Self {
        Self::from_entries(STANDARD.map(|(symbol, mass)| (Residue::Symbol(symbol), mass)))
    }

    /// Standard amino acids, one per mass (no I, no Q)
    pub fn unique_masses() -> Self {
        Self::from_entries(UNIQUE.map(|(symbol, mass)| (Residue::Symbol(symbol), mass)))
    }

    /// Unique-mass amino acids plus U (168 Da) and O (255 Da)
    pub fn expanded() -> Self {
        Self::from_entries(EXPANDED.map(|(symbol, mass)| (Residue::Symbol(symbol), mass)))
    }

    /// One residue for every integer mass in 57..=200 Da
    pub fn full_range() -> Self {
        Self::from_entries((MIN_RESIDUE_MASS..=MAX_RESIDUE_MASS).map(labeled))
    }

    /// Build an alphabet from inferred residue masses. Masses that carry a
    /// one-letter code in the expanded table get that code, the rest stay
    /// raw. Out-of-range masses are rejected rather than silently dropped
    pub fn from_masses<I: IntoIterator<Item = Mass>>(masses: I) -> Result<Self, Error> {
        let mut entries = Vec::new();
        for mass in masses {
            if !(MIN_RESIDUE_MASS..=MAX_RESIDUE_MASS).contains(&mass) {
                return Err(Error::MassOutOfRange(mass));
            }
            entries.push(labeled(mass));
        }
        Ok(Self::from_entries(entries))
    }

    /// A copy of this alphabet with `extra` entries folded in. Duplicate
    /// residues keep their existing mass
    pub fn merged<I: IntoIterator<Item = (Residue, Mass)>>(&self, extra: I) -> Self {
        Self::from_entries(self.entries.iter().copied().chain(extra))
    }

    pub fn mass_of(&self, residue: Residue) -> Option<Mass> {
        self.index.get(&residue).copied()
    }

    pub fn contains(&self, residue: Residue) -> bool {
        self.index.contains_key(&residue)
    }

    /// Entries in mass order
    pub fn residues(&self) -> impl Iterator<Item = (Residue, Mass)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn labeled(mass: Mass) -> (Residue, Mass) {
    match expanded_symbol(mass) {
        Some(symbol) => (Residue::Symbol(symbol), mass),
        None => (Residue::Mass(mass), mass),
    }
}
