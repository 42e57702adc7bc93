use serde::Serialize;

use crate::mass::{Alphabet, Mass, Residue};
use crate::Error;

/// An ordered residue sequence with its total mass kept current as
/// residues are appended. The sequence is stored linearly; scoring is
/// what closes it into a circle
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Peptide {
    pub residues: Vec<Residue>,
    /// Sum of all residue masses
    pub mass: Mass,
}

impl Peptide {
    /// Parse a one-letter-code sequence, validating every symbol against
    /// `alphabet`
    pub fn parse(sequence: &str, alphabet: &Alphabet) -> Result<Self, Error> {
        let mut peptide = Peptide::default();
        for symbol in sequence.bytes() {
            let residue = Residue::Symbol(symbol);
            let mass = residue
                .resolve(alphabet)
                .ok_or(Error::UnknownResidue(residue))?;
            peptide.push(residue, mass);
        }
        Ok(peptide)
    }

    /// Build a peptide directly from residue masses, no alphabet involved
    pub fn from_masses(masses: &[Mass]) -> Self {
        let mut peptide = Peptide::default();
        for &mass in masses {
            peptide.push(Residue::Mass(mass), mass);
        }
        peptide
    }

    /// Append a residue whose mass has already been resolved
    pub fn push(&mut self, residue: Residue, mass: Mass) {
        self.residues.push(residue);
        self.mass += mass;
    }

    /// Copy of `self` with one residue appended
    pub fn extended(&self, residue: Residue, mass: Mass) -> Self {
        let mut next = self.clone();
        next.push(residue, mass);
        next
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Per-residue masses, resolved through `alphabet`
    pub fn residue_masses(&self, alphabet: &Alphabet) -> Result<Vec<Mass>, Error> {
        self.residues
            .iter()
            .map(|&residue| {
                residue
                    .resolve(alphabet)
                    .ok_or(Error::UnknownResidue(residue))
            })
            .collect()
    }

    /// Space-separated residue masses, e.g. `"114 128 129 113"`
    pub fn mass_string(&self, alphabet: &Alphabet) -> Result<String, Error> {
        let masses = self.residue_masses(alphabet)?;
        Ok(masses
            .iter()
            .map(|mass| mass.to_string())
            .collect::<Vec<_>>()
            .join(" "))
    }
}

impl std::fmt::Display for Peptide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for residue in &self.residues {
            write!(f, "{}", residue)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_tracks_mass() {
        let alphabet = Alphabet::standard();
        let peptide = Peptide::parse("NQEL", &alphabet).unwrap();
        assert_eq!(peptide.len(), 4);
        assert_eq!(peptide.mass, 484);
        assert_eq!(peptide.to_string(), "NQEL");
        assert_eq!(
            peptide.residue_masses(&alphabet).unwrap(),
            vec![114, 128, 129, 113]
        );
        assert_eq!(peptide.mass_string(&alphabet).unwrap(), "114 128 129 113");
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        let alphabet = Alphabet::unique_masses();
        assert_eq!(
            Peptide::parse("NXEL", &alphabet),
            Err(Error::UnknownResidue(Residue::Symbol(b'X')))
        );
        // I is only in the standard table
        assert_eq!(
            Peptide::parse("IL", &alphabet),
            Err(Error::UnknownResidue(Residue::Symbol(b'I')))
        );
    }

    #[test]
    fn raw_masses_need_no_alphabet() {
        let peptide = Peptide::from_masses(&[113, 147, 71]);
        assert_eq!(peptide.mass, 331);
        assert_eq!(peptide.to_string(), "[113][147][71]");
        let empty = Alphabet::default();
        assert_eq!(
            peptide.residue_masses(&empty).unwrap(),
            vec![113, 147, 71]
        );
    }

    #[test]
    fn extended_leaves_original_alone() {
        let alphabet = Alphabet::standard();
        let peptide = Peptide::parse("VKL", &alphabet).unwrap();
        let longer = peptide.extended(Residue::Symbol(b'F'), 147);
        assert_eq!(peptide.mass, 340);
        assert_eq!(longer.mass, 487);
        assert_eq!(longer.to_string(), "VKLF");
    }

    #[test]
    fn mixed_residue_display() {
        let alphabet = Alphabet::standard();
        let mut peptide = Peptide::parse("NQ", &alphabet).unwrap();
        peptide.push(Residue::Mass(144), 144);
        assert_eq!(peptide.to_string(), "NQ[144]");
        assert_eq!(peptide.mass, 386);
        // raw residues resolve to themselves even here
        assert_eq!(
            peptide.residue_masses(&alphabet).unwrap(),
            vec![114, 128, 144]
        );
    }
}
