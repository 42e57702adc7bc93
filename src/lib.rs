pub mod convolution;
pub mod exact;
pub mod mass;
pub mod peptide;
pub mod pipeline;
pub mod rank;
pub mod scoring;
pub mod spectrum;
pub mod tyrocidine;

use crate::mass::{Mass, Residue, MAX_RESIDUE_MASS, MIN_RESIDUE_MASS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A spectrum token that does not parse as a non-negative integer
    MassToken(String),
    /// A residue mass outside the range an inferred alphabet may contain
    MassOutOfRange(Mass),
    /// A residue that the alphabet in use cannot resolve to a mass
    UnknownResidue(Residue),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MassToken(token) => write!(f, "invalid mass token {:?}", token),
            Error::MassOutOfRange(mass) => write!(
                f,
                "residue mass {} outside of {}..={} Da",
                mass, MIN_RESIDUE_MASS, MAX_RESIDUE_MASS
            ),
            Error::UnknownResidue(residue) => write!(f, "residue {} not in alphabet", residue),
        }
    }
}

impl std::error::Error for Error {}
