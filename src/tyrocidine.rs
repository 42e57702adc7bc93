//! Mass spectra of tyrocidine B1, a cyclic decapeptide produced by
//! Bacillus brevis. The ideal spectrum is exact; the other two carry
//! simulated experimental noise in the form of false and missing peaks

use crate::mass::Mass;

/// Tyrocidine B1, written linearly starting from the valine
pub const TYROCIDINE_B1: &str = "VKLFPWFNQY";

/// The noise-free spectrum: exactly the cyclic spectrum of
/// [`TYROCIDINE_B1`]
pub const SPECTRUM: [Mass; 92] = [
    0, 97, 99, 113, 114, 128, 128, 147, 147, 163, 186, 227, 241, 242, 244, 260, 261, 262, 283,
    291, 333, 340, 357, 388, 389, 390, 390, 405, 430, 430, 447, 485, 487, 503, 504, 518, 543, 544,
    552, 575, 577, 584, 631, 632, 650, 651, 671, 672, 690, 691, 738, 745, 747, 770, 778, 779, 804,
    818, 819, 835, 837, 875, 892, 892, 917, 932, 932, 933, 934, 965, 982, 989, 1031, 1039, 1060,
    1061, 1062, 1078, 1080, 1081, 1095, 1136, 1159, 1175, 1175, 1194, 1194, 1208, 1209, 1223,
    1225, 1322,
];

/// Spectrum with roughly 10% of the peaks wrong
pub const SPECTRUM_10: [Mass; 89] = [
    0, 97, 99, 114, 128, 147, 147, 163, 186, 227, 241, 242, 244, 260, 261, 262, 283, 291, 333,
    340, 357, 385, 389, 390, 390, 405, 430, 430, 447, 485, 487, 503, 504, 518, 543, 544, 552, 575,
    577, 584, 632, 650, 651, 671, 672, 690, 691, 738, 745, 747, 770, 778, 779, 804, 818, 819, 820,
    835, 837, 875, 892, 917, 932, 932, 933, 934, 965, 982, 989, 1030, 1039, 1060, 1061, 1062,
    1078, 1080, 1081, 1095, 1136, 1159, 1175, 1175, 1194, 1194, 1208, 1209, 1223, 1225, 1322,
];

/// Spectrum with roughly 25% of the peaks wrong
pub const SPECTRUM_25: [Mass; 95] = [
    0, 97, 99, 113, 114, 115, 128, 128, 147, 147, 163, 186, 227, 241, 242, 244, 244, 256, 260,
    261, 262, 283, 291, 309, 330, 333, 340, 347, 385, 388, 389, 390, 390, 405, 435, 447, 485, 487,
    503, 504, 518, 544, 552, 575, 577, 584, 599, 608, 631, 632, 650, 651, 653, 672, 690, 691, 717,
    738, 745, 770, 779, 804, 818, 819, 827, 835, 837, 875, 892, 892, 917, 932, 932, 933, 934, 965,
    982, 989, 1039, 1060, 1062, 1078, 1080, 1081, 1095, 1136, 1159, 1175, 1175, 1194, 1194, 1208,
    1209, 1223, 1322,
];
