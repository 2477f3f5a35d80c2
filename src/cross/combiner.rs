use super::Combination;
use arrayvec::ArrayVec;
use itertools::Itertools;

/// The four offspring combinations at one locus.
pub type LocusCombinations = ArrayVec<Combination, 4>;

/// Orders two alleles by byte value, which puts the uppercase (dominant)
/// allele before the lowercase one.
pub fn canonicalize(first: u8, second: u8) -> Combination {
    let mut combo = Combination::new();
    combo.push(char::from(first.min(second)));
    combo.push(char::from(first.max(second)));
    combo
}

/// Crosses the two alleles of `parent1_locus` against the two alleles of
/// `parent2_locus`.
///
/// Parent 1 is the outer loop, so the result is ordered
/// `(p1[0], p2[0]), (p1[0], p2[1]), (p1[1], p2[0]), (p1[1], p2[1])`.
/// Inputs are not checked; only the first two bytes of each are used.
pub fn combine_locus(parent1_locus: &str, parent2_locus: &str) -> LocusCombinations {
    parent1_locus
        .bytes()
        .take(2)
        .cartesian_product(parent2_locus.bytes().take(2))
        .map(|(first, second)| canonicalize(first, second))
        .collect()
}
