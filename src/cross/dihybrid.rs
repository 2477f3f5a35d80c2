use super::{
    combiner::combine_locus,
    frequency::{tally, GenotypeFrequency},
    Combination, CrossType, Genotype,
};
use arrayvec::ArrayVec;
use itertools::Itertools;

/// The sixteen offspring combinations of a dihybrid cross.
pub type DihybridCombinations = ArrayVec<Combination, 16>;

/// Expands each locus independently and pairs the results.
///
/// Locus A combinations form the outer loop and locus B the inner one, so
/// the first four entries share the first locus A combination.
pub fn dihybrid_cross(parent1: &Genotype, parent2: &Genotype) -> DihybridCombinations {
    debug_assert_eq!(parent1.cross_type(), CrossType::Dihybrid);
    debug_assert_eq!(parent2.cross_type(), CrossType::Dihybrid);

    let set_a = combine_locus(parent1.locus(0), parent2.locus(0));
    let set_b = combine_locus(parent1.locus(1), parent2.locus(1));

    set_a
        .iter()
        .cartesian_product(set_b.iter())
        .map(|(a, b)| {
            let mut combo = *a;
            combo.push_str(b);
            combo
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DihybridResult {
    pub combinations: DihybridCombinations,
    pub frequencies: Vec<GenotypeFrequency>,
}

impl DihybridResult {
    pub fn new(parent1: &Genotype, parent2: &Genotype) -> DihybridResult {
        let combinations = dihybrid_cross(parent1, parent2);
        let frequencies = tally(&combinations);
        DihybridResult {
            combinations,
            frequencies,
        }
    }

    pub fn distinct(&self) -> impl Iterator<Item = &Combination> {
        self.frequencies.iter().map(|f| &f.genotype)
    }

    pub fn frequency_of(&self, genotype: &str) -> Option<&GenotypeFrequency> {
        self.frequencies
            .iter()
            .find(|f| f.genotype.as_str() == genotype)
    }
}
