use super::{
    combiner::{combine_locus, LocusCombinations},
    frequency::{count_matching, GenotypeFrequency},
    Combination, CrossType, Genotype,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zygosity {
    HomozygousDominant,
    HomozygousRecessive,
    Heterozygous,
}

impl fmt::Display for Zygosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zygosity::HomozygousDominant => write!(f, "homozygous dominant"),
            Zygosity::HomozygousRecessive => write!(f, "homozygous recessive"),
            Zygosity::Heterozygous => write!(f, "heterozygous"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonohybridResult {
    pub homozygous_dominant: GenotypeFrequency,
    pub homozygous_recessive: GenotypeFrequency,
    pub heterozygous: GenotypeFrequency,
    pub combinations: LocusCombinations,
}

impl MonohybridResult {
    /// `(homozygous dominant, homozygous recessive, heterozygous)` counts.
    pub fn tallies(&self) -> (usize, usize, usize) {
        (
            self.homozygous_dominant.count,
            self.homozygous_recessive.count,
            self.heterozygous.count,
        )
    }

    pub fn classes(&self) -> [(Zygosity, &GenotypeFrequency); 3] {
        [
            (Zygosity::HomozygousDominant, &self.homozygous_dominant),
            (Zygosity::HomozygousRecessive, &self.homozygous_recessive),
            (Zygosity::Heterozygous, &self.heterozygous),
        ]
    }
}

pub fn monohybrid_cross(parent1: &Genotype, parent2: &Genotype) -> MonohybridResult {
    debug_assert_eq!(parent1.cross_type(), CrossType::Monohybrid);
    debug_assert_eq!(parent2.cross_type(), CrossType::Monohybrid);

    let combinations = combine_locus(parent1.as_str(), parent2.as_str());
    let total = combinations.len();

    let p1 = parent1.as_str().as_bytes();
    let p2 = parent2.as_str().as_bytes();
    let dominant = pattern(p1[0].to_ascii_uppercase(), p1[1].to_ascii_uppercase());
    let recessive = pattern(p1[0].to_ascii_lowercase(), p1[1].to_ascii_lowercase());
    let heterozygous = pattern(p1[0].to_ascii_uppercase(), p2[0].to_ascii_lowercase());

    let frequency = |genotype: Combination| {
        let count = count_matching(&combinations, &genotype);
        GenotypeFrequency::new(genotype, count, total)
    };

    MonohybridResult {
        homozygous_dominant: frequency(dominant),
        homozygous_recessive: frequency(recessive),
        heterozygous: frequency(heterozygous),
        combinations,
    }
}

fn pattern(first: u8, second: u8) -> Combination {
    let mut combo = Combination::new();
    combo.push(char::from(first));
    combo.push(char::from(second));
    combo
}
