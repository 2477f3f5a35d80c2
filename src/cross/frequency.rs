use super::Combination;
use itertools::Itertools;

/// How often one genotype occurs among `total` equally likely offspring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenotypeFrequency {
    pub genotype: Combination,
    pub count: usize,
    pub total: usize,
}

impl GenotypeFrequency {
    pub fn new(genotype: Combination, count: usize, total: usize) -> GenotypeFrequency {
        GenotypeFrequency {
            genotype,
            count,
            total,
        }
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count as f64 / self.total as f64 * 100.0
    }

    /// Ratio in `count:total` form, e.g. `"4:16"`.
    pub fn ratio(&self) -> String {
        format!("{}:{}", self.count, self.total)
    }
}

/// Groups combinations into distinct genotypes, sorted by byte order so that
/// dominant alleles come first (`AABB` before `AaBb` before `aabb`).
pub fn tally(combinations: &[Combination]) -> Vec<GenotypeFrequency> {
    let total = combinations.len();
    combinations
        .iter()
        .sorted()
        .dedup_with_count()
        .map(|(count, genotype)| GenotypeFrequency::new(*genotype, count, total))
        .collect()
}

/// Number of combinations equal to `pattern`.
pub fn count_matching(combinations: &[Combination], pattern: &str) -> usize {
    combinations
        .iter()
        .filter(|combo| combo.as_str() == pattern)
        .count()
}
