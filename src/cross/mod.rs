mod combiner;
mod dihybrid;
mod frequency;
mod genotype;
mod monohybrid;
mod validate;

pub use combiner::{canonicalize, combine_locus, LocusCombinations};
pub use dihybrid::{dihybrid_cross, DihybridCombinations, DihybridResult};
pub use frequency::{tally, GenotypeFrequency};
pub use genotype::{Combination, CrossType, Genotype};
pub use monohybrid::{monohybrid_cross, MonohybridResult, Zygosity};
pub use validate::{validate, validate_pair, validate_parents, ValidationError};
