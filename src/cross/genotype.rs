use arrayvec::ArrayString;
use std::{fmt, str::FromStr};

/// One offspring genotype, 2 letters for a monohybrid cross and 4 for a dihybrid one.
pub type Combination = ArrayString<4>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossType {
    Monohybrid,
    Dihybrid,
}

impl CrossType {
    pub fn num_loci(self) -> usize {
        match self {
            CrossType::Monohybrid => 1,
            CrossType::Dihybrid => 2,
        }
    }

    pub fn genotype_len(self) -> usize {
        2 * self.num_loci()
    }

    /// Number of equally likely offspring combinations, 4 per locus.
    pub fn num_combinations(self) -> usize {
        4usize.pow(self.num_loci() as u32)
    }
}

impl FromStr for CrossType {
    type Err = &'static str;
    fn from_str(cross_type: &str) -> Result<Self, Self::Err> {
        match cross_type.to_ascii_lowercase().as_str() {
            "mono" | "monohybrid" => Ok(CrossType::Monohybrid),
            "di" | "dihybrid" => Ok(CrossType::Dihybrid),
            _ => Err("Invalid cross type. Options are: monohybrid, dihybrid"),
        }
    }
}

impl fmt::Display for CrossType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrossType::Monohybrid => write!(f, "monohybrid"),
            CrossType::Dihybrid => write!(f, "dihybrid"),
        }
    }
}

/// A parent genotype that passed validation for its cross type.
///
/// Only `validate` can build one, so every `Genotype` holds ASCII letters,
/// has the length its cross type requires, and lists the dominant allele
/// first at each locus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genotype {
    alleles: Combination,
    cross_type: CrossType,
}

impl Genotype {
    pub(super) fn from_validated(alleles: Combination, cross_type: CrossType) -> Self {
        Self {
            alleles,
            cross_type,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.alleles
    }

    pub fn cross_type(&self) -> CrossType {
        self.cross_type
    }

    /// The two alleles of locus `index`, e.g. `"Bb"` for locus 1 of `"AaBb"`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `self.cross_type().num_loci()`.
    pub fn locus(&self, index: usize) -> &str {
        &self.alleles[2 * index..2 * index + 2]
    }

    pub fn loci(&self) -> impl Iterator<Item = &str> {
        (0..self.cross_type.num_loci()).map(move |index| self.locus(index))
    }

    /// Gene letter of locus `index` in its dominant (uppercase) form.
    ///
    /// Panics under the same condition as [`Genotype::locus`].
    pub fn gene(&self, index: usize) -> char {
        char::from(self.alleles.as_bytes()[2 * index].to_ascii_uppercase())
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.alleles)
    }
}
