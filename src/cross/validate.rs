use super::{Combination, CrossType, Genotype};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No parent can exceed two characters, got {length}")]
    TooLong { length: usize },

    #[error("A monohybrid parent needs exactly two alleles, got {length}")]
    TooShort { length: usize },

    #[error("All parents must be 4 characters, got {length}")]
    WrongLength { length: usize },

    /// `locus` is 1-based.
    #[error("You must enter the alleles properly at locus {locus} of '{genotype}' (dominant allele first, one gene per locus)")]
    MalformedAlleles { genotype: String, locus: usize },

    #[error("Parents carry different genes at locus {locus}: '{first}' and '{second}'")]
    MismatchedGenes {
        locus: usize,
        first: char,
        second: char,
    },

    #[error("Cannot cross a {first} parent with a {second} parent")]
    MixedCrossTypes { first: CrossType, second: CrossType },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LengthPolicy {
    /// Longer input is `TooLong`, shorter is `TooShort`.
    Bounded,
    /// Any other length is `WrongLength`.
    Exact,
}

#[derive(Debug, Clone, Copy)]
struct LocusRule {
    dominant_first: bool,
    same_gene: bool,
}

impl LocusRule {
    const STRICT: LocusRule = LocusRule {
        dominant_first: true,
        same_gene: true,
    };
}

#[derive(Debug)]
struct GenotypeRules {
    length: usize,
    length_policy: LengthPolicy,
    loci: &'static [LocusRule],
}

const MONOHYBRID_RULES: GenotypeRules = GenotypeRules {
    length: 2,
    length_policy: LengthPolicy::Bounded,
    loci: &[LocusRule::STRICT],
};

const DIHYBRID_RULES: GenotypeRules = GenotypeRules {
    length: 4,
    length_policy: LengthPolicy::Exact,
    loci: &[LocusRule::STRICT, LocusRule::STRICT],
};

impl GenotypeRules {
    fn for_cross(cross_type: CrossType) -> &'static GenotypeRules {
        match cross_type {
            CrossType::Monohybrid => &MONOHYBRID_RULES,
            CrossType::Dihybrid => &DIHYBRID_RULES,
        }
    }

    fn check_length(&self, length: usize) -> Result<(), ValidationError> {
        match (self.length_policy, length.cmp(&self.length)) {
            (_, Ordering::Equal) => Ok(()),
            (LengthPolicy::Bounded, Ordering::Greater) => Err(ValidationError::TooLong { length }),
            (LengthPolicy::Bounded, Ordering::Less) => Err(ValidationError::TooShort { length }),
            (LengthPolicy::Exact, _) => Err(ValidationError::WrongLength { length }),
        }
    }
}

/// Checks a raw parent genotype against the rules of `cross_type`.
///
/// The length rule is applied first, then every character must be an ASCII
/// letter, then each locus must list its dominant allele first and carry a
/// single gene letter.
pub fn validate(raw: &str, cross_type: CrossType) -> Result<Genotype, ValidationError> {
    let rules = GenotypeRules::for_cross(cross_type);
    rules.check_length(raw.chars().count())?;

    let malformed = |locus: usize| ValidationError::MalformedAlleles {
        genotype: raw.to_string(),
        locus,
    };

    if let Some(index) = raw.chars().position(|c| !c.is_ascii_alphabetic()) {
        return Err(malformed(index / 2 + 1));
    }

    for (index, (alleles, rule)) in raw.as_bytes().chunks_exact(2).zip(rules.loci).enumerate() {
        let (first, second) = (alleles[0], alleles[1]);
        if rule.dominant_first && first.is_ascii_lowercase() && second.is_ascii_uppercase() {
            return Err(malformed(index + 1));
        }
        if rule.same_gene && !first.eq_ignore_ascii_case(&second) {
            return Err(malformed(index + 1));
        }
    }

    let alleles = Combination::from(raw).map_err(|_| malformed(1))?;
    Ok(Genotype::from_validated(alleles, cross_type))
}

/// Checks that two validated parents can be crossed: same cross type and the
/// same gene letter at every locus.
pub fn validate_pair(parent1: &Genotype, parent2: &Genotype) -> Result<(), ValidationError> {
    if parent1.cross_type() != parent2.cross_type() {
        return Err(ValidationError::MixedCrossTypes {
            first: parent1.cross_type(),
            second: parent2.cross_type(),
        });
    }

    for locus in 0..parent1.cross_type().num_loci() {
        let (first, second) = (parent1.gene(locus), parent2.gene(locus));
        if first != second {
            return Err(ValidationError::MismatchedGenes {
                locus: locus + 1,
                first,
                second,
            });
        }
    }
    Ok(())
}

/// Validates both raw parents and checks they can be crossed.
pub fn validate_parents(
    raw1: &str,
    raw2: &str,
    cross_type: CrossType,
) -> Result<(Genotype, Genotype), ValidationError> {
    let parent1 = validate(raw1, cross_type)?;
    let parent2 = validate(raw2, cross_type)?;
    validate_pair(&parent1, &parent2)?;
    Ok((parent1, parent2))
}
