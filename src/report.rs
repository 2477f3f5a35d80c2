use crate::cross::{Combination, DihybridResult, MonohybridResult};
use itertools::Itertools;
use std::io::{self, Write};

/// Formats a percentage with at most two decimals, dropping trailing zeros.
pub fn format_percentage(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

pub fn write_monohybrid_report<W: Write>(writer: &mut W, result: &MonohybridResult) -> io::Result<()> {
    for (zygosity, frequency) in result.classes() {
        writeln!(
            writer,
            "There is a {}% chance of {} ({} = {})",
            format_percentage(frequency.percentage()),
            zygosity,
            frequency.ratio(),
            frequency.genotype
        )?;
    }
    Ok(())
}

pub fn write_dihybrid_report<W: Write>(writer: &mut W, result: &DihybridResult) -> io::Result<()> {
    writeln!(writer, "ALL GENOTYPES:")?;
    writeln!(writer, "{}", join(result.combinations.iter()))?;
    writeln!(writer)?;
    writeln!(writer, "UNIQUE GENOTYPES:")?;
    writeln!(writer, "{}", join(result.distinct()))?;
    writeln!(writer)?;
    writeln!(writer, "GENOTYPIC RATIOS:")?;
    for frequency in &result.frequencies {
        writeln!(
            writer,
            "{} - {}% ({})",
            frequency.genotype,
            format_percentage(frequency.percentage()),
            frequency.ratio()
        )?;
    }
    Ok(())
}

fn join<'a>(combinations: impl Iterator<Item = &'a Combination>) -> String {
    combinations.map(|c| c.as_str()).join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cross::{monohybrid_cross, validate_parents, CrossType};

    #[test]
    fn test_percentages_drop_trailing_zeros() {
        assert_eq!(format_percentage(25.0), "25");
        assert_eq!(format_percentage(6.25), "6.25");
        assert_eq!(format_percentage(12.5), "12.5");
        assert_eq!(format_percentage(0.0), "0");
        assert_eq!(format_percentage(100.0), "100");
    }

    #[test]
    fn test_monohybrid_report() {
        let (p1, p2) = validate_parents("Aa", "Aa", CrossType::Monohybrid).unwrap();
        let mut out = Vec::new();
        write_monohybrid_report(&mut out, &monohybrid_cross(&p1, &p2)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "There is a 25% chance of homozygous dominant (1:4 = AA)\n\
             There is a 25% chance of homozygous recessive (1:4 = aa)\n\
             There is a 50% chance of heterozygous (2:4 = Aa)\n"
        );
    }

    #[test]
    fn test_dihybrid_report() {
        let (p1, p2) = validate_parents("AABb", "AAbb", CrossType::Dihybrid).unwrap();
        let mut out = Vec::new();
        write_dihybrid_report(&mut out, &DihybridResult::new(&p1, &p2)).unwrap();
        let expected = "\
ALL GENOTYPES:
AABb AABb AAbb AAbb AABb AABb AAbb AAbb AABb AABb AAbb AAbb AABb AABb AAbb AAbb

UNIQUE GENOTYPES:
AABb AAbb

GENOTYPIC RATIOS:
AABb - 50% (8:16)
AAbb - 50% (8:16)
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
