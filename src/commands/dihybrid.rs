use crate::cli::DihybridArgs;
use crate::cross::{validate_parents, CrossType, DihybridResult};
use crate::report::write_dihybrid_report;
use crate::utils::{with_context, Result};
use std::io::{self, Write};

pub fn dihybrid(args: DihybridArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    cross(&args.parent1, &args.parent2, &mut stdout)
}

fn cross<W: Write>(raw1: &str, raw2: &str, writer: &mut W) -> Result<()> {
    let (parent1, parent2) = validate_parents(raw1.trim(), raw2.trim(), CrossType::Dihybrid)
        .map_err(|e| e.to_string())?;
    log::debug!("Crossing {} x {}", parent1, parent2);

    let result = DihybridResult::new(&parent1, &parent2);
    log::debug!(
        "{} combinations, {} distinct genotypes",
        result.combinations.len(),
        result.frequencies.len()
    );

    write_dihybrid_report(writer, &result).map_err(with_context("Failed to write report"))
}
