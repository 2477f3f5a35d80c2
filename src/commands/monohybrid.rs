use crate::cli::MonohybridArgs;
use crate::cross::{monohybrid_cross, validate_parents, CrossType};
use crate::report::write_monohybrid_report;
use crate::utils::{with_context, Result};
use std::io::{self, Write};

pub fn monohybrid(args: MonohybridArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    cross(&args.parent1, &args.parent2, &mut stdout)
}

fn cross<W: Write>(raw1: &str, raw2: &str, writer: &mut W) -> Result<()> {
    let (parent1, parent2) = validate_parents(raw1.trim(), raw2.trim(), CrossType::Monohybrid)
        .map_err(|e| e.to_string())?;
    log::debug!("Crossing {} x {}", parent1, parent2);

    let result = monohybrid_cross(&parent1, &parent2);
    let (dominant, recessive, heterozygous) = result.tallies();
    log::debug!(
        "Tallies: homozygous dominant={}, homozygous recessive={}, heterozygous={}",
        dominant,
        recessive,
        heterozygous
    );

    write_monohybrid_report(writer, &result).map_err(with_context("Failed to write report"))
}
