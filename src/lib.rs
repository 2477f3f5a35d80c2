//! # punnett
//! Punnett square calculator for monohybrid (one locus) and dihybrid (two
//! loci) crosses.
//!
//! Parents are written as allele letters, dominant allele first at each
//! locus: `Aa`, `AaBb`. Every cross is computed from scratch:
//!
//! ```
//! use punnett::cross::{monohybrid_cross, validate_parents, CrossType};
//!
//! let (p1, p2) = validate_parents("Aa", "Aa", CrossType::Monohybrid).unwrap();
//! assert_eq!(monohybrid_cross(&p1, &p2).tallies(), (1, 1, 2));
//! ```

pub mod cli;
pub mod commands;
pub mod cross;
pub mod report;
pub mod utils;
