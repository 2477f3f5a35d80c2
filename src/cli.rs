use crate::cross::CrossType;
use chrono::Datelike;
use clap::{ArgAction, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::io::Write;

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="punnett",
          author="Punnett Contributors",
          version=&**FULL_VERSION,
          about="Monohybrid and dihybrid Punnett square calculator",
          long_about = None,
          disable_help_subcommand = true,
          arg_required_else_help = true,
          after_help = format!("Copyright (C) 2022-{}     Punnett Contributors
Alleles are single letters: uppercase is dominant, lowercase is recessive.
Type the dominant allele first (Aa, not aA).", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{author}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(global = true)]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Cross two parents at one locus (e.g. Aa x aa)")]
    Monohybrid(MonohybridArgs),
    #[clap(about = "Cross two parents at two loci (e.g. AaBb x AaBb)")]
    Dihybrid(DihybridArgs),
    #[clap(about = "Prompt for crosses until asked to stop")]
    Interactive(InteractiveArgs),
}

#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct MonohybridArgs {
    #[clap(value_name = "PARENT1")]
    #[clap(help = "Genotype of the first parent (AA, Aa or aa)")]
    pub parent1: String,

    #[clap(value_name = "PARENT2")]
    #[clap(help = "Genotype of the second parent (AA, Aa or aa)")]
    pub parent2: String,
}

#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct DihybridArgs {
    #[clap(value_name = "PARENT1")]
    #[clap(help = "Genotype of the first parent, two loci (e.g. AaBb)")]
    pub parent1: String,

    #[clap(value_name = "PARENT2")]
    #[clap(help = "Genotype of the second parent, two loci (e.g. AaBb)")]
    pub parent2: String,
}

#[derive(Parser, Debug)]
pub struct InteractiveArgs {
    #[clap(long = "cross-type")]
    #[clap(value_name = "CROSS_TYPE")]
    #[clap(help = "Always use this cross type instead of asking (monohybrid or dihybrid)")]
    pub cross_type: Option<CrossType>,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}
