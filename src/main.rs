use clap::Parser;
use punnett::{
    cli::{init_verbose, Cli, Command, FULL_VERSION},
    commands::{dihybrid, interactive, monohybrid},
    utils::{handle_error_and_exit, Result},
};

fn runner() -> Result<()> {
    let cli = Cli::parse();
    init_verbose(&cli);
    let subcommand_name = match cli.command {
        Command::Monohybrid(_) => "monohybrid",
        Command::Dihybrid(_) => "dihybrid",
        Command::Interactive(_) => "interactive",
    };

    log::info!(
        "Running {}-{} [{}]",
        env!("CARGO_PKG_NAME"),
        *FULL_VERSION,
        subcommand_name
    );
    match cli.command {
        Command::Monohybrid(args) => monohybrid::monohybrid(args)?,
        Command::Dihybrid(args) => dihybrid::dihybrid(args)?,
        Command::Interactive(args) => interactive::interactive(args)?,
    }
    log::info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

fn main() {
    if let Err(e) = runner() {
        handle_error_and_exit(e);
    }
}
