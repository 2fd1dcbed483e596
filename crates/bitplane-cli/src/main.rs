use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = bitplane_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    log::debug!("{args:?}");

    match args.command {
        Commands::Hide(args) => args.run(),
        Commands::Unveil(args) => args.run(),
        Commands::Compare(args) => args.run(),
    }
}
