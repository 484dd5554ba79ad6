use clap::Parser;
use miette::Result;
use sgen::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => sgen::cli::generate::run(args)?,
        Commands::Check(args) => {
            if !sgen::cli::check::run(args)? {
                std::process::exit(1);
            }
        }
        Commands::Validate(args) => sgen::cli::validate::run(args)?,
        Commands::Completions(args) => sgen::cli::completions::run(args)?,
    }

    Ok(())
}
