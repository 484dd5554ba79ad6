pub mod check;
pub mod completions;
pub mod generate;
pub mod validate;

use clap::{Parser, Subcommand};

/// sgen - static resource constant generator
#[derive(Parser, Debug)]
#[command(name = "sgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the constants module from a resource file
    Generate(generate::GenerateArgs),

    /// Check whether existing generated output is current
    Check(check::CheckArgs),

    /// Scan a resource file and report diagnostics without generating
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
