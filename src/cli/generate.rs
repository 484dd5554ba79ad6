//! Generate command implementation.
//!
//! Scans a resource file and writes the generated constants module. Unless
//! forced, generation is skipped when the existing output's header still
//! matches the current generator fingerprint and configuration.

use std::path::PathBuf;

use clap::Args;

use crate::diagnostics::Severity;
use crate::error::Result;
use crate::fingerprint::BinaryFingerprint;
use crate::generator::{BuildStatus, Generator};
use crate::output::{display_path, plural, Printer};

/// Generate the constants module from a resource file
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Resource file to scan
    pub resource_file: PathBuf,

    /// Output root directory
    #[arg(long, short, default_value = "generated")]
    pub output: PathBuf,

    /// Name used to prefix debug log lines
    #[arg(long, default_value = "sgen")]
    pub task_name: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Regenerate even when existing output is current
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let printer = Printer::new();
    let generator = Generator::new(
        args.output.clone(),
        args.resource_file.clone(),
        args.task_name.clone(),
        args.debug,
        Box::new(BinaryFingerprint),
    );

    if !args.force && generator.is_current() {
        printer.status("Skipping", "generated output is current");
        return Ok(());
    }

    let report = generator.build()?;

    for diagnostic in &report.diagnostics {
        match diagnostic.severity {
            Severity::Warning => printer.warning("warning", &diagnostic.message),
            Severity::Error => printer.error("error", &diagnostic.message),
        }
    }

    match report.status {
        BuildStatus::MissingInput => {
            printer.status(
                "Skipping",
                &format!(
                    "{} not found, nothing to generate",
                    display_path(&args.resource_file)
                ),
            );
        }
        BuildStatus::Written { path, entries } => {
            printer.status(
                "Generated",
                &format!(
                    "{} ({})",
                    display_path(&path),
                    plural(entries, "entry", "entries")
                ),
            );
        }
    }

    Ok(())
}
