//! Validate command implementation.
//!
//! Scans a resource file and reports what generation would see, without
//! writing anything. With `--json`, a machine-readable report goes to
//! stdout; human-readable diagnostics otherwise go to stderr.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::diagnostics::{Diagnostic, Severity};
use crate::error::{Result, SgenError};
use crate::output::{display_path, plural, Printer};
use crate::scanner;

/// Scan a resource file and report diagnostics without generating
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Resource file to scan
    pub resource_file: PathBuf,

    /// Emit a machine-readable JSON report on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    file: String,
    counts: Counts,
    diagnostics: &'a [Diagnostic],
}

#[derive(Serialize)]
struct Counts {
    boolean: usize,
    integer: usize,
    string: usize,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    // Unlike generation, a missing file here is a hard error: the user
    // explicitly named it.
    let outcome = scanner::scan_file(&args.resource_file)?;

    if args.json {
        let report = Report {
            file: args.resource_file.display().to_string(),
            counts: Counts {
                boolean: outcome.model.booleans.len(),
                integer: outcome.model.integers.len(),
                string: outcome.model.strings.len(),
            },
            diagnostics: &outcome.diagnostics,
        };
        let json = serde_json::to_string_pretty(&report).map_err(|e| SgenError::Build {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    let printer = Printer::new();
    for diagnostic in &outcome.diagnostics {
        match diagnostic.severity {
            Severity::Warning => printer.warning("warning", &diagnostic.message),
            Severity::Error => printer.error("error", &diagnostic.message),
        }
        if let Some(help) = &diagnostic.help {
            printer.info("help", help);
        }
    }
    printer.status(
        "Validated",
        &format!(
            "{}: {}, {}",
            display_path(&args.resource_file),
            plural(outcome.model.len(), "static entry", "static entries"),
            plural(outcome.diagnostics.len(), "diagnostic", "diagnostics")
        ),
    );

    Ok(())
}
