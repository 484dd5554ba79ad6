//! Freshness check command.
//!
//! Advisory only: reports whether the generated file under the output root
//! still matches the current generator fingerprint and configuration. Never
//! regenerates. The process exits non-zero when the output is stale, so
//! build scripts can gate generation on it.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::fingerprint::{BinaryFingerprint, FingerprintSource};
use crate::freshness;
use crate::generator::{current_metadata, output_path};
use crate::output::{display_path, Printer};

/// Check whether existing generated output is current
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Output root directory
    #[arg(long, short, default_value = "generated")]
    pub output: PathBuf,

    /// Debug flag the generating run was configured with
    #[arg(long)]
    pub debug: bool,
}

/// Returns whether the output is current; `main` turns false into exit 1.
pub fn run(args: CheckArgs) -> Result<bool> {
    let printer = Printer::new();
    let path = output_path(&args.output);
    let metadata = current_metadata(BinaryFingerprint.fingerprint(), args.debug);

    let current = freshness::is_current(&path, &metadata);
    if current {
        printer.status("Fresh", &display_path(&path));
    } else {
        printer.warning("Stale", &display_path(&path));
    }
    Ok(current)
}
