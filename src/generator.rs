//! Build orchestration.
//!
//! [`Generator`] ties the pipeline together: locate the resource file, scan
//! it, render the model, and write the generated file under the configured
//! output root. A missing resource file is a legitimate "nothing to do"
//! state, scan problems degrade to diagnostics, and only output I/O failures
//! abort a build.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::diagnostics::Diagnostic;
use crate::emit::{emit, GeneratedMetadata};
use crate::error::{Result, SgenError};
use crate::fingerprint::FingerprintSource;
use crate::freshness;
use crate::output::Printer;
use crate::scanner;

/// Module path the generated file lives under; the output file path mirrors
/// it as nested directories beneath the output root.
pub const MODULE_PATH: &str = "sgen::statics";

/// Name of the generated top-level container, and the output file stem.
pub const CONTAINER_NAME: &str = "s";

/// The generated file location under an output root, per the fixed naming
/// convention.
pub fn output_path(base_output_dir: &std::path::Path) -> PathBuf {
    let mut path = base_output_dir.to_path_buf();
    for part in MODULE_PATH.split("::") {
        path.push(part);
    }
    path.join(format!("{}.rs", CONTAINER_NAME))
}

/// Header metadata for the fixed naming convention with the given
/// fingerprint and debug flag.
pub fn current_metadata(fingerprint: String, debug: bool) -> GeneratedMetadata {
    GeneratedMetadata {
        fingerprint,
        module_path: MODULE_PATH.to_string(),
        container: CONTAINER_NAME.to_string(),
        debug,
    }
}

/// How a build run ended.
#[derive(Debug)]
pub enum BuildStatus {
    /// The resource file was absent or not a regular file; nothing was
    /// written.
    MissingInput,
    /// The generated file was written.
    Written { path: PathBuf, entries: usize },
}

/// Outcome of [`Generator::build`]: the terminal status plus any scan
/// diagnostics, so callers can report dropped entries without treating them
/// as failures.
#[derive(Debug)]
pub struct BuildReport {
    pub status: BuildStatus,
    pub diagnostics: Vec<Diagnostic>,
}

/// One configured generation task.
pub struct Generator {
    base_output_dir: PathBuf,
    resource_file: PathBuf,
    task_name: String,
    debug_logging: bool,
    fingerprint: Box<dyn FingerprintSource>,
    printer: Printer,
}

impl Generator {
    pub fn new(
        base_output_dir: impl Into<PathBuf>,
        resource_file: impl Into<PathBuf>,
        task_name: impl Into<String>,
        debug_logging: bool,
        fingerprint: Box<dyn FingerprintSource>,
    ) -> Self {
        let generator = Self {
            base_output_dir: base_output_dir.into(),
            resource_file: resource_file.into(),
            task_name: task_name.into(),
            debug_logging,
            fingerprint,
            printer: Printer::new(),
        };

        generator.log(&format!(
            "configured\n    output: {}\n    resource file: {}\n    module: {}\n    container: {}",
            generator.base_output_dir.display(),
            generator.resource_file.display(),
            MODULE_PATH,
            CONTAINER_NAME,
        ));
        generator
    }

    /// The output file location derived from the fixed naming convention.
    pub fn output_path(&self) -> PathBuf {
        output_path(&self.base_output_dir)
    }

    /// Scan the resource file and write the generated output.
    ///
    /// Returns `Ok` with a [`BuildStatus::MissingInput`] report when there is
    /// no resource file. Output I/O failures are the only fatal path.
    pub fn build(&self) -> Result<BuildReport> {
        let start = Instant::now();

        let outcome = match scanner::scan_file(&self.resource_file) {
            Ok(outcome) => outcome,
            Err(e) if e.is_missing_input() => {
                self.log(&format!(
                    "resource file {} not found or invalid, nothing to generate",
                    self.resource_file.display()
                ));
                return Ok(BuildReport {
                    status: BuildStatus::MissingInput,
                    diagnostics: Vec::new(),
                });
            }
            Err(e) => return Err(e),
        };

        for diagnostic in &outcome.diagnostics {
            self.log(&format!("{}: {}", diagnostic.severity, diagnostic.message));
        }

        let source = emit(&outcome.model, &self.metadata());

        let path = self.output_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SgenError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
        fs::write(&path, source).map_err(|e| SgenError::Io {
            path: path.clone(),
            message: format!("Failed to write generated file: {}", e),
        })?;

        self.log(&format!(
            "generated {} entries in {}ms",
            outcome.model.len(),
            start.elapsed().as_millis()
        ));

        Ok(BuildReport {
            status: BuildStatus::Written {
                path,
                entries: outcome.model.len(),
            },
            diagnostics: outcome.diagnostics,
        })
    }

    /// Whether existing output is current for this configuration. Purely
    /// advisory: never regenerates.
    pub fn is_current(&self) -> bool {
        let start = Instant::now();
        let path = self.output_path();
        let current = freshness::is_current(&path, &self.metadata());
        self.log(&format!(
            "freshness check of {} took {}ms, current: {}",
            path.display(),
            start.elapsed().as_millis(),
            current
        ));
        current
    }

    fn metadata(&self) -> GeneratedMetadata {
        current_metadata(self.fingerprint.fingerprint(), self.debug_logging)
    }

    fn log(&self, message: &str) {
        if self.debug_logging {
            self.printer.info(&self.task_name, message);
        }
    }
}
