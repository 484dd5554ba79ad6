//! sgen - static resource constant generator
//!
//! A library for extracting statically-flagged entries from XML resource
//! files and generating a module of compile-time constants. Generated files
//! carry a fingerprint header identifying the generator build, so repeated
//! builds can skip regeneration when the output is already current.

pub mod cli;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod fingerprint;
pub mod freshness;
pub mod generator;
pub mod model;
pub mod output;
pub mod scanner;

pub use diagnostics::{Diagnostic, Severity};
pub use emit::{emit, GeneratedMetadata};
pub use error::{Result, SgenError};
pub use fingerprint::{BinaryFingerprint, FingerprintSource, FixedFingerprint};
pub use generator::{BuildReport, BuildStatus, Generator};
pub use model::{ResourceEntry, ResourceKind, ResourceModel};
pub use scanner::{scan_file, scan_str, ScanOutcome, ScanState};
