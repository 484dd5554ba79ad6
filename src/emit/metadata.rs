//! Header metadata embedded in generated output.
//!
//! The first four lines of a generated file identify the generator build
//! and configuration that produced it. The freshness check reads those same
//! lines back, so their order and count are a contract shared with
//! [`crate::freshness`].

/// The ordered header values written into (and expected back from) a
/// generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMetadata {
    /// Content hash identifying the generator build. Empty when the hash
    /// could not be computed, which makes any existing output stale.
    pub fingerprint: String,
    /// Module path the generated file lives under.
    pub module_path: String,
    /// Name of the top-level generated container.
    pub container: String,
    /// Whether the producing run had debug logging enabled.
    pub debug: bool,
}

impl GeneratedMetadata {
    /// The expected header values, in emission order. The emitter writes
    /// each as a comment line; the freshness check matches each by substring
    /// containment against the corresponding file line.
    pub fn lines(&self) -> [String; 4] {
        [
            self.fingerprint.clone(),
            format!("Module: {}", self.module_path),
            format!("Container: {}", self.container),
            format!("Debug: {}", self.debug),
        ]
    }
}
