//! Generator identity fingerprinting.
//!
//! Generated files carry a content hash of the generator build that produced
//! them, so a new generator version invalidates old output. The hash source
//! is injected through [`FingerprintSource`]: production hashes the running
//! executable, tests supply a fixed value.

use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Supplies the identity value tagged onto generated output.
pub trait FingerprintSource {
    /// The current fingerprint, or an empty string when none could be
    /// computed. An empty fingerprint never matches existing output, so
    /// regeneration always runs.
    fn fingerprint(&self) -> String;
}

/// Hashes the running executable. Changes whenever the generator binary
/// changes, which is exactly when old output should be considered stale.
#[derive(Debug, Default)]
pub struct BinaryFingerprint;

impl FingerprintSource for BinaryFingerprint {
    fn fingerprint(&self) -> String {
        std::env::current_exe()
            .and_then(|exe| hash_file(&exe))
            .unwrap_or_default()
    }
}

/// A fixed, injected fingerprint. Used by tests, and by embedders who want a
/// version string instead of a binary hash.
#[derive(Debug, Clone)]
pub struct FixedFingerprint(pub String);

impl FingerprintSource for FixedFingerprint {
    fn fingerprint(&self) -> String {
        self.0.clone()
    }
}

/// SHA-256 hash of a file's contents, returned as a hex string.
fn hash_file(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{:x}", digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_hash_file_deterministic() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bin");
        fs::write(&path, b"generator bytes").unwrap();

        let h1 = hash_file(&path).unwrap();
        let h2 = hash_file(&path).unwrap();
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64); // SHA-256 hex is 64 chars
    }

    #[test]
    fn test_hash_file_changes_with_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bin");

        fs::write(&path, b"version 1").unwrap();
        let h1 = hash_file(&path).unwrap();

        fs::write(&path, b"version 2").unwrap();
        let h2 = hash_file(&path).unwrap();

        assert_ne!(h1, h2);
    }

    #[test]
    fn test_binary_fingerprint_is_stable() {
        let source = BinaryFingerprint;
        // The test binary doesn't change mid-run
        assert_eq!(source.fingerprint(), source.fingerprint());
    }

    #[test]
    fn test_fixed_fingerprint() {
        let source = FixedFingerprint("abc123".to_string());
        assert_eq!(source.fingerprint(), "abc123");
    }
}
