use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum SgenError {
    #[error("IO error: {0}")]
    #[diagnostic(code(sgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(sgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(sgen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Resource file not found: {path}")]
    #[diagnostic(code(sgen::missing_input))]
    MissingInput { path: std::path::PathBuf },

    #[error("Build error: {message}")]
    #[diagnostic(code(sgen::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl SgenError {
    /// True when the error is the "input file absent" case, which callers
    /// may treat as "nothing to generate" rather than a failure.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, SgenError::MissingInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, SgenError>;
