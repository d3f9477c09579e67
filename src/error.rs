use miette::Diagnostic;
use thiserror::Error;

/// Main error type for keyart operations
#[derive(Error, Diagnostic, Debug)]
pub enum KeyartError {
    #[error("Keymap declaration not found: {message}")]
    #[diagnostic(code(keyart::not_found))]
    NotFound {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Structural error on line {line}: {message}")]
    #[diagnostic(code(keyart::structure))]
    Structural {
        /// 1-based source line the violation was found on
        line: usize,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(keyart::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Check failed: {message}")]
    #[diagnostic(code(keyart::check))]
    Check {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(keyart::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(keyart::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, KeyartError>;
