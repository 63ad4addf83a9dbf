//! CLI errors.

use std::io;
use std::path::PathBuf;

use pyhl_lexer::ScanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("error writing '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("error reading from stdin: {0}")]
    Stdin(io::Error),

    #[error("error writing to stdout: {0}")]
    Stdout(io::Error),

    #[error("internal scanner error in '{path}': {source}")]
    Scan { path: String, source: ScanError },

    #[error("option '{0}' requires a value")]
    MissingValue(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("-o cannot be used with more than one input file")]
    OutputWithManyInputs,

    #[error("'-' (stdin) cannot be combined with other input files")]
    StdinWithManyInputs,
}

impl CliError {
    /// Classify an I/O failure while reading `path`.
    pub fn read(path: &str, err: io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source: err },
        }
    }
}
