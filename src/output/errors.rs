use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Invalid output filename: '{0}'")]
    InvalidFilename(String),
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OutputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutputError::Io {
            path: path.into(),
            source,
        }
    }
}
