//! Errors that occur while generating a feature

use std::path::PathBuf;

use read_fonts::ReadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The generator was asked to do something that can't be done.
    ///
    /// This is always reported before any random draws are made.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Error reading font data: {0}")]
    Font(ReadError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ReadError> for Error {
    fn from(src: ReadError) -> Self {
        Error::Font(src)
    }
}
