use favicon::LoadError;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Reasons for the server to refuse to start, or to stop serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Couldn't read {}:\n{source}", .path.display())]
    ReadConfiguration { path: PathBuf, source: io::Error },
    #[error("Couldn't parse {}:\n{source}", .path.display())]
    ParseConfiguration {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Favicon(#[from] LoadError),
    #[error("Http server error: {0}")]
    Io(#[from] io::Error),
}
