use std::{io, path::PathBuf};
use thiserror::Error;

/// Error returned while constructing the favicon middleware.
///
/// All of these are configuration errors. They surface exactly once, before the first request is
/// answered, and the host application is expected to refuse to start if it sees one.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The favicon file could not be opened, e.g. because the path is wrong.
    #[error("Unable to open favicon '{}': {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    /// The favicon file could be opened, but reading it to the end failed.
    #[error("Unable to read favicon '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    /// The configured `Cache-Control` value contains characters not allowed in an http header.
    #[error("Cache-Control value {value:?} is not a valid http header value")]
    InvalidCacheControl { value: String },
}
