//! Abstract filesystem the favicon can be read through.
//!
//! The icon is usually a plain file on disk, but it might as well be compiled into the executable
//! or live in some virtual tree. [`FileSystem`] is the one capability the loader needs from any of
//! these: open a path and hand out something readable.

use axum::body::Bytes;
use std::{
    collections::HashMap,
    fs::File,
    io::{self, Cursor, Read},
    path::{Path, PathBuf},
};

/// Source of files the favicon may be loaded from.
pub trait FileSystem: Send + Sync {
    /// Opens the file at `path` for reading. The returned reader is dropped (and the file closed)
    /// as soon as the caller is done with it.
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send + '_>>;
}

/// Files on the local disk.
///
/// Without a root, paths are used as they are, i.e. relative paths are resolved against the
/// working directory. With a root, paths are resolved below it and a leading `/` is ignored, so
/// `/favicon.ico` and `favicon.ico` name the same file.
#[derive(Debug, Clone, Default)]
pub struct LocalFs {
    root: Option<PathBuf>,
}

impl LocalFs {
    /// Resolve all paths relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalFs {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) => root.join(relative(path)),
            None => path.to_owned(),
        }
    }
}

impl FileSystem for LocalFs {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send + '_>> {
        let file = File::open(self.resolve(path))?;
        Ok(Box::new(file))
    }
}

/// Files held in memory. Meant for assets compiled into the binary with `include_bytes!`.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedFs {
    files: HashMap<PathBuf, Bytes>,
}

impl EmbeddedFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file. Like [`LocalFs`] with a root, a leading `/` in `path` is ignored.
    pub fn with_file(mut self, path: impl AsRef<Path>, data: impl Into<Bytes>) -> Self {
        self.files
            .insert(relative(path.as_ref()).to_owned(), data.into());
        self
    }
}

impl FileSystem for EmbeddedFs {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send + '_>> {
        match self.files.get(relative(path)) {
            // Cloning `Bytes` only bumps a reference count.
            Some(data) => Ok(Box::new(Cursor::new(data.clone()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not an embedded file", path.display()),
            )),
        }
    }
}

fn relative(path: &Path) -> &Path {
    path.strip_prefix("/").unwrap_or(path)
}
