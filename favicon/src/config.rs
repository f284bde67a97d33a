use crate::fs::FileSystem;
use axum::body::Bytes;
use std::{fmt, path::PathBuf, sync::Arc};

/// `Cache-Control` header sent along with the icon unless configured otherwise. One year.
pub const DEFAULT_CACHE_CONTROL: &str = "public, max-age=31536000";

/// Where to take the favicon from and how clients may cache it.
///
/// Exactly one source is expected to be set. If both `file` and `file_data` are set, `file` wins.
/// If none is set, the icon is empty and requests for it are answered with `204 No Content`.
#[derive(Clone)]
pub struct FaviconConfig {
    /// Path to the icon. Read from the local filesystem, unless `file_system` is set.
    pub file: Option<PathBuf>,
    /// Alternate filesystem to resolve `file` in, e.g. an embedded one. Only used together with
    /// `file`.
    pub file_system: Option<Arc<dyn FileSystem>>,
    /// The icon itself. Only used if `file` is unset or empty.
    pub file_data: Option<Bytes>,
    /// Value of the `Cache-Control` header of successful responses.
    pub cache_control: Option<String>,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        FaviconConfig {
            file: None,
            file_system: None,
            file_data: None,
            cache_control: Some(DEFAULT_CACHE_CONTROL.to_owned()),
        }
    }
}

impl FaviconConfig {
    /// A configuration without any icon source and the default cache control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve the icon read from `path` at construction.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Resolve `file` through `file_system` instead of the local disk.
    pub fn file_system(mut self, file_system: impl FileSystem + 'static) -> Self {
        self.file_system = Some(Arc::new(file_system));
        self
    }

    /// Serve `data` as the icon, unless a `file` is configured.
    ///
    /// ```
    /// use favicon::{Favicon, FaviconConfig};
    ///
    /// let favicon = Favicon::new(FaviconConfig::new().file_data(&b"icon"[..])).unwrap();
    /// assert_eq!(&b"icon"[..], favicon.icon().bytes());
    /// ```
    pub fn file_data(mut self, data: impl Into<Bytes>) -> Self {
        self.file_data = Some(data.into());
        self
    }

    /// Value of the `Cache-Control` header sent along with the icon.
    pub fn cache_control(mut self, value: impl Into<String>) -> Self {
        self.cache_control = Some(value.into());
        self
    }
}

/// Fills every field left unset in `overrides` with the value from `defaults`. Empty paths and
/// empty strings count as unset.
pub fn merge(defaults: &FaviconConfig, overrides: FaviconConfig) -> FaviconConfig {
    let file = overrides
        .file
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| defaults.file.clone());
    let cache_control = overrides
        .cache_control
        .filter(|value| !value.is_empty())
        .or_else(|| defaults.cache_control.clone());
    FaviconConfig {
        file,
        file_system: overrides
            .file_system
            .or_else(|| defaults.file_system.clone()),
        file_data: overrides.file_data.or_else(|| defaults.file_data.clone()),
        cache_control,
    }
}

impl fmt::Debug for FaviconConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaviconConfig")
            .field("file", &self.file)
            .field("file_system", &self.file_system.as_ref().map(|_| ".."))
            .field("file_data", &self.file_data.as_ref().map(Bytes::len))
            .field("cache_control", &self.cache_control)
            .finish()
    }
}
