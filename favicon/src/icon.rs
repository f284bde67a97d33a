use crate::{
    config::FaviconConfig,
    error::LoadError,
    fs::{FileSystem, LocalFs},
};
use axum::{body::Bytes, http::HeaderValue};
use log::{info, warn};
use std::{io::Read, path::Path};

/// The favicon as it is served: its bytes and the matching `Content-Length` value.
///
/// Loaded once and never modified afterwards, so it can be shared between all request handlers
/// without any synchronization.
#[derive(Debug, Clone)]
pub struct ResolvedIcon {
    bytes: Bytes,
    /// Decimal representation of `bytes.len()`. Formatted once rather than for every response.
    content_length: HeaderValue,
}

impl ResolvedIcon {
    /// Resolves the icon from the first configured source: `file` (through `file_system` if
    /// present, otherwise the local disk), then `file_data`. Without any source the icon is empty.
    ///
    /// A configured `file` that can not be read is an error, even if `file_data` is set as well.
    pub fn load(config: &FaviconConfig) -> Result<ResolvedIcon, LoadError> {
        let file = config
            .file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty());

        let bytes = if let Some(path) = file {
            let bytes = match &config.file_system {
                Some(file_system) => read_file(file_system.as_ref(), path)?,
                None => read_file(&LocalFs::default(), path)?,
            };
            info!(
                "Serving favicon from '{}' ({} bytes).",
                path.display(),
                bytes.len()
            );
            bytes
        } else if let Some(data) = &config.file_data {
            info!("Serving favicon from memory ({} bytes).", data.len());
            data.clone()
        } else {
            warn!("No favicon configured. Requests to it will be answered with 204 No Content.");
            Bytes::new()
        };

        Ok(ResolvedIcon::new(bytes))
    }

    pub fn new(bytes: Bytes) -> Self {
        let content_length = HeaderValue::from(bytes.len());
        ResolvedIcon {
            bytes,
            content_length,
        }
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn content_length(&self) -> &HeaderValue {
        &self.content_length
    }
}

/// Reads the entire file into memory. The file is closed before this function returns, whether
/// reading succeeded or not.
fn read_file(file_system: &dyn FileSystem, path: &Path) -> Result<Bytes, LoadError> {
    let mut reader = file_system.open(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|source| LoadError::Read {
            path: path.to_owned(),
            source,
        })?;
    Ok(buf.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::EmbeddedFs;
    use std::{
        io::{self, Write},
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        },
    };
    use tempfile::NamedTempFile;

    fn temp_icon(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn file_data_is_used_as_is() {
        let config = FaviconConfig::new().file_data(&b"mock icon data"[..]);

        let icon = ResolvedIcon::load(&config).unwrap();

        assert_eq!(&b"mock icon data"[..], icon.bytes());
        assert_eq!("14", icon.content_length());
    }

    #[test]
    fn file_is_read_from_local_disk() {
        let file = temp_icon(b"from disk");
        let config = FaviconConfig::new().file(file.path());

        let icon = ResolvedIcon::load(&config).unwrap();

        assert_eq!(&b"from disk"[..], icon.bytes());
        assert_eq!("9", icon.content_length());
    }

    #[test]
    fn file_is_read_through_file_system() {
        let fs = EmbeddedFs::new().with_file("favicon.ico", &b"embedded"[..]);
        let config = FaviconConfig::new().file("/favicon.ico").file_system(fs);

        let icon = ResolvedIcon::load(&config).unwrap();

        assert_eq!(&b"embedded"[..], icon.bytes());
    }

    #[test]
    fn file_takes_precedence_over_file_data() {
        let file = temp_icon(b"from disk");
        let config = FaviconConfig::new()
            .file(file.path())
            .file_data(&b"in memory"[..]);

        let icon = ResolvedIcon::load(&config).unwrap();

        assert_eq!(&b"from disk"[..], icon.bytes());
    }

    /// `file_data` is no fallback for a broken path.
    #[test]
    fn missing_file_is_an_error_even_with_file_data() {
        let config = FaviconConfig::new()
            .file("does/not/exist.ico")
            .file_data(&b"in memory"[..]);

        let result = ResolvedIcon::load(&config);

        assert!(matches!(result, Err(LoadError::Open { .. })));
    }

    #[test]
    fn empty_file_falls_back_to_file_data() {
        let config = FaviconConfig::new().file("").file_data(&b"in memory"[..]);

        let icon = ResolvedIcon::load(&config).unwrap();

        assert_eq!(&b"in memory"[..], icon.bytes());
    }

    #[test]
    fn no_source_yields_empty_icon() {
        let icon = ResolvedIcon::load(&FaviconConfig::new()).unwrap();

        assert!(icon.is_empty());
        assert_eq!("0", icon.content_length());
    }

    #[test]
    fn missing_file_is_an_error() {
        let config = FaviconConfig::new().file("does/not/exist.ico");

        let result = ResolvedIcon::load(&config);

        assert!(matches!(result, Err(LoadError::Open { .. })));
    }

    #[test]
    fn missing_file_in_file_system_is_an_error() {
        let config = FaviconConfig::new()
            .file("favicon.ico")
            .file_system(EmbeddedFs::new());

        let result = ResolvedIcon::load(&config);

        assert!(matches!(result, Err(LoadError::Open { .. })));
    }

    /// Fails on every read. Records whether it has been dropped.
    struct Faulty {
        dropped: Arc<AtomicBool>,
    }

    impl Read for Faulty {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
        }
    }

    impl Drop for Faulty {
        fn drop(&mut self) {
            self.dropped.store(true, Ordering::SeqCst);
        }
    }

    struct FaultyFs {
        dropped: Arc<AtomicBool>,
    }

    impl FileSystem for FaultyFs {
        fn open(&self, _path: &Path) -> io::Result<Box<dyn Read + Send + '_>> {
            Ok(Box::new(Faulty {
                dropped: self.dropped.clone(),
            }))
        }
    }

    #[test]
    fn read_failure_is_an_error_and_file_is_released() {
        let dropped = Arc::new(AtomicBool::new(false));
        let config = FaviconConfig::new().file("favicon.ico").file_system(FaultyFs {
            dropped: dropped.clone(),
        });

        let result = ResolvedIcon::load(&config);

        assert!(matches!(result, Err(LoadError::Read { .. })));
        assert!(dropped.load(Ordering::SeqCst));
    }
}
