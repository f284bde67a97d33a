use favicon::{EmbeddedFs, Favicon, FaviconConfig, LoadError, LocalFs};
use serde::Deserialize;
use std::path::PathBuf;

/// Favicon is statically linked into the binary. This saves us the headache of deploying static
/// assets. Used unless a file is configured.
const BUILT_IN: &[u8] = include_bytes!("favicon.ico");
const BUILT_IN_NAME: &str = "favicon.ico";

/// `[favicon]` section of the configuration file.
///
/// ```toml
/// [favicon]
/// file = "favicon.ico"
/// root = "static"
/// cache_control = "no-cache"
/// ```
#[derive(Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct FaviconCfg {
    /// Icon to serve. Replaces the built-in icon.
    pub file: Option<PathBuf>,
    /// Directory `file` is resolved in. Relative to the working directory if not set.
    pub root: Option<PathBuf>,
    /// Serve the built-in icon if no `file` is given. If `false` and no `file` is given, requests
    /// for the icon are answered with `204 No Content`.
    #[serde(default = "FaviconCfg::embedded_default")]
    pub embedded: bool,
    /// Value of the `Cache-Control` header sent with the icon.
    pub cache_control: Option<String>,
}

impl Default for FaviconCfg {
    fn default() -> Self {
        FaviconCfg {
            file: None,
            root: None,
            embedded: true,
            cache_control: None,
        }
    }
}

impl FaviconCfg {
    fn embedded_default() -> bool {
        FaviconCfg::default().embedded
    }

    /// Translates the configuration file section into the configuration of the middleware.
    pub fn to_config(&self) -> FaviconConfig {
        let mut config = FaviconConfig::new();
        match (&self.file, &self.root) {
            (Some(file), Some(root)) => {
                config = config.file(file).file_system(LocalFs::new(root));
            }
            (Some(file), None) => {
                config = config.file(file);
            }
            (None, _) if self.embedded => {
                let built_in = EmbeddedFs::new().with_file(BUILT_IN_NAME, BUILT_IN);
                config = config.file(BUILT_IN_NAME).file_system(built_in);
            }
            (None, _) => (),
        }
        if let Some(cache_control) = &self.cache_control {
            config = config.cache_control(cache_control);
        }
        config
    }

    /// Loads the icon. An error here must keep the server from starting.
    pub fn load(&self) -> Result<Favicon, LoadError> {
        Favicon::new(self.to_config())
    }
}
