//! Application configuration, and how it is read from a TOML file.

use crate::{error::StartupError, favicon_cfg::FaviconCfg, logging::LoggingConfig};
use serde::Deserialize;
use std::{fs, io, path::Path};

#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct ApplicationCfg {
    #[serde(default)]
    pub favicon: FaviconCfg,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ApplicationCfg {
    /// Reads the configuration from the TOML file at `path`. If the file can not be found a default
    /// configuration is created.
    pub fn init(path: &Path) -> Result<ApplicationCfg, StartupError> {
        match fs::read_to_string(path) {
            Ok(buffer) => toml::from_str(&buffer).map_err(|source| {
                StartupError::ParseConfiguration {
                    path: path.to_owned(),
                    source,
                }
            }),
            // Missing config file is fine and expected during local execution.
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                eprintln!(
                    "{} not found => Using default configuration.",
                    path.to_string_lossy()
                );
                Ok(ApplicationCfg::default())
            }
            Err(source) => Err(StartupError::ReadConfiguration {
                path: path.to_owned(),
                source,
            }),
        }
    }
}
