use serde::Deserialize;

/// Crates whose log output is governed by the configured level. Everything else, i.e. hyper and
/// the rest of the http stack, only gets to log warnings and errors.
const OWN_CRATES: [&str; 2] = ["favicon_server", "favicon"];

/// Level for everything outside of [`OWN_CRATES`].
const DEPENDENCY_LEVEL: &str = "warn";

/// Controls logging behaviour of the server. Set via the configuration file
#[derive(Deserialize, Default, PartialEq, Eq, Clone, Debug)]
pub struct LoggingConfig {
    #[serde(default)]
    pub stderr: StdErrConfig,
}

#[derive(Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct StdErrConfig {
    /// E.g. "INFO" or "DEBUG"
    pub level: String,
}

impl Default for StdErrConfig {
    fn default() -> Self {
        StdErrConfig {
            level: "WARN".to_string(),
        }
    }
}

impl StdErrConfig {
    /// `env_logger` filter applying `level` to the server and the favicon middleware, e.g.
    /// `warn,favicon_server=DEBUG,favicon=DEBUG`.
    pub fn filter(&self) -> String {
        let mut filter = DEPENDENCY_LEVEL.to_owned();
        for krate in OWN_CRATES {
            filter.push_str(&format!(",{krate}={}", self.level));
        }
        filter
    }
}

/// Log to stderr. The `FAVICON_LOG` environment variable replaces the filter derived from the
/// configuration file, so it may also raise the level of dependencies.
pub fn init(config: &LoggingConfig) {
    let environment = env_logger::Env::default().filter_or("FAVICON_LOG", config.stderr.filter());
    env_logger::Builder::from_env(environment).init();
}
