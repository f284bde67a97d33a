use log::info;
use tokio::net::ToSocketAddrs;

use crate::{application_cfg::ApplicationCfg, error::StartupError, http_shell::HttpShell};

/// Allows to initialize and run the application. Most importantly the separation of [`App::new`]
/// and [`App::run`], allows for easier testing, because we can now explicitly wait for the service
/// to be able to accept incoming requests (i.e. the port is bound to a listener), without relying
/// on sleep timings.
pub struct App {
    http_shell: HttpShell,
}

impl App {
    /// Loads the favicon and binds the http interface. Fails without binding, if the favicon can
    /// not be loaded. Stops serving once `Ctrl-C` is received.
    pub async fn new(
        application_cfg: ApplicationCfg,
        endpoint: impl ToSocketAddrs,
    ) -> Result<Self, StartupError> {
        let favicon = application_cfg.favicon.load()?;
        let http_shell = HttpShell::new(endpoint, favicon, shutdown_signal()).await?;
        Ok(App { http_shell })
    }

    /// Runs application to completion and frees all associated resources.
    pub async fn run(self) -> Result<(), StartupError> {
        self.http_shell.join().await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    // Failing to install the handler means we can not be stopped gracefully. We still keep
    // serving until the process is killed.
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received Ctrl-C, shutting down.");
    } else {
        std::future::pending::<()>().await;
    }
}
