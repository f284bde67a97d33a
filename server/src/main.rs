//! # Answer `/favicon.ico` from memory, ahead of all other routes.
//!
//! ## Endpoints
//!
//! * `/favicon.ico`: The configured icon, or the one built into the binary
//! * `/`: Prints a plain text greeting message, so users now what kind of server is running.
//! * `/health`: Always returns 200 ok
//! * `/metrics`: Endpoint for prometheus metrics
//! * `/version`: Version of the server
#[macro_use]
extern crate prometheus;
use application_cfg::ApplicationCfg;
use clap::Parser;
use log::info;
use std::process::ExitCode;

use crate::{app::App, cli::Cli, error::StartupError};

mod app;
mod application_cfg;
mod cli;
mod error;
mod favicon_cfg;
mod health;
mod http_shell;
mod logging;
mod metrics;
mod not_found;
mod version;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logging might not be initialized yet, if the configuration is at fault.
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let opt = Cli::parse();

    let application_cfg = ApplicationCfg::init(&opt.configuration)?;

    logging::init(&application_cfg.logging);

    info!("Hello From favicon-server");

    not_found::initialize_metrics();

    let app = App::new(application_cfg, opt.endpoint()).await?;
    info!("Listening on {}", opt.endpoint());
    app.run().await
}
