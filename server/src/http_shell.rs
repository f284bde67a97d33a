use axum::{extract::Request, routing::get, Router, ServiceExt};
use favicon::{Favicon, FaviconLayer, FaviconService};
use std::{future::Future, io};
use tokio::{
    net::{TcpListener, ToSocketAddrs},
    spawn,
    task::JoinHandle,
};
use tower::Layer;

use crate::{
    health::health, metrics::metrics, not_found::not_found, version::get_version,
};

pub struct HttpShell {
    join_handle: JoinHandle<io::Result<()>>,
}

impl HttpShell {
    /// Binds to `endpoint` and starts answering requests in the background, until `shutdown`
    /// completes.
    pub async fn new(
        endpoint: impl ToSocketAddrs,
        favicon: Favicon,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> io::Result<Self> {
        let app = app(favicon);
        let listener = TcpListener::bind(endpoint).await?;
        let join_handle = spawn(async move {
            axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
                .with_graceful_shutdown(shutdown)
                .await
        });
        Ok(HttpShell { join_handle })
    }

    /// Waits for the server to stop.
    pub async fn join(self) -> io::Result<()> {
        self.join_handle.await.map_err(io::Error::other)?
    }
}

/// The favicon wraps the entire router, so it answers before routing takes place, and its
/// requests can never end up in the `not_found` fallback.
fn app(favicon: Favicon) -> FaviconService<Router> {
    let router = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/version", get(get_version))
        .fallback(not_found);
    FaviconLayer::new(favicon).layer(router)
}

async fn index() -> &'static str {
    "Hello from favicon-server!"
}
