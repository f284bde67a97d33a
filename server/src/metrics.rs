//! This module defines the `/metrics` route with which metrics can be accessed from via http. It
//! does and should not define individual metrics. These should go into their respective modules.

use axum::http::StatusCode;
use log::error;
use prometheus::{Encoder, TextEncoder};

/// Renders the default prometheus registry into text
pub async fn metrics() -> Result<String, StatusCode> {
    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    encoder
        .encode(&prometheus::gather(), &mut buf)
        .map_err(|e| {
            error!("Failed to encode metrics: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    // The text encoder only ever emits utf8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::not_found::{initialize_metrics, not_found};

    #[tokio::test]
    async fn renders_404_counter() {
        initialize_metrics();
        not_found().await;

        let text = metrics().await.unwrap();

        assert!(text.contains("favicon_server_num_404"));
    }
}
