use axum::{http::StatusCode, response::Html};
use lazy_static::lazy_static;
use prometheus::IntCounter;

lazy_static! {
    /// A prometheus metric counting the number of requests to unknown URLs. It is accessible to
    /// clients via the `metrics` route. Favicon requests are answered before routing and never
    /// show up here.
    static ref NUM_404_REQUESTS: IntCounter =
        register_int_counter!("favicon_server_num_404", "Number of requests to unknown resources.")
            .expect("Error registering num_404 prometheus metric");
}

const NOT_FOUND_PAGE: &str = "<!DOCTYPE html>\n\
    <html><head><title>404 Not Found</title></head>\n\
    <body><h1>404 Not Found</h1></body></html>\n";

/// 404 handler
pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    // Increment prometheous metric
    NUM_404_REQUESTS.inc();
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}

/// Use this to initialize metrics eagerly, i.e. before the handler is called for the first time.
pub fn initialize_metrics() {
    lazy_static::initialize(&NUM_404_REQUESTS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn status_code() {
        let (status, _) = not_found().await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
