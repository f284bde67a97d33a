/// Health check used to see if server is running
pub async fn health() -> &'static str {
    "Ok"
}
