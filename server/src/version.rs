use version::version;

/// Version of the server, e.g. `0.1.0`.
pub async fn get_version() -> &'static str {
    version!()
}
