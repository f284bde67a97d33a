//! Answers `/favicon.ico` from memory, ahead of the routing of an axum (or any tower based)
//! application.
//!
//! Browsers ask for the icon on their own. Rather than reading it from disk each time, or
//! cluttering the logs with 404s, the icon is loaded once at startup and served from memory:
//!
//! * `GET` / `HEAD`: `200 Ok` with the icon, or `204 No Content` if no icon is configured.
//! * `OPTIONS`: `200 Ok` with `Allow: GET, HEAD, OPTIONS`.
//! * Any other method: `405 Method Not Allowed`.
//!
//! All other requests are passed through untouched.
mod config;
mod decision;
mod error;
mod fs;
mod icon;
mod middleware;

pub use config::{merge, FaviconConfig, DEFAULT_CACHE_CONTROL};
pub use decision::{decide, Decision, ALLOWED_METHODS, FAVICON_PATH};
pub use error::LoadError;
pub use fs::{EmbeddedFs, FileSystem, LocalFs};
pub use icon::ResolvedIcon;
pub use middleware::{Favicon, FaviconLayer, FaviconService};
