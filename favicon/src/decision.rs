//! Decides how a request is answered, without producing the response yet.

use axum::http::Method;

/// The only request target this middleware answers.
pub const FAVICON_PATH: &str = "/favicon.ico";

/// Value of the `Allow` header for the favicon resource.
pub const ALLOWED_METHODS: &str = "GET, HEAD, OPTIONS";

/// Outcome of inspecting a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Not a favicon request. Pass it on to the next handler.
    NotHandled,
    /// `GET` or `HEAD`, but there is no icon: `204 No Content`.
    NoContent,
    /// Neither `GET`, `HEAD` nor `OPTIONS`: `405 Method Not Allowed`.
    MethodNotAllowed,
    /// `OPTIONS`: `200 Ok` with an `Allow` header.
    OptionsOk,
    /// `GET` or `HEAD`: `200 Ok` with the icon.
    Served,
}

/// `target` is the request target as sent by the client, query string included. Only an exact
/// match of [`FAVICON_PATH`] is handled, so `/favicon.ico?v=2` is passed on.
pub fn decide(method: &Method, target: &str, icon_len: usize) -> Decision {
    // Comparing the length first rejects almost every other route without looking at the bytes.
    if target.len() != FAVICON_PATH.len() || target != FAVICON_PATH {
        return Decision::NotHandled;
    }

    if method != Method::GET && method != Method::HEAD {
        return if method == Method::OPTIONS {
            Decision::OptionsOk
        } else {
            Decision::MethodNotAllowed
        };
    }

    if icon_len == 0 {
        Decision::NoContent
    } else {
        Decision::Served
    }
}
