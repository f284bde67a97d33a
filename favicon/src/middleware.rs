use crate::{
    config::{merge, FaviconConfig, DEFAULT_CACHE_CONTROL},
    decision::{decide, Decision, ALLOWED_METHODS},
    error::LoadError,
    icon::ResolvedIcon,
};
use axum::{
    body::Body,
    http::{
        header::{ALLOW, CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE},
        uri::PathAndQuery,
        HeaderValue, Request, Response, StatusCode,
    },
};
use futures_util::future::Either;
use std::{
    future::{ready, Ready},
    sync::Arc,
    task::{Context, Poll},
};
use tower::{util::Oneshot, Layer, Service, ServiceExt};

const ICON_CONTENT_TYPE: &str = "image/x-icon";

/// Answers requests for `/favicon.ico` from memory.
///
/// Holds everything needed to answer: the icon, its length and the `Cache-Control` value. All of it
/// is fixed at construction, so answering a request never fails and never touches the disk.
#[derive(Debug, Clone)]
pub struct Favicon {
    icon: ResolvedIcon,
    cache_control: HeaderValue,
}

impl Favicon {
    /// Loads the icon described by `config`. Fields left unset in `config` take their values from
    /// [`FaviconConfig::default`].
    ///
    /// Fails if the icon file can not be read or the cache control is not a valid header value. A
    /// host application should refuse to start in that case, rather than serve nothing.
    pub fn new(config: FaviconConfig) -> Result<Self, LoadError> {
        let config = merge(&FaviconConfig::default(), config);
        let icon = ResolvedIcon::load(&config)?;
        let cache_control = config
            .cache_control
            .unwrap_or_else(|| DEFAULT_CACHE_CONTROL.to_owned());
        let cache_control = HeaderValue::from_str(&cache_control)
            .map_err(|_| LoadError::InvalidCacheControl {
                value: cache_control,
            })?;
        Ok(Favicon {
            icon,
            cache_control,
        })
    }

    pub fn icon(&self) -> &ResolvedIcon {
        &self.icon
    }

    pub fn cache_control(&self) -> &HeaderValue {
        &self.cache_control
    }

    /// How `request` is going to be answered.
    pub fn decide<B>(&self, request: &Request<B>) -> Decision {
        let target = request
            .uri()
            .path_and_query()
            .map(PathAndQuery::as_str)
            .unwrap_or_default();
        decide(request.method(), target, self.icon.len())
    }

    /// The final response to `request`, or `None` if it is not meant for us.
    pub fn respond<B>(&self, request: &Request<B>) -> Option<Response<Body>> {
        let response = match self.decide(request) {
            Decision::NotHandled => return None,
            Decision::NoContent => empty(StatusCode::NO_CONTENT),
            Decision::MethodNotAllowed => allow(StatusCode::METHOD_NOT_ALLOWED),
            Decision::OptionsOk => allow(StatusCode::OK),
            Decision::Served => self.serve(),
        };
        Some(response)
    }

    fn serve(&self) -> Response<Body> {
        // Cloning `Bytes` shares the buffer, the icon itself is not copied.
        let mut response = Response::new(Body::from(self.icon.bytes().clone()));
        let headers = response.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(ICON_CONTENT_TYPE));
        headers.insert(CONTENT_LENGTH, self.icon.content_length().clone());
        headers.insert(CACHE_CONTROL, self.cache_control.clone());
        response
    }
}

fn empty(status: StatusCode) -> Response<Body> {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response
}

/// Empty response telling the client which methods the favicon supports.
fn allow(status: StatusCode) -> Response<Body> {
    let mut response = empty(status);
    let headers = response.headers_mut();
    headers.insert(ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
    headers.insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
    response
}

/// Puts a [`Favicon`] in front of a service. Requests for `/favicon.ico` never reach the inner
/// service, all others are passed through unchanged.
///
/// To answer the icon before any routing takes place, wrap the whole router:
///
/// ```no_run
/// use axum::{extract::Request, routing::get, Router, ServiceExt};
/// use favicon::{Favicon, FaviconConfig, FaviconLayer};
/// use tower::Layer;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let favicon = Favicon::new(FaviconConfig::new().file("static/favicon.ico"))?;
/// let router = Router::new().route("/", get(|| async { "Hello" }));
/// let app = FaviconLayer::new(favicon).layer(router);
///
/// let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
/// axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FaviconLayer {
    favicon: Arc<Favicon>,
}

impl FaviconLayer {
    pub fn new(favicon: Favicon) -> Self {
        FaviconLayer {
            favicon: Arc::new(favicon),
        }
    }
}

impl<S> Layer<S> for FaviconLayer {
    type Service = FaviconService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        FaviconService {
            inner,
            favicon: self.favicon.clone(),
        }
    }
}

/// Service created by [`FaviconLayer`].
///
/// Always ready. Readiness of the inner service is only awaited for requests passed through to it,
/// so answering the favicon never holds on to capacity of the inner service (e.g. a concurrency
/// limit permit).
#[derive(Debug, Clone)]
pub struct FaviconService<S> {
    inner: S,
    favicon: Arc<Favicon>,
}

impl<S, B> Service<Request<B>> for FaviconService<S>
where
    S: Service<Request<B>, Response = Response<Body>> + Clone,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = Either<Ready<Result<Response<Body>, S::Error>>, Oneshot<S, Request<B>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        match self.favicon.respond(&request) {
            Some(response) => Either::Left(ready(Ok(response))),
            None => Either::Right(self.inner.clone().oneshot(request)),
        }
    }
}
