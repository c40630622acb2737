//! Redirect middleware wrapping a fallback service.
//!
//! [`RedirectLayer`] turns any [`Resolver`] into a tower layer. The
//! produced service answers matched paths itself and forwards everything
//! else to the service it wraps, so the wrapped chain never sees a
//! request that resolved to a redirect. Stacked layers form a resolver
//! chain evaluated outermost first; the innermost service is the
//! terminal fallback.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, header};
use axum::response::{IntoResponse, Response};
use tower::{Layer, Service};
use tracing::debug;

use crate::resolver::{Action, REDIRECT_STATUS, Resolver};

/// Pairs a resolver with the fallback services it will wrap.
///
/// The resolver sits behind an [`Arc`], so one layer can wrap any
/// number of services and every clone resolves against the same data.
pub struct RedirectLayer<R> {
    resolver: Arc<R>,
}

impl<R> RedirectLayer<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}

impl<R> Clone for RedirectLayer<R> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
        }
    }
}

impl<R, S> Layer<S> for RedirectLayer<R> {
    type Service = RedirectService<R, S>;

    fn layer(&self, inner: S) -> Self::Service {
        RedirectService {
            resolver: self.resolver.clone(),
            inner,
        }
    }
}

/// A service that redirects resolved paths and delegates the rest.
#[derive(Clone)]
pub struct RedirectService<R, S> {
    resolver: Arc<R>,
    inner: S,
}

impl<R, S> Service<Request<Body>> for RedirectService<R, S>
where
    R: Resolver,
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        match self.resolver.resolve(req.uri().path()) {
            Action::Redirect { location } => {
                debug!(path = %req.uri().path(), location = %location, "redirecting");
                Box::pin(std::future::ready(Ok(redirect_response(&location))))
            }
            Action::Delegate => {
                // Swap in a clone and drive the service poll_ready saw.
                let clone = self.inner.clone();
                let mut inner = std::mem::replace(&mut self.inner, clone);
                Box::pin(async move { inner.call(req).await })
            }
        }
    }
}

/// Builds the `302 Found` response for a matched path.
fn redirect_response(location: &str) -> Response {
    (REDIRECT_STATUS, [(header::LOCATION, location)]).into_response()
}
