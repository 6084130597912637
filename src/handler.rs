//! Route handlers and their boxed form.
//!
//! A [`Handler`] is anything callable with a [`Request`] that yields a future
//! of something [`IntoResponse`]. In this service that is mostly a closure
//! holding an `Arc<dyn AnimalStore>`:
//!
//! ```text
//! move |req| collection::handle(Arc::clone(&store), req)
//! ```
//!
//! The router cannot store closures of different types side by side, so
//! [`boxed`] folds each one into a single `Arc<dyn Fn>` whose future is
//! already mapped to [`Response`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// What the router stores per route.
pub(crate) type BoxedHandler = Arc<dyn Fn(Request) -> BoxFuture + Send + Sync + 'static>;

/// A callable route target.
pub trait Handler: Send + Sync + 'static {
    type Output: IntoResponse;
    type Future: Future<Output = Self::Output> + Send + 'static;

    fn call(&self, req: Request) -> Self::Future;
}

impl<F, Fut> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future + Send + 'static,
    Fut::Output: IntoResponse,
{
    type Output = Fut::Output;
    type Future = Fut;

    fn call(&self, req: Request) -> Fut {
        self(req)
    }
}

pub(crate) fn boxed<H: Handler>(handler: H) -> BoxedHandler {
    Arc::new(move |req| {
        let fut = handler.call(req);
        Box::pin(async move { fut.await.into_response() }) as BoxFuture
    })
}
