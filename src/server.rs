//! HTTP server and graceful shutdown.
//!
//! On SIGTERM or Ctrl-C the server:
//! 1. Stops calling `listener.accept()`, so no new connections are made.
//! 2. Lets every in-flight connection task run to completion.
//! 3. Returns from [`Server::serve`], which lets `main` exit with code 0.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::error::Error;
use crate::method::Method;
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::router::Router;
use crate::status::Status;

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
}

impl Server {
    /// Configures the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    pub fn bind(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Starts accepting connections and dispatching them through `router`.
    ///
    /// Returns only after a full graceful shutdown (SIGTERM or Ctrl-C,
    /// followed by all in-flight requests completing).
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        self.serve_with_shutdown(router, shutdown_signal()).await
    }

    /// Like [`serve`](Server::serve), but stops accepting once `signal`
    /// resolves.
    pub async fn serve_with_shutdown<S>(self, router: Router, signal: S) -> Result<(), Error>
    where
        S: Future<Output = ()>,
    {
        let listener = TcpListener::bind(self.addr).await?;
        let router = Arc::new(router);

        info!(addr = %self.addr, "anekazoo listening");

        let mut tasks = tokio::task::JoinSet::new();
        tokio::pin!(signal);

        loop {
            tokio::select! {
                // Checked first so a shutdown stops accepting immediately,
                // even if more connections are queued.
                biased;

                () = &mut signal => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            continue;
                        }
                    };

                    let router = Arc::clone(&router);
                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        // Called once per request on the connection.
                        let svc = service_fn(move |req| {
                            let router = Arc::clone(&router);
                            async move { dispatch(router, req).await }
                        });

                        if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                            .serve_connection(io, svc)
                            .await
                        {
                            error!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished tasks so the JoinSet does not grow unbounded.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        while tasks.join_next().await.is_some() {}

        info!("anekazoo stopped");
        Ok(())
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Reads one request off the wire, routes it and logs the outcome.
///
/// Every failure becomes a response, so hyper never sees an error.
async fn dispatch(
    router: Arc<Router>,
    req: hyper::Request<Incoming>,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let (parts, body) = req.into_parts();
    let path = parts.uri.path().to_owned();

    let method = Method::from_token(parts.method.as_str());

    let response = match body.collect().await {
        Ok(collected) => route(&router, method, path.clone(), collected.to_bytes()).await,
        Err(e) => {
            warn!(path = %path, "failed to read request body: {e}");
            (Status::BadRequest, "Error reading request body").into_response()
        }
    };

    info!(
        method = %parts.method,
        path = %path,
        status = u16::from(response.status_code()),
        elapsed_us = started.elapsed().as_micros() as u64,
        "request served",
    );

    Ok(response.into_inner())
}

/// Routes an already-read request. Unmatched paths answer 404.
pub(crate) async fn route(
    router: &Router,
    method: Method,
    path: String,
    body: Bytes,
) -> Response {
    match router.lookup(method, &path) {
        Some((handler, params)) => handler(Request::new(method, path, body, params)).await,
        None => (Status::NotFound, "404 page not found").into_response(),
    }
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on the first SIGTERM or SIGINT. On Windows only Ctrl-C is
/// available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => { stream.recv().await; }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c  => {}
        () = sigterm => {}
    }
}
