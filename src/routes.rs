//! Route table of the service.

use std::sync::Arc;

use crate::animal::{collection, item};
use crate::health;
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::store::AnimalStore;

pub const WELCOME: &str = "Welcome to the Animal API";

/// Builds the router for every endpoint, sharing `store` across handlers.
///
/// | Path | Methods |
/// |------|---------|
/// | `/` | any |
/// | `/animal` | GET, POST, PUT, DELETE |
/// | `/animal/…` | GET, HEAD; id is the last path segment |
/// | `/healthz`, `/readyz` | GET |
pub fn app(store: Arc<dyn AnimalStore>) -> Router {
    let collection_store = Arc::clone(&store);
    let item_store = Arc::clone(&store);
    let bare_item_store = Arc::clone(&store);

    Router::new()
        .on(Method::Get, "/healthz", health::liveness)
        .on(Method::Get, "/readyz", move |req| health::readiness(Arc::clone(&store), req))
        .any("/", root)
        .any("/animal", move |req| collection::handle(Arc::clone(&collection_store), req))
        .any("/animal/", move |req| item::handle(Arc::clone(&bare_item_store), req))
        .any("/animal/{*rest}", move |req| item::handle(Arc::clone(&item_store), req))
}

async fn root(_req: Request) -> Response {
    Response::text(WELCOME)
}
