//! Radix-tree request router.
//!
//! One tree per HTTP method plus one method-agnostic tree. A method-specific
//! route wins over an `any` route registered on the same path.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{boxed, BoxedHandler, Handler};
use crate::method::Method;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Registrations return `self` so they chain.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    any: MatchitRouter<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), any: MatchitRouter::new() }
    }

    /// Register a handler for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, boxed(handler))
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    /// Register a handler that receives every method on `path`.
    ///
    /// The handler owns method dispatch, including any 405 answer.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with another `any` route.
    pub fn any(mut self, path: &str, handler: impl Handler) -> Self {
        self.any
            .insert(path, boxed(handler))
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let matched = self.routes
            .get(&method)
            .and_then(|tree| tree.at(path).ok())
            .or_else(|| self.any.at(path).ok())?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Request, Response};

    async fn ok(_req: Request) -> Response { Response::text("ok") }

    #[test]
    fn extracts_params() {
        let router = Router::new().any("/animal/{id}", ok);
        let (_, params) = router.lookup(Method::Get, "/animal/42").expect("route");
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn method_route_falls_back_to_any() {
        let router = Router::new()
            .on(Method::Get, "/healthz", ok)
            .any("/", ok);
        assert!(router.lookup(Method::Get, "/healthz").is_some());
        assert!(router.lookup(Method::Post, "/healthz").is_none());
        assert!(router.lookup(Method::Delete, "/").is_some());
    }

    #[test]
    fn static_and_catch_all_siblings() {
        let router = Router::new()
            .any("/animal", ok)
            .any("/animal/", ok)
            .any("/animal/{*rest}", ok);
        let (_, params) = router.lookup(Method::Get, "/animal/").expect("route");
        assert!(params.is_empty());
        let (_, params) = router.lookup(Method::Get, "/animal/1/2").expect("route");
        assert_eq!(params.get("rest").map(String::as_str), Some("1/2"));
        assert!(router.lookup(Method::Get, "/zoo").is_none());
    }
}
