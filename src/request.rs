//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;

use crate::method::Method;

/// An incoming HTTP request with its body already collected.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        path: String,
        body: Bytes,
        params: HashMap<String, String>,
    ) -> Self {
        Self { method, path, body, params }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Returns a named path parameter.
    ///
    /// For a route `/zoo/{section}`, `req.param("section")` on `/zoo/reptiles` returns `Some("reptiles")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
