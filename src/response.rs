//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Every payload this service emits is plain text, so a response is just a
//! status and a UTF-8 body.

use bytes::Bytes;
use http_body_util::Full;

use crate::status::Status;

pub(crate) const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing `text/plain` HTTP response.
///
/// ```rust
/// use anekazoo::{Response, Status};
///
/// Response::text("Welcome to the animal service");
/// Response::builder()
///     .status(Status::NotFound)
///     .text("Animal not found");
/// ```
pub struct Response {
    pub(crate) body: String,
    pub(crate) status: Status,
}

impl Response {
    /// `200 OK` with a plain-text body.
    pub fn text(body: impl Into<String>) -> Self {
        Self::builder().text(body)
    }

    /// Builder for responses with a status other than 200.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { status: Status::Ok }
    }

    pub fn status_code(&self) -> Status { self.status }
    pub fn body_text(&self) -> &str { &self.body }

    /// Converts into the hyper response written to the connection.
    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut inner = http::Response::new(Full::new(Bytes::from(self.body)));
        *inner.status_mut() = self.status.into();
        inner.headers_mut().insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(TEXT_PLAIN),
        );
        inner
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
pub struct ResponseBuilder {
    status: Status,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code;
        self
    }

    /// Terminate with a plain-text body.
    pub fn text(self, body: impl Into<String>) -> Response {
        Response { body: body.into(), status: self.status }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response { Response::text(self) }
}

impl IntoResponse for String {
    fn into_response(self) -> Response { Response::text(self) }
}

/// `(Status::Conflict, "message")` as a plain-text error body.
impl<T: Into<String>> IntoResponse for (Status, T) {
    fn into_response(self) -> Response {
        Response::builder().status(self.0).text(self.1)
    }
}
