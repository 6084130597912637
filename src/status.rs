//! HTTP status codes as a typed enum.
//!
//! Only the codes the service actually answers with are listed. Use
//! [`Status`] with `Response::builder().status()` or pair it with a message:
//!
//! ```rust
//! use anekazoo::{IntoResponse, Response, Status};
//!
//! Response::builder()
//!     .status(Status::Conflict)
//!     .text("Exact match already exists");
//! (Status::NotFound, "Animal not found").into_response();
//! ```

/// Status codes produced by the animal service.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                  // 200
    Created,             // 201

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,          // 400
    NotFound,            // 404
    MethodNotAllowed,    // 405
    Conflict,            // 409

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError, // 500
    ServiceUnavailable,  // 503
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                  => 200,
            Status::Created             => 201,
            Status::BadRequest          => 400,
            Status::NotFound            => 404,
            Status::MethodNotAllowed    => 405,
            Status::Conflict            => 409,
            Status::InternalServerError => 500,
            Status::ServiceUnavailable  => 503,
        }
    }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> http::StatusCode {
        // Every variant maps to a registered code.
        http::StatusCode::from_u16(s.into()).unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR)
    }
}
