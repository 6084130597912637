//! `/animal/{id}` item handler. Read-only: GET and HEAD.
//!
//! Every path under `/animal/` lands here; the id is the segment after the
//! last `/`, so `/animal/1/2` looks up animal 2.

use std::sync::Arc;

use tracing::{debug, error};

use crate::method::Method;
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::status::Status;
use crate::store::{AnimalId, AnimalStore};

pub async fn handle(store: Arc<dyn AnimalStore>, req: Request) -> Response {
    match req.method() {
        Method::Get | Method::Head => {}
        Method::Post => return not_allowed("POST method not allowed on this endpoint"),
        Method::Put => return not_allowed("PUT method not allowed on this endpoint"),
        Method::Delete => return not_allowed("DELETE method not allowed on this endpoint"),
        _ => return not_allowed("Method not allowed"),
    }

    // `/animal/` and `/animal/1/` leave an empty segment, which fails to parse.
    let segment = req.path().rsplit('/').next().unwrap_or_default();
    let Ok(id) = segment.parse::<AnimalId>() else {
        return (Status::BadRequest, "Invalid animal ID").into_response();
    };
    debug!(id, "looking up animal");

    match store.get_by_id(id).await {
        Ok(Some(a)) => Response::text(format!(
            "Animal found: Name: {}, Class: {}, Legs: {}",
            a.name, a.class, a.legs
        )),
        Ok(None) => (Status::NotFound, "Animal not found").into_response(),
        Err(e) => {
            error!(id, "lookup failed: {e}");
            (Status::InternalServerError, "Error retrieving animal").into_response()
        }
    }
}

fn not_allowed(message: &'static str) -> Response {
    (Status::MethodNotAllowed, message).into_response()
}
