//! `/animal` collection handler.
//!
//! | Method | Behaviour |
//! |--------|-----------|
//! | GET    | list every animal, 404 when there are none |
//! | POST   | create, 409 on an exact `(name, class, legs)` match |
//! | PUT    | update by id, otherwise insert under a fresh id |
//! | DELETE | delete by id, 404 when absent |
//!
//! The existence checks are separate round-trips from the writes that
//! follow them, so concurrent requests can interleave between the two.

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::{debug, error};

use super::AnimalPayload;
use crate::method::Method;
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::status::Status;
use crate::store::AnimalStore;

/// Dispatches a request on `/animal` by method.
pub async fn handle(store: Arc<dyn AnimalStore>, req: Request) -> Response {
    match req.method() {
        Method::Get    => list(store.as_ref()).await,
        Method::Post   => create(store.as_ref(), req.body()).await,
        Method::Put    => upsert(store.as_ref(), req.body()).await,
        Method::Delete => remove(store.as_ref(), req.body()).await,
        _              => (Status::MethodNotAllowed, "Method not allowed").into_response(),
    }
}

async fn list(store: &dyn AnimalStore) -> Response {
    debug!("listing animals");
    let animals = match store.list_all().await {
        Ok(animals) => animals,
        Err(e) => {
            error!("list animals failed: {e}");
            return (Status::InternalServerError, "Error retrieving animals").into_response();
        }
    };

    if animals.is_empty() {
        return (Status::NotFound, "No animals found").into_response();
    }

    let mut body = String::new();
    for a in &animals {
        let _ = writeln!(body, "ID: {}, Name: {}, Class: {}, Legs: {}", a.id, a.name, a.class, a.legs);
    }
    Response::text(body)
}

async fn create(store: &dyn AnimalStore, body: &[u8]) -> Response {
    let Ok(animal) = AnimalPayload::from_loose(body) else {
        return (Status::BadRequest, "Error parsing JSON").into_response();
    };
    debug!(name = %animal.name, class = %animal.class, legs = animal.legs, "creating animal");

    match store.find_id_by_identity(&animal.name, &animal.class, animal.legs).await {
        Ok(Some(_)) => return (Status::Conflict, "Exact match already exists").into_response(),
        Ok(None) => {}
        Err(e) => {
            error!("duplicate check failed: {e}");
            return (Status::InternalServerError, "Error checking for existing animal").into_response();
        }
    }

    if let Err(e) = store.insert(&animal.name, &animal.class, animal.legs).await {
        error!("insert failed: {e}");
        return (Status::InternalServerError, "Error inserting animal into database").into_response();
    }

    Response::builder().status(Status::Created).text(format!(
        "Animal {} of class {} with {} legs added successfully!",
        animal.name, animal.class, animal.legs
    ))
}

async fn upsert(store: &dyn AnimalStore, body: &[u8]) -> Response {
    let Ok(animal) = AnimalPayload::from_strict(body) else {
        return (Status::BadRequest, "Error parsing JSON").into_response();
    };
    debug!(id = animal.id, "upserting animal");

    let existing = match animal.stored_id() {
        None => None,
        Some(id) => match store.find_id_by_id(id).await {
            Ok(found) => found,
            Err(e) => {
                error!(id, "existence check failed: {e}");
                return (Status::InternalServerError, "Error checking for existing animal").into_response();
            }
        },
    };

    if let Some(id) = existing {
        if let Err(e) = store.update(id, &animal.name, &animal.class, animal.legs).await {
            error!(id = animal.id, "update failed: {e}");
            return (Status::InternalServerError, "Error updating animal in database").into_response();
        }
        return Response::text(format!("Update on {} (ID: {}) succeeded!", animal.name, animal.id));
    }

    // The supplied id is only used for the lookup; the store assigns a new one.
    if let Err(e) = store.insert(&animal.name, &animal.class, animal.legs).await {
        error!("insert failed: {e}");
        return (Status::InternalServerError, "Error inserting animal into database").into_response();
    }
    Response::text(format!("Data with {} doesnt exist, added as new data instead", animal.id))
}

async fn remove(store: &dyn AnimalStore, body: &[u8]) -> Response {
    let Ok(payload) = AnimalPayload::from_strict(body) else {
        return (Status::BadRequest, "Error parsing JSON").into_response();
    };
    let id = payload.id;
    debug!(id, "deleting animal");

    let existing = match payload.stored_id() {
        Some(stored) => store.find_id_by_id(stored).await,
        None => Ok(None),
    };
    let stored = match existing {
        Ok(Some(stored)) => stored,
        Ok(None) => {
            return (Status::NotFound, format!("Animal with ID {id} does not exist")).into_response();
        }
        Err(e) => {
            error!(id, "existence check failed: {e}");
            return (Status::InternalServerError, "Error checking for existing animal").into_response();
        }
    };

    if let Err(e) = store.delete(stored).await {
        error!(id, "delete failed: {e}");
        return (Status::InternalServerError, "Error deleting animal from database").into_response();
    }
    Response::text(format!("Animal with ID {id} successfully deleted."))
}
