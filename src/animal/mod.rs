//! HTTP handlers for the `animal` resource.
//!
//! - [`collection`] serves `/animal`: list, create, upsert, delete.
//! - [`item`] serves `/animal/{id}`: lookup by id.
//!
//! Both answer in plain text. Store failures are logged and turned into a
//! generic 500; driver detail never reaches the client.

pub mod collection;
pub mod item;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::store::AnimalId;

/// Decoded request body of `/animal` mutations.
///
/// Recognised keys are `id`, `name`, `class` and `legs`; unknown keys are
/// ignored and missing ones default to empty or zero. `id` is signed so a
/// negative id decodes and simply matches no row.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct AnimalPayload {
    pub id: i64,
    pub name: String,
    pub class: String,
    pub legs: i32,
}

impl AnimalPayload {
    /// The id as a storable key. `0` and negative ids are never stored.
    pub fn stored_id(&self) -> Option<AnimalId> {
        AnimalId::try_from(self.id).ok().filter(|&id| id != 0)
    }

    /// Typed decoding used by PUT and DELETE: a key holding a value of the
    /// wrong type is an error.
    pub fn from_strict(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Lenient decoding used by POST. The body must be a JSON object (or
    /// `null`), but a field of the wrong type is treated as missing and a
    /// fractional `legs` is truncated toward zero. `id` is never read.
    pub fn from_loose(body: &[u8]) -> Result<Self, serde_json::Error> {
        let object: Option<Map<String, Value>> = serde_json::from_slice(body)?;
        let object = object.unwrap_or_default();
        let text = |key: &str| object.get(key).and_then(Value::as_str).unwrap_or_default().to_owned();

        Ok(Self {
            id: 0,
            name: text("name"),
            class: text("class"),
            legs: object.get("legs").and_then(Value::as_f64).map_or(0, |n| n as i32),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_ignores_wrong_types_and_id() {
        let payload = AnimalPayload::from_loose(br#"{"id":7,"name":"cat","class":3,"legs":4.9,"extra":true}"#)
            .expect("object");
        assert_eq!(payload, AnimalPayload { id: 0, name: "cat".into(), class: String::new(), legs: 4 });
    }

    #[test]
    fn loose_rejects_non_objects() {
        assert!(AnimalPayload::from_loose(b"[1,2]").is_err());
        assert!(AnimalPayload::from_loose(b"{not json").is_err());
        assert_eq!(AnimalPayload::from_loose(b"null").expect("null"), AnimalPayload::default());
    }

    #[test]
    fn strict_defaults_missing_keys() {
        let payload = AnimalPayload::from_strict(br#"{"id":12}"#).expect("object");
        assert_eq!(payload, AnimalPayload { id: 12, ..AnimalPayload::default() });
    }

    #[test]
    fn strict_rejects_wrong_types() {
        assert!(AnimalPayload::from_strict(br#"{"id":"12"}"#).is_err());
        assert!(AnimalPayload::from_strict(br#"{"legs":2.5}"#).is_err());
    }

    #[test]
    fn only_positive_ids_are_storable() {
        let id = |raw: &[u8]| AnimalPayload::from_strict(raw).expect("object").stored_id();
        assert_eq!(id(br#"{"id":-1}"#), None);
        assert_eq!(id(br#"{"id":0}"#), None);
        assert_eq!(id(br#"{"id":5}"#), Some(5));
    }
}
