//! Persistence for the `animal` row.
//!
//! [`AnimalStore`] is the seam between the HTTP handlers and the database.
//! Every operation either succeeds or fails with a [`StoreError`]; a missing
//! row is `None`, never an error.
//!
//! | Type | Backing |
//! |------|---------|
//! | [`MySqlAnimalStore`] | `sqlx` MySQL pool, bound parameters only |
//! | [`MemoryAnimalStore`] | process-local map, for tests and database-less runs |

mod memory;
mod mysql;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryAnimalStore;
pub use mysql::MySqlAnimalStore;

/// Server-assigned row id. `0` is never stored and means "unknown".
pub type AnimalId = u64;

/// One persisted animal.
#[derive(Clone, Debug, Eq, PartialEq, sqlx::FromRow)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub class: String,
    pub legs: i32,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait AnimalStore: Send + Sync {
    /// Id of the first row whose `(name, class, legs)` matches exactly.
    async fn find_id_by_identity(
        &self,
        name: &str,
        class: &str,
        legs: i32,
    ) -> Result<Option<AnimalId>, StoreError>;

    async fn find_id_by_id(&self, id: AnimalId) -> Result<Option<AnimalId>, StoreError>;

    /// The row with `id`. The returned `Animal` carries the requested id.
    async fn get_by_id(&self, id: AnimalId) -> Result<Option<Animal>, StoreError>;

    /// Every row, in whatever order the backend yields them.
    async fn list_all(&self) -> Result<Vec<Animal>, StoreError>;

    /// Inserts a row and returns the id the store assigned to it.
    async fn insert(&self, name: &str, class: &str, legs: i32) -> Result<AnimalId, StoreError>;

    async fn update(&self, id: AnimalId, name: &str, class: &str, legs: i32) -> Result<(), StoreError>;

    async fn delete(&self, id: AnimalId) -> Result<(), StoreError>;

    /// Round-trip to the backend, used by the readiness check.
    async fn ping(&self) -> Result<(), StoreError>;
}
