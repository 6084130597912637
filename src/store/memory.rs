use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Animal, AnimalId, AnimalStore, StoreError};

/// In-process [`AnimalStore`].
///
/// Ids start at 1, grow monotonically and are never reused, matching an
/// `AUTO_INCREMENT` column. Rows list in id order.
#[derive(Debug, Default)]
pub struct MemoryAnimalStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<AnimalId, Animal>,
    last_id: AnimalId,
}

impl MemoryAnimalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AnimalStore for MemoryAnimalStore {
    async fn find_id_by_identity(
        &self,
        name: &str,
        class: &str,
        legs: i32,
    ) -> Result<Option<AnimalId>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values()
            .find(|a| a.name == name && a.class == class && a.legs == legs)
            .map(|a| a.id))
    }

    async fn find_id_by_id(&self, id: AnimalId) -> Result<Option<AnimalId>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).map(|a| a.id))
    }

    async fn get_by_id(&self, id: AnimalId) -> Result<Option<Animal>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Animal>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn insert(&self, name: &str, class: &str, legs: i32) -> Result<AnimalId, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.insert(id, Animal { id, name: name.to_owned(), class: class.to_owned(), legs });
        Ok(id)
    }

    async fn update(&self, id: AnimalId, name: &str, class: &str, legs: i32) -> Result<(), StoreError> {
        if let Some(row) = self.inner.write().await.rows.get_mut(&id) {
            row.name = name.to_owned();
            row.class = class.to_owned();
            row.legs = legs;
        }
        Ok(())
    }

    async fn delete(&self, id: AnimalId) -> Result<(), StoreError> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
