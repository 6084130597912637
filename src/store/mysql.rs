use async_trait::async_trait;
use sqlx::{Connection, MySqlPool};

use super::{Animal, AnimalId, AnimalStore, StoreError};

/// [`AnimalStore`] over a shared MySQL connection pool.
#[derive(Clone, Debug)]
pub struct MySqlAnimalStore {
    pool: MySqlPool,
}

impl MySqlAnimalStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl AnimalStore for MySqlAnimalStore {
    async fn find_id_by_identity(
        &self,
        name: &str,
        class: &str,
        legs: i32,
    ) -> Result<Option<AnimalId>, StoreError> {
        let id = sqlx::query_scalar::<_, AnimalId>(
            "SELECT id FROM animal WHERE name = ? AND class = ? AND legs = ? LIMIT 1",
        )
        .bind(name)
        .bind(class)
        .bind(legs)
        .fetch_optional(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find_id_by_id(&self, id: AnimalId) -> Result<Option<AnimalId>, StoreError> {
        let id = sqlx::query_scalar::<_, AnimalId>("SELECT id FROM animal WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(id)
    }

    async fn get_by_id(&self, id: AnimalId) -> Result<Option<Animal>, StoreError> {
        let row = sqlx::query_as::<_, (String, String, i32)>(
            "SELECT name, class, legs FROM animal WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(name, class, legs)| Animal { id, name, class, legs }))
    }

    async fn list_all(&self) -> Result<Vec<Animal>, StoreError> {
        let animals = sqlx::query_as::<_, Animal>("SELECT id, name, class, legs FROM animal")
            .fetch_all(&self.pool)
            .await?;
        Ok(animals)
    }

    async fn insert(&self, name: &str, class: &str, legs: i32) -> Result<AnimalId, StoreError> {
        let done = sqlx::query("INSERT INTO animal (name, class, legs) VALUES (?, ?, ?)")
            .bind(name)
            .bind(class)
            .bind(legs)
            .execute(&self.pool)
            .await?;
        Ok(done.last_insert_id())
    }

    async fn update(&self, id: AnimalId, name: &str, class: &str, legs: i32) -> Result<(), StoreError> {
        sqlx::query("UPDATE animal SET name = ?, class = ?, legs = ? WHERE id = ?")
            .bind(name)
            .bind(class)
            .bind(legs)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: AnimalId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM animal WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }
}
