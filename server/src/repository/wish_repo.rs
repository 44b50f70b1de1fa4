//! Wish Repository
//!
//! Wishes stored as one JSON array file.

use async_trait::async_trait;
use tracing::debug;
use wishlist_core::Wish;

use super::json_file::JsonFile;
use super::traits::Repository;
use crate::domain::{generate_wish_id, StoreError, StoreResult};

pub struct WishRepository {
    file: JsonFile,
}

impl WishRepository {
    pub fn new(file: JsonFile) -> Self {
        Self { file }
    }
}

#[async_trait]
impl Repository<Wish> for WishRepository {
    /// Append a wish, generating an id when it has none
    async fn create(&self, wish: &Wish) -> StoreResult<Wish> {
        let mut wish = wish.clone();
        if wish.id.is_empty() {
            wish.id = generate_wish_id(&wish.owner, &wish.title);
        }

        let _guard = self.file.lock().await;
        let mut wishes: Vec<Wish> = self.file.read().await?;
        wishes.push(wish.clone());
        self.file.write(&wishes).await?;

        debug!(id = %wish.id, path = %self.file.path().display(), "wish appended");
        Ok(wish)
    }

    async fn list(&self) -> StoreResult<Vec<Wish>> {
        let _guard = self.file.lock().await;
        self.file.read().await
    }

    async fn update(&self, wish: &Wish) -> StoreResult<Wish> {
        let _guard = self.file.lock().await;
        let mut wishes: Vec<Wish> = self.file.read().await?;

        let slot = wishes
            .iter_mut()
            .find(|stored| stored.id == wish.id)
            .ok_or(StoreError::NotFound)?;
        *slot = wish.clone();

        self.file.write(&wishes).await?;
        Ok(wish.clone())
    }

    async fn delete(&self, id: &String) -> StoreResult<()> {
        let _guard = self.file.lock().await;
        let mut wishes: Vec<Wish> = self.file.read().await?;

        let index = wishes
            .iter()
            .position(|wish| &wish.id == id)
            .ok_or(StoreError::NotFound)?;
        wishes.remove(index);

        self.file.write(&wishes).await
    }
}
