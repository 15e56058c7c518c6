use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{Quantity, UserId};

use super::model::{NewPantryEntry, PantryEntry};

#[async_trait]
pub trait PantryRepository: Send + Sync {
    async fn get_all(&self, owner: &UserId) -> Result<Vec<PantryEntry>, RepositoryError>;
    async fn get_by_id(&self, id: i64, owner: &UserId) -> Result<PantryEntry, RepositoryError>;
    async fn find_by_product(
        &self,
        owner: &UserId,
        product_id: i64,
    ) -> Result<Option<PantryEntry>, RepositoryError>;
    async fn insert(&self, entry: &NewPantryEntry) -> Result<PantryEntry, RepositoryError>;
    async fn update_quantity(&self, id: i64, quantity: Quantity) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64, owner: &UserId) -> Result<(), RepositoryError>;
}
