use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, RepositoryError>;
}
