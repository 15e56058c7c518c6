use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Quantity;

use super::model::{LineItem, NewLineItem};

#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    /// Raw rows of a list, ordered by row id.
    async fn get_items(&self, list_id: i64) -> Result<Vec<LineItem>, RepositoryError>;
    async fn get_bought_items(&self, list_id: i64) -> Result<Vec<LineItem>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<LineItem, RepositoryError>;
    async fn add(&self, item: &NewLineItem) -> Result<LineItem, RepositoryError>;
    async fn update_quantity(&self, id: i64, quantity: Quantity) -> Result<(), RepositoryError>;
    async fn set_bought(&self, id: i64, is_bought: bool) -> Result<(), RepositoryError>;
    /// Sets the bought flag on every row of a product in a list, returns the row count.
    async fn set_product_bought(
        &self,
        list_id: i64,
        product_id: i64,
        is_bought: bool,
    ) -> Result<u64, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn delete_many(&self, ids: &[i64]) -> Result<u64, RepositoryError>;
}
