use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;

pub struct DeleteItemParams {
    pub id: i64,
}

#[async_trait]
pub trait DeleteItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ShoppingListError>;
}
