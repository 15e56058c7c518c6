use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::LineItem;

pub struct GetItemsParams {
    pub list_id: i64,
}

#[async_trait]
pub trait GetItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetItemsParams) -> Result<Vec<LineItem>, ShoppingListError>;
}
