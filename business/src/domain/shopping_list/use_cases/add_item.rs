use async_trait::async_trait;

use crate::domain::shared::value_objects::Quantity;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::LineItem;

pub struct AddItemParams {
    pub list_id: i64,
    pub product_id: i64,
    pub quantity: Quantity,
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<LineItem, ShoppingListError>;
}
