use async_trait::async_trait;

use crate::domain::shared::value_objects::Quantity;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::LineItem;

pub struct UpdateItemParams {
    pub id: i64,
    pub quantity: Option<Quantity>,
    pub is_bought: Option<bool>,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> Result<LineItem, ShoppingListError>;
}
