use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;

pub struct SetProductBoughtParams {
    pub list_id: i64,
    pub product_id: i64,
    pub is_bought: bool,
}

#[async_trait]
pub trait SetProductBoughtUseCase: Send + Sync {
    async fn execute(&self, params: SetProductBoughtParams) -> Result<u64, ShoppingListError>;
}
