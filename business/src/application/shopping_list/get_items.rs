use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::LineItem;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_items::{GetItemsParams, GetItemsUseCase};

pub struct GetItemsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemsUseCase for GetItemsUseCaseImpl {
    async fn execute(&self, params: GetItemsParams) -> Result<Vec<LineItem>, ShoppingListError> {
        self.logger
            .info(&format!("Getting items of list {}", params.list_id));
        let items = self.repository.get_items(params.list_id).await?;
        self.logger
            .info(&format!("Retrieved {} line items", items.len()));
        Ok(items)
    }
}
