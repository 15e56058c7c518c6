use async_trait::async_trait;

use crate::domain::shopping_list::aggregator::AggregatedListItem;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct GetAggregatedItemsParams {
    pub list_id: i64,
}

#[async_trait]
pub trait GetAggregatedItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAggregatedItemsParams,
    ) -> Result<Vec<AggregatedListItem>, ShoppingListError>;
}
