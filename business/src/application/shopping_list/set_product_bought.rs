use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::set_product_bought::{
    SetProductBoughtParams, SetProductBoughtUseCase,
};

/// Toggles every row of one product in a list, as shown by the aggregated view.
pub struct SetProductBoughtUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetProductBoughtUseCase for SetProductBoughtUseCaseImpl {
    async fn execute(&self, params: SetProductBoughtParams) -> Result<u64, ShoppingListError> {
        self.logger.info(&format!(
            "Marking product {} in list {} as bought={}",
            params.product_id, params.list_id, params.is_bought
        ));

        let count = self
            .repository
            .set_product_bought(params.list_id, params.product_id, params.is_bought)
            .await?;

        if count == 0 {
            return Err(ShoppingListError::NotFound);
        }

        self.logger.info(&format!("Updated {} line items", count));
        Ok(count)
    }
}
