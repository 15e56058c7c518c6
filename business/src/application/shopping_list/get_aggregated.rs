use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::aggregator::{AggregatedListItem, aggregate};
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_aggregated::{
    GetAggregatedItemsParams, GetAggregatedItemsUseCase,
};

pub struct GetAggregatedItemsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAggregatedItemsUseCase for GetAggregatedItemsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAggregatedItemsParams,
    ) -> Result<Vec<AggregatedListItem>, ShoppingListError> {
        self.logger
            .info(&format!("Getting aggregated items of list {}", params.list_id));
        let items = self.repository.get_items(params.list_id).await?;
        let aggregated = aggregate(&items)?;
        self.logger.info(&format!(
            "Aggregated {} line items into {} entries",
            items.len(),
            aggregated.len()
        ));
        Ok(aggregated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::Quantity;
    use crate::domain::shopping_list::model::{LineItem, NewLineItem};
    use mockall::mock;

    mock! {
        pub ShoppingListRepo {}

        #[async_trait]
        impl ShoppingListRepository for ShoppingListRepo {
            async fn get_items(&self, list_id: i64) -> Result<Vec<LineItem>, RepositoryError>;
            async fn get_bought_items(&self, list_id: i64) -> Result<Vec<LineItem>, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<LineItem, RepositoryError>;
            async fn add(&self, item: &NewLineItem) -> Result<LineItem, RepositoryError>;
            async fn update_quantity(&self, id: i64, quantity: Quantity) -> Result<(), RepositoryError>;
            async fn set_bought(&self, id: i64, is_bought: bool) -> Result<(), RepositoryError>;
            async fn set_product_bought(&self, list_id: i64, product_id: i64, is_bought: bool) -> Result<u64, RepositoryError>;
            async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
            async fn delete_many(&self, ids: &[i64]) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn line_item(id: i64, product_id: i64, name: &str, quantity: f64, is_bought: bool) -> LineItem {
        LineItem::from_repository(
            id,
            1,
            product_id,
            name.to_string(),
            None,
            Quantity::from_repository(quantity),
            is_bought,
        )
    }

    #[tokio::test]
    async fn should_merge_duplicates_and_order_for_display() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_get_items().returning(|_| {
            Ok(vec![
                line_item(1, 7, "Rice", 300.0, true),
                line_item(2, 3, "Milk", 1.0, false),
                line_item(3, 7, "Rice", 400.0, true),
            ])
        });

        let use_case = GetAggregatedItemsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAggregatedItemsParams { list_id: 1 })
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].display_name, "Milk");
        assert!(!result[0].all_bought);
        assert_eq!(result[1].product_id, 7);
        assert_eq!(result[1].total_quantity.value(), 700.0);
        assert!(result[1].all_bought);
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_get_items()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = GetAggregatedItemsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAggregatedItemsParams { list_id: 1 })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::Repository(RepositoryError::Persistence)
        ));
    }
}
