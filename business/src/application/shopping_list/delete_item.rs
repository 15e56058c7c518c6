use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::delete_item::{DeleteItemParams, DeleteItemUseCase};

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ShoppingListError> {
        self.logger
            .info(&format!("Deleting line item: {}", params.id));

        // Verify it exists
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::NotFound,
                other => ShoppingListError::Repository(other),
            })?;

        self.repository.delete(params.id).await?;

        self.logger
            .info(&format!("Line item deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    async fn should_delete_existing_line_item() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(line_item(id, 7, "Rice", 1.0, false)));
        repo.expect_delete().times(1).returning(|_| Ok(()));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteItemParams { id: 4 }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteItemParams { id: 4 }).await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::NotFound));
    }
}
