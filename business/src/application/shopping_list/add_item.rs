use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{LineItem, NewLineItem};
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::add_item::{AddItemParams, AddItemUseCase};

pub struct AddItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<LineItem, ShoppingListError> {
        self.logger.info(&format!(
            "Adding product {} to list {}",
            params.product_id, params.list_id
        ));

        if self
            .product_repository
            .find_by_id(params.product_id)
            .await?
            .is_none()
        {
            return Err(ShoppingListError::ProductNotFound);
        }

        // Rows for a product already on the list are kept apart; reads merge them.
        let item = self
            .repository
            .add(&NewLineItem::new(
                params.list_id,
                params.product_id,
                params.quantity,
            ))
            .await?;

        self.logger.info(&format!("Line item created: {}", item.id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::Quantity;
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

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
            async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    fn known_product() -> MockProductRepo {
        let mut products = MockProductRepo::new();
        products.expect_find_by_id().returning(|id| {
            Ok(Some(Product::from_repository(id, "Rice".to_string(), Some(2))))
        });
        products
    }

    #[tokio::test]
    async fn should_add_item_when_product_exists() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_add()
            .withf(|item| item.product_id == 7 && !item.is_bought && item.quantity.value() == 2.5)
            .returning(|item| {
                Ok(line_item(
                    42,
                    item.product_id,
                    "Rice",
                    item.quantity.value(),
                    false,
                ))
            });

        let use_case = AddItemUseCaseImpl {
            repository: Arc::new(repo),
            product_repository: Arc::new(known_product()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddItemParams {
                list_id: 1,
                product_id: 7,
                quantity: Quantity::parse("2,5").unwrap(),
            })
            .await;

        let item = result.unwrap();
        assert_eq!(item.id, 42);
        assert_eq!(item.product_name, "Rice");
    }

    #[tokio::test]
    async fn should_keep_duplicate_rows_for_same_product() {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_add()
            .times(2)
            .returning(|item| Ok(line_item(1, item.product_id, "Rice", 1.0, false)));

        let use_case = AddItemUseCaseImpl {
            repository: Arc::new(repo),
            product_repository: Arc::new(known_product()),
            logger: mock_logger(),
        };

        for _ in 0..2 {
            let result = use_case
                .execute(AddItemParams {
                    list_id: 1,
                    product_id: 7,
                    quantity: Quantity::new(1.0).unwrap(),
                })
                .await;
            assert!(result.is_ok());
        }
    }

    #[tokio::test]
    async fn should_reject_unknown_product() {
        let mut products = MockProductRepo::new();
        products.expect_find_by_id().returning(|_| Ok(None));

        let use_case = AddItemUseCaseImpl {
            repository: Arc::new(MockShoppingListRepo::new()),
            product_repository: Arc::new(products),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddItemParams {
                list_id: 1,
                product_id: 99,
                quantity: Quantity::new(1.0).unwrap(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::ProductNotFound
        ));
    }
}
