use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::pantry::errors::PantryError;
use crate::domain::pantry::model::PantryEntry;
use crate::domain::pantry::repository::PantryRepository;
use crate::domain::pantry::use_cases::update_quantity::{
    UpdatePantryQuantityParams, UpdatePantryQuantityUseCase,
};

pub struct UpdatePantryQuantityUseCaseImpl {
    pub repository: Arc<dyn PantryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdatePantryQuantityUseCase for UpdatePantryQuantityUseCaseImpl {
    async fn execute(
        &self,
        params: UpdatePantryQuantityParams,
    ) -> Result<PantryEntry, PantryError> {
        self.logger
            .info(&format!("Updating pantry entry: {}", params.id));

        let mut entry = self
            .repository
            .get_by_id(params.id, &params.owner)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PantryError::NotFound,
                other => PantryError::Repository(other),
            })?;

        self.repository
            .update_quantity(entry.id, params.quantity)
            .await?;
        entry.quantity = params.quantity;

        self.logger
            .info(&format!("Pantry entry updated: {}", entry.id));
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pantry::model::NewPantryEntry;
    use crate::domain::shared::value_objects::{Quantity, UserId};
    use mockall::mock;

    mock! {
        pub PantryRepo {}

        #[async_trait]
        impl PantryRepository for PantryRepo {
            async fn get_all(&self, owner: &UserId) -> Result<Vec<PantryEntry>, RepositoryError>;
            async fn get_by_id(&self, id: i64, owner: &UserId) -> Result<PantryEntry, RepositoryError>;
            async fn find_by_product(&self, owner: &UserId, product_id: i64) -> Result<Option<PantryEntry>, RepositoryError>;
            async fn insert(&self, entry: &NewPantryEntry) -> Result<PantryEntry, RepositoryError>;
            async fn update_quantity(&self, id: i64, quantity: Quantity) -> Result<(), RepositoryError>;
            async fn delete(&self, id: i64, owner: &UserId) -> Result<(), RepositoryError>;
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

    fn test_user_id() -> UserId {
        UserId::new("test-user-id")
    }

    #[tokio::test]
    async fn should_replace_quantity() {
        let mut repo = MockPantryRepo::new();
        repo.expect_get_by_id().returning(|id, owner| {
            Ok(PantryEntry::from_repository(
                id,
                owner.clone(),
                7,
                Quantity::from_repository(700.0),
            ))
        });
        repo.expect_update_quantity()
            .withf(|id, quantity| *id == 3 && quantity.value() == 250.0)
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = UpdatePantryQuantityUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdatePantryQuantityParams {
                id: 3,
                owner: test_user_id(),
                quantity: Quantity::new(250.0).unwrap(),
            })
            .await;

        assert_eq!(result.unwrap().quantity.value(), 250.0);
    }

    #[tokio::test]
    async fn should_return_not_found_for_foreign_or_missing_entry() {
        let mut repo = MockPantryRepo::new();
        repo.expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdatePantryQuantityUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdatePantryQuantityParams {
                id: 3,
                owner: test_user_id(),
                quantity: Quantity::new(1.0).unwrap(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), PantryError::NotFound));
    }
}
