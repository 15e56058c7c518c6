use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::pantry::errors::PantryError;
use crate::domain::pantry::repository::PantryRepository;
use crate::domain::pantry::use_cases::delete::{DeletePantryEntryParams, DeletePantryEntryUseCase};

pub struct DeletePantryEntryUseCaseImpl {
    pub repository: Arc<dyn PantryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeletePantryEntryUseCase for DeletePantryEntryUseCaseImpl {
    async fn execute(&self, params: DeletePantryEntryParams) -> Result<(), PantryError> {
        self.logger
            .info(&format!("Deleting pantry entry: {}", params.id));

        self.repository
            .get_by_id(params.id, &params.owner)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PantryError::NotFound,
                other => PantryError::Repository(other),
            })?;

        self.repository.delete(params.id, &params.owner).await?;

        self.logger
            .info(&format!("Pantry entry deleted: {}", params.id));
        Ok(())
    }
}
