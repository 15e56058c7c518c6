use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pantry::errors::PantryError;
use crate::domain::pantry::model::PantryEntry;
use crate::domain::pantry::repository::PantryRepository;
use crate::domain::pantry::use_cases::get_all::{GetPantryParams, GetPantryUseCase};

pub struct GetPantryUseCaseImpl {
    pub repository: Arc<dyn PantryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPantryUseCase for GetPantryUseCaseImpl {
    async fn execute(&self, params: GetPantryParams) -> Result<Vec<PantryEntry>, PantryError> {
        self.logger.info("Getting pantry entries");
        let entries = self.repository.get_all(&params.owner).await?;
        self.logger
            .info(&format!("Retrieved {} pantry entries", entries.len()));
        Ok(entries)
    }
}
