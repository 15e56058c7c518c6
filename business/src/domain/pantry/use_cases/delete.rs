use async_trait::async_trait;

use crate::domain::pantry::errors::PantryError;
use crate::domain::shared::value_objects::UserId;

pub struct DeletePantryEntryParams {
    pub id: i64,
    pub owner: UserId,
}

#[async_trait]
pub trait DeletePantryEntryUseCase: Send + Sync {
    async fn execute(&self, params: DeletePantryEntryParams) -> Result<(), PantryError>;
}
