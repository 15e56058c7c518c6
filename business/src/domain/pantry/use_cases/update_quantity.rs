use async_trait::async_trait;

use crate::domain::pantry::errors::PantryError;
use crate::domain::pantry::model::PantryEntry;
use crate::domain::shared::value_objects::{Quantity, UserId};

pub struct UpdatePantryQuantityParams {
    pub id: i64,
    pub owner: UserId,
    pub quantity: Quantity,
}

#[async_trait]
pub trait UpdatePantryQuantityUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdatePantryQuantityParams,
    ) -> Result<PantryEntry, PantryError>;
}
