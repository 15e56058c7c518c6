use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct TransferBoughtParams {
    pub list_id: i64,
    /// Acting owner; `None` when no identity could be resolved.
    pub owner: Option<UserId>,
}

/// Result of moving bought items into the pantry. Every variant is a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The list had no bought rows; nothing was written.
    NothingToTransfer,
    /// No owner identity; nothing was written.
    OwnerUnresolved,
    Transferred { products: usize, removed_rows: u64 },
}

#[async_trait]
pub trait TransferBoughtUseCase: Send + Sync {
    async fn execute(
        &self,
        params: TransferBoughtParams,
    ) -> Result<TransferOutcome, ShoppingListError>;
}
