use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pantry::model::NewPantryEntry;
use crate::domain::pantry::repository::PantryRepository;
use crate::domain::shopping_list::aggregator::sum_quantities_by_product;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shared::value_objects::Quantity;
use crate::domain::shopping_list::list_lock::{ListLocks, OwnerLocks};
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::transfer_bought::{
    TransferBoughtParams, TransferBoughtUseCase, TransferOutcome,
};

/// Folds the bought rows of a list into the owner's pantry, then removes them.
///
/// Runs for the same list are serialized through `list_locks`, and pantry writes for
/// the same owner through `owner_locks`, always in that order. Every new pantry
/// quantity is computed before the first write. Pantry writes and row deletion are
/// not atomic: if deletion fails after the pantry was updated, the rows stay on the
/// list and a later run adds them again.
pub struct TransferBoughtUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub pantry_repository: Arc<dyn PantryRepository>,
    pub list_locks: Arc<ListLocks>,
    pub owner_locks: Arc<OwnerLocks>,
    pub logger: Arc<dyn Logger>,
}

enum PantryWrite {
    Update { entry_id: i64, quantity: Quantity },
    Insert(NewPantryEntry),
}

#[async_trait]
impl TransferBoughtUseCase for TransferBoughtUseCaseImpl {
    async fn execute(
        &self,
        params: TransferBoughtParams,
    ) -> Result<TransferOutcome, ShoppingListError> {
        let _list_guard = self.list_locks.acquire(&params.list_id).await;
        self.logger.info(&format!(
            "Transferring bought items of list {} to pantry",
            params.list_id
        ));

        let bought = self.repository.get_bought_items(params.list_id).await?;
        if bought.is_empty() {
            self.logger.info(&format!(
                "No bought items in list {}, nothing to transfer",
                params.list_id
            ));
            return Ok(TransferOutcome::NothingToTransfer);
        }

        let Some(owner) = params.owner else {
            self.logger.warn(&format!(
                "No owner resolved for list {}, skipping transfer",
                params.list_id
            ));
            return Ok(TransferOutcome::OwnerUnresolved);
        };

        // Captured before any write so rows added meanwhile are left alone.
        let row_ids: Vec<i64> = bought.iter().map(|item| item.id).collect();
        let totals = sum_quantities_by_product(&bought).inspect_err(|e| {
            self.logger.warn(&format!(
                "Bought totals of list {} cannot be represented: {}",
                params.list_id, e
            ))
        })?;

        let _owner_guard = self.owner_locks.acquire(&owner).await;

        let mut writes = Vec::with_capacity(totals.len());
        for (&product_id, &total) in &totals {
            let write = match self
                .pantry_repository
                .find_by_product(&owner, product_id)
                .await?
            {
                Some(entry) => PantryWrite::Update {
                    entry_id: entry.id,
                    quantity: entry.quantity.checked_add(total)?,
                },
                None => PantryWrite::Insert(NewPantryEntry {
                    owner_id: owner.clone(),
                    product_id,
                    quantity: total,
                }),
            };
            writes.push(write);
        }

        for write in writes {
            match write {
                PantryWrite::Update { entry_id, quantity } => {
                    self.pantry_repository
                        .update_quantity(entry_id, quantity)
                        .await?;
                    self.logger.debug(&format!(
                        "Pantry entry {} now holds {}",
                        entry_id, quantity
                    ));
                }
                PantryWrite::Insert(entry) => {
                    let created = self.pantry_repository.insert(&entry).await?;
                    self.logger.debug(&format!(
                        "Pantry entry {} created for product {} with {}",
                        created.id, entry.product_id, entry.quantity
                    ));
                }
            }
        }

        let removed_rows = self
            .repository
            .delete_many(&row_ids)
            .await
            .inspect_err(|e| {
                self.logger.error(&format!(
                    "Pantry updated but bought rows of list {} were not removed: {}",
                    params.list_id, e
                ))
            })?;

        self.logger.info(&format!(
            "Transferred {} products from list {} ({} rows removed)",
            totals.len(),
            params.list_id,
            removed_rows
        ));
        Ok(TransferOutcome::Transferred {
            products: totals.len(),
            removed_rows,
        })
    }
}
