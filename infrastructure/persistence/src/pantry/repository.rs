use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use business::domain::errors::RepositoryError;
use business::domain::gateway::{Collection, DataGateway, Direction, Filter, Row, Select};
use business::domain::pantry::model::{NewPantryEntry, PantryEntry};
use business::domain::pantry::repository::PantryRepository;
use business::domain::shared::value_objects::{Quantity, UserId};

use super::entity::{COLUMNS, NewPantryEntity, PantryEntity};
use crate::rows::{from_row, from_rows, to_row};

pub struct GatewayPantryRepository {
    gateway: Arc<dyn DataGateway>,
}

impl GatewayPantryRepository {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }

    async fn fetch(&self, query: Select) -> Result<Vec<PantryEntry>, RepositoryError> {
        let rows = self.gateway.select(Collection::Pantry, &query).await?;
        let entities: Vec<PantryEntity> = from_rows(rows)?;
        entities.into_iter().map(PantryEntity::into_domain).collect()
    }
}

fn owned_by(owner: &UserId) -> Filter {
    Filter::eq("owner_id", owner.as_str())
}

#[async_trait]
impl PantryRepository for GatewayPantryRepository {
    async fn get_all(&self, owner: &UserId) -> Result<Vec<PantryEntry>, RepositoryError> {
        self.fetch(
            Select::columns(COLUMNS)
                .filter(owned_by(owner))
                .order_by("product_id", Direction::Ascending),
        )
        .await
    }

    async fn get_by_id(&self, id: i64, owner: &UserId) -> Result<PantryEntry, RepositoryError> {
        self.fetch(
            Select::columns(COLUMNS)
                .filter(Filter::eq("id", id))
                .filter(owned_by(owner))
                .limit(1),
        )
        .await?
        .into_iter()
        .next()
        .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_product(
        &self,
        owner: &UserId,
        product_id: i64,
    ) -> Result<Option<PantryEntry>, RepositoryError> {
        let entries = self
            .fetch(
                Select::columns(COLUMNS)
                    .filter(owned_by(owner))
                    .filter(Filter::eq("product_id", product_id))
                    .order_by("id", Direction::Ascending)
                    .limit(1),
            )
            .await?;
        Ok(entries.into_iter().next())
    }

    async fn insert(&self, entry: &NewPantryEntry) -> Result<PantryEntry, RepositoryError> {
        let row = to_row(&NewPantryEntity::from(entry))?;
        let stored = self
            .gateway
            .insert(Collection::Pantry, &[row])
            .await?
            .into_iter()
            .next()
            .ok_or(RepositoryError::Persistence)?;

        let entity: PantryEntity = from_row(stored)?;
        entity.into_domain()
    }

    async fn update_quantity(&self, id: i64, quantity: Quantity) -> Result<(), RepositoryError> {
        let mut changes = Row::new();
        changes.insert("quantity".to_string(), Value::from(quantity.value()));

        let affected = self
            .gateway
            .update(Collection::Pantry, &changes, &[Filter::eq("id", id)])
            .await?;
        if affected == 0 {
            return Err(RepositoryError::not_found());
        }
        Ok(())
    }

    async fn delete(&self, id: i64, owner: &UserId) -> Result<(), RepositoryError> {
        let affected = self
            .gateway
            .delete(Collection::Pantry, &[Filter::eq("id", id), owned_by(owner)])
            .await?;
        if affected == 0 {
            return Err(RepositoryError::not_found());
        }
        Ok(())
    }
}
