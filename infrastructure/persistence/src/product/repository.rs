use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::gateway::{Collection, DataGateway, Direction, Filter, Select};
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::{COLUMNS, ProductEntity};
use crate::rows::from_rows;

pub struct GatewayProductRepository {
    gateway: Arc<dyn DataGateway>,
}

impl GatewayProductRepository {
    pub fn new(gateway: Arc<dyn DataGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ProductRepository for GatewayProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let rows = self
            .gateway
            .select(
                Collection::Product,
                &Select::columns(COLUMNS).filter(Filter::eq("id", id)).limit(1),
            )
            .await?;

        let entities: Vec<ProductEntity> = from_rows(rows)?;
        Ok(entities.into_iter().next().map(ProductEntity::into_domain))
    }

    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = self
            .gateway
            .select(
                Collection::Product,
                &Select::columns(COLUMNS)
                    .filter(Filter::one_of("id", ids.iter().copied()))
                    .order_by("id", Direction::Ascending),
            )
            .await?;

        let entities: Vec<ProductEntity> = from_rows(rows)?;
        Ok(entities.into_iter().map(ProductEntity::into_domain).collect())
    }
}
