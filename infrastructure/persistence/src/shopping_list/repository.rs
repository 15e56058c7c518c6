use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use business::domain::errors::RepositoryError;
use business::domain::gateway::{Collection, DataGateway, Direction, Filter, Row, Select};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::Quantity;
use business::domain::shopping_list::model::{LineItem, NewLineItem};
use business::domain::shopping_list::repository::ShoppingListRepository;

use super::entity::{COLUMNS, LineItemEntity, NewLineItemEntity};
use crate::rows::{from_row, from_rows, to_row};

/// Shopping list rows stored in the `product_on_list` collection, joined with the
/// product catalog for display names.
pub struct GatewayShoppingListRepository {
    gateway: Arc<dyn DataGateway>,
    products: Arc<dyn ProductRepository>,
}

impl GatewayShoppingListRepository {
    pub fn new(gateway: Arc<dyn DataGateway>, products: Arc<dyn ProductRepository>) -> Self {
        Self { gateway, products }
    }

    async fn fetch(&self, filters: Vec<Filter>) -> Result<Vec<LineItem>, RepositoryError> {
        let query = filters
            .into_iter()
            .fold(Select::columns(COLUMNS), Select::filter)
            .order_by("id", Direction::Ascending);
        let rows = self.gateway.select(Collection::ProductOnList, &query).await?;
        let entities: Vec<LineItemEntity> = from_rows(rows)?;
        self.join_products(entities).await
    }

    async fn join_products(
        &self,
        entities: Vec<LineItemEntity>,
    ) -> Result<Vec<LineItem>, RepositoryError> {
        let mut product_ids: Vec<i64> = entities.iter().map(|e| e.product_id).collect();
        product_ids.sort_unstable();
        product_ids.dedup();

        let products: HashMap<i64, _> = self
            .products
            .get_by_ids(&product_ids)
            .await?
            .into_iter()
            .map(|product| (product.id, product))
            .collect();

        entities
            .into_iter()
            .map(|entity| {
                let product = products.get(&entity.product_id);
                entity.into_domain(product)
            })
            .collect()
    }

    async fn update_row(&self, id: i64, column: &str, value: Value) -> Result<(), RepositoryError> {
        let mut changes = Row::new();
        changes.insert(column.to_string(), value);

        let affected = self
            .gateway
            .update(Collection::ProductOnList, &changes, &[Filter::eq("id", id)])
            .await?;
        if affected == 0 {
            return Err(RepositoryError::not_found());
        }
        Ok(())
    }
}

#[async_trait]
impl ShoppingListRepository for GatewayShoppingListRepository {
    async fn get_items(&self, list_id: i64) -> Result<Vec<LineItem>, RepositoryError> {
        self.fetch(vec![Filter::eq("shopping_list_id", list_id)]).await
    }

    async fn get_bought_items(&self, list_id: i64) -> Result<Vec<LineItem>, RepositoryError> {
        self.fetch(vec![
            Filter::eq("shopping_list_id", list_id),
            Filter::eq("is_bought", true),
        ])
        .await
    }

    async fn get_by_id(&self, id: i64) -> Result<LineItem, RepositoryError> {
        self.fetch(vec![Filter::eq("id", id)])
            .await?
            .into_iter()
            .next()
            .ok_or(RepositoryError::NotFound)
    }

    async fn add(&self, item: &NewLineItem) -> Result<LineItem, RepositoryError> {
        let row = to_row(&NewLineItemEntity::from(item))?;
        let stored = self
            .gateway
            .insert(Collection::ProductOnList, &[row])
            .await?
            .into_iter()
            .next()
            .ok_or(RepositoryError::Persistence)?;

        let entity: LineItemEntity = from_row(stored)?;
        self.join_products(vec![entity])
            .await?
            .into_iter()
            .next()
            .ok_or(RepositoryError::Persistence)
    }

    async fn update_quantity(&self, id: i64, quantity: Quantity) -> Result<(), RepositoryError> {
        self.update_row(id, "quantity", Value::from(quantity.value()))
            .await
    }

    async fn set_bought(&self, id: i64, is_bought: bool) -> Result<(), RepositoryError> {
        self.update_row(id, "is_bought", Value::from(is_bought)).await
    }

    async fn set_product_bought(
        &self,
        list_id: i64,
        product_id: i64,
        is_bought: bool,
    ) -> Result<u64, RepositoryError> {
        let mut changes = Row::new();
        changes.insert("is_bought".to_string(), Value::from(is_bought));

        let affected = self
            .gateway
            .update(
                Collection::ProductOnList,
                &changes,
                &[
                    Filter::eq("shopping_list_id", list_id),
                    Filter::eq("product_id", product_id),
                ],
            )
            .await?;
        Ok(affected)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let affected = self
            .gateway
            .delete(Collection::ProductOnList, &[Filter::eq("id", id)])
            .await?;
        if affected == 0 {
            return Err(RepositoryError::not_found());
        }
        Ok(())
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<u64, RepositoryError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let affected = self
            .gateway
            .delete(
                Collection::ProductOnList,
                &[Filter::one_of("id", ids.iter().copied())],
            )
            .await?;
        Ok(affected)
    }
}
