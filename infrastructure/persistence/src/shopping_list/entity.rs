use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::Quantity;
use business::domain::shopping_list::model::{LineItem, NewLineItem};

pub const COLUMNS: &[&str] = &["id", "shopping_list_id", "product_id", "quantity", "is_bought"];

#[derive(Debug, Serialize, Deserialize)]
pub struct LineItemEntity {
    pub id: i64,
    pub shopping_list_id: i64,
    pub product_id: i64,
    pub quantity: f64,
    #[serde(default)]
    pub is_bought: bool,
}

#[derive(Debug, Serialize)]
pub struct NewLineItemEntity {
    pub shopping_list_id: i64,
    pub product_id: i64,
    pub quantity: f64,
    pub is_bought: bool,
}

impl LineItemEntity {
    /// Joins the row with its catalog product. A product missing from the catalog
    /// is displayed by its id.
    pub fn into_domain(self, product: Option<&Product>) -> Result<LineItem, RepositoryError> {
        let quantity = Quantity::new(self.quantity).map_err(|e| {
            RepositoryError::decode_failed(format!("product_on_list {}: {e}", self.id))
        })?;
        let (name, category_id) = match product {
            Some(product) => (product.name.clone(), product.category_id),
            None => (self.product_id.to_string(), None),
        };

        Ok(LineItem::from_repository(
            self.id,
            self.shopping_list_id,
            self.product_id,
            name,
            category_id,
            quantity,
            self.is_bought,
        ))
    }
}

impl From<&NewLineItem> for NewLineItemEntity {
    fn from(item: &NewLineItem) -> Self {
        Self {
            shopping_list_id: item.shopping_list_id,
            product_id: item.product_id,
            quantity: item.quantity.value(),
            is_bought: item.is_bought,
        }
    }
}
