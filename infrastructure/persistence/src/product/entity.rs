use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

pub const COLUMNS: &[&str] = &["id", "name", "category_id"];

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub category_id: Option<i64>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(self.id, self.name, self.category_id)
    }
}
