use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::pantry::model::{NewPantryEntry, PantryEntry};
use business::domain::shared::value_objects::{Quantity, UserId};

pub const COLUMNS: &[&str] = &["id", "owner_id", "product_id", "quantity"];

#[derive(Debug, Serialize, Deserialize)]
pub struct PantryEntity {
    pub id: i64,
    pub owner_id: String,
    pub product_id: i64,
    pub quantity: f64,
}

#[derive(Debug, Serialize)]
pub struct NewPantryEntity {
    pub owner_id: String,
    pub product_id: i64,
    pub quantity: f64,
}

impl PantryEntity {
    pub fn into_domain(self) -> Result<PantryEntry, RepositoryError> {
        let quantity = Quantity::new(self.quantity)
            .map_err(|e| RepositoryError::decode_failed(format!("pantry {}: {e}", self.id)))?;
        Ok(PantryEntry::from_repository(
            self.id,
            UserId::new(self.owner_id),
            self.product_id,
            quantity,
        ))
    }
}

impl From<&NewPantryEntry> for NewPantryEntity {
    fn from(entry: &NewPantryEntry) -> Self {
        Self {
            owner_id: entry.owner_id.as_str().to_string(),
            product_id: entry.product_id,
            quantity: entry.quantity.value(),
        }
    }
}
