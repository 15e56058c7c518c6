use crate::domain::shared::value_objects::{Quantity, UserId};

/// Household stock of one product for one owner.
///
/// There is at most one entry per (owner, product) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PantryEntry {
    pub id: i64,
    pub owner_id: UserId,
    pub product_id: i64,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPantryEntry {
    pub owner_id: UserId,
    pub product_id: i64,
    pub quantity: Quantity,
}

impl PantryEntry {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i64, owner_id: UserId, product_id: i64, quantity: Quantity) -> Self {
        Self {
            id,
            owner_id,
            product_id,
            quantity,
        }
    }
}
