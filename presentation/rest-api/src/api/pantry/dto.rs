use poem_openapi::Object;

use business::domain::pantry::model::PantryEntry;

#[derive(Debug, Clone, Object)]
pub struct UpdatePantryQuantityRequest {
    /// New stock amount; `,` and `.` are both accepted as decimal separator
    pub quantity: String,
}

#[derive(Debug, Clone, Object)]
pub struct PantryEntryResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: f64,
}

impl From<PantryEntry> for PantryEntryResponse {
    fn from(entry: PantryEntry) -> Self {
        Self {
            id: entry.id,
            product_id: entry.product_id,
            quantity: entry.quantity.value(),
        }
    }
}
