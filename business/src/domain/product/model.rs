/// A catalog product, read-only from this service's point of view.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category_id: Option<i64>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i64, name: String, category_id: Option<i64>) -> Self {
        Self {
            id,
            name,
            category_id,
        }
    }
}
