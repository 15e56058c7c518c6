use crate::domain::shared::value_objects::QuantityError;

#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.not_found")]
    NotFound,
    #[error("shopping_list.product_not_found")]
    ProductNotFound,
    #[error("shopping_list.invalid_quantity")]
    InvalidQuantity(#[from] QuantityError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
