#[derive(Debug, thiserror::Error)]
pub enum PantryError {
    #[error("pantry.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
