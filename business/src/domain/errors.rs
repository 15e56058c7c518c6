use crate::domain::gateway::GatewayError;

/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.decode_failed")]
    DecodeFailed(String),
    #[error("repository.gateway")]
    Gateway(#[from] GatewayError),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn decode_failed(reason: impl Into<String>) -> Self {
        RepositoryError::DecodeFailed(reason.into())
    }
}
