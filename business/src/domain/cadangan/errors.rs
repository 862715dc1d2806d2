#[derive(Debug, thiserror::Error)]
pub enum CadanganError {
    #[error("cadangan.content_empty")]
    ContentEmpty,
    #[error("cadangan.invalid_score")]
    InvalidScore,
    #[error("cadangan.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
