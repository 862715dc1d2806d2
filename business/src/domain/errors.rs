/// Repository errors shared by every resource family.
/// Messages are code-style identifiers so clients can localise them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A unique constraint rejected the write.
    #[error("repository.duplicated")]
    Duplicated,
    /// The record is still referenced by another record.
    #[error("repository.conflict")]
    Conflict,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn conflict() -> Self {
        RepositoryError::Conflict
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}
