#[derive(Debug, thiserror::Error)]
pub enum TabungTypeError {
    #[error("tabung_type.name_empty")]
    NameEmpty,
    #[error("tabung_type.not_found")]
    NotFound,
    #[error("tabung_type.in_use")]
    InUse,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
