#[derive(Debug, thiserror::Error)]
pub enum TabungError {
    #[error("tabung.name_empty")]
    NameEmpty,
    #[error("tabung.not_found")]
    NotFound,
    #[error("tabung.invalid_period")]
    InvalidPeriod,
    #[error("tabung.tabung_type_not_found")]
    TabungTypeNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
