#[derive(Debug, thiserror::Error)]
pub enum KutipanError {
    #[error("kutipan.negative_amount")]
    NegativeAmount,
    #[error("kutipan.not_found")]
    NotFound,
    #[error("kutipan.tabung_not_found")]
    TabungNotFound,
    #[error("kutipan.outside_tabung_period")]
    OutsideTabungPeriod,
    #[error("kutipan.invalid_range")]
    InvalidRange,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
