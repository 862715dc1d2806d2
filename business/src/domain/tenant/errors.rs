#[derive(Debug, thiserror::Error)]
pub enum TenantError {
    #[error("tenant.missing")]
    Missing,
    #[error("tenant.not_found")]
    NotFound,
    #[error("tenant.inactive")]
    Inactive,
    #[error("tenant.lookup_failed")]
    Lookup(#[from] crate::domain::errors::RepositoryError),
}
