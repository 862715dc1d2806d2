use sqlx::FromRow;

use business::domain::shared::value_objects::TenantId;
use business::domain::tenant::model::Tenant;

#[derive(Debug, FromRow)]
pub struct TenantEntity {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub connection_string: Option<String>,
    pub is_active: bool,
}

impl TenantEntity {
    pub fn into_domain(self) -> Tenant {
        Tenant::from_repository(
            TenantId::new(self.id),
            self.name,
            self.display_name,
            self.connection_string,
            self.is_active,
        )
    }
}
