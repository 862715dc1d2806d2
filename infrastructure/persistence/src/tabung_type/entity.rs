use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::TenantId;
use business::domain::tabung_type::model::TabungType;

#[derive(Debug, FromRow)]
pub struct TabungTypeEntity {
    pub id: Uuid,
    pub tenant_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TabungTypeEntity {
    pub fn into_domain(self) -> TabungType {
        TabungType::from_repository(
            self.id,
            TenantId::new(self.tenant_id),
            self.name,
            self.created_at,
            self.updated_at,
        )
    }
}
