use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::TenantId;
use business::domain::tabung::model::Tabung;

#[derive(Debug, FromRow)]
pub struct TabungEntity {
    pub id: Uuid,
    pub tenant_id: String,
    pub tabung_type_id: Uuid,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_cents_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TabungEntity {
    pub fn into_domain(self) -> Tabung {
        Tabung::from_repository(
            self.id,
            TenantId::new(self.tenant_id),
            self.tabung_type_id,
            self.name,
            self.start_date,
            self.end_date,
            self.is_cents_enabled,
            self.created_at,
            self.updated_at,
        )
    }
}
