use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::kutipan::model::Kutipan;
use business::domain::shared::value_objects::TenantId;

#[derive(Debug, FromRow)]
pub struct KutipanEntity {
    pub id: Uuid,
    pub tenant_id: String,
    pub tabung_id: Uuid,
    pub amount_sen: i64,
    pub collected_at: DateTime<Utc>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl KutipanEntity {
    pub fn into_domain(self) -> Kutipan {
        Kutipan::from_repository(
            self.id,
            TenantId::new(self.tenant_id),
            self.tabung_id,
            self.amount_sen,
            self.collected_at,
            self.note,
            self.created_at,
            self.updated_at,
        )
    }
}
