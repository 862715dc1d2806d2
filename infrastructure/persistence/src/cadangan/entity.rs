use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cadangan::model::Cadangan;
use business::domain::cadangan::value_objects::CadanganType;
use business::domain::shared::value_objects::TenantId;

#[derive(Debug, FromRow)]
pub struct CadanganEntity {
    pub id: Uuid,
    pub tenant_id: String,
    pub cadangan_type: String,
    pub content: String,
    pub sender_name: Option<String>,
    pub sender_phone: Option<String>,
    pub is_open: bool,
    pub remark: Option<String>,
    pub score: Option<i16>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CadanganEntity {
    pub fn into_domain(self) -> Cadangan {
        Cadangan::from_repository(
            self.id,
            TenantId::new(self.tenant_id),
            self.cadangan_type
                .parse::<CadanganType>()
                .unwrap_or(CadanganType::Lain),
            self.content,
            self.sender_name,
            self.sender_phone,
            self.is_open,
            self.remark,
            self.score,
            self.created_at,
            self.updated_at,
        )
    }
}
