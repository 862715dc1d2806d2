use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::kutipan::model::{Kutipan, KutipanPatch, NewKutipan};
use business::domain::kutipan::use_cases::list_by_tabung::TabungCollection;

#[derive(Debug, Clone, Object)]
pub struct CreateKutipanRequest {
    /// Tabung the contribution is recorded against
    pub tabung_id: uuid::Uuid,
    /// Amount in sen (never negative)
    pub amount_sen: i64,
    /// When the money was collected, defaults to now
    #[oai(skip_serializing_if_is_none)]
    pub collected_at: Option<DateTime<Utc>>,
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
}

impl From<CreateKutipanRequest> for NewKutipan {
    fn from(request: CreateKutipanRequest) -> Self {
        Self {
            tabung_id: request.tabung_id,
            amount_sen: request.amount_sen,
            collected_at: request.collected_at,
            note: request.note,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateKutipanRequest {
    #[oai(skip_serializing_if_is_none)]
    pub amount_sen: Option<i64>,
    #[oai(skip_serializing_if_is_none)]
    pub collected_at: Option<DateTime<Utc>>,
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
}

impl From<UpdateKutipanRequest> for KutipanPatch {
    fn from(request: UpdateKutipanRequest) -> Self {
        Self {
            amount_sen: request.amount_sen,
            collected_at: request.collected_at,
            note: request.note,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct KutipanResponse {
    /// Kutipan unique identifier
    pub id: String,
    pub tabung_id: String,
    pub amount_sen: i64,
    pub collected_at: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub note: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Kutipan> for KutipanResponse {
    fn from(kutipan: Kutipan) -> Self {
        Self {
            id: kutipan.id.to_string(),
            tabung_id: kutipan.tabung_id.to_string(),
            amount_sen: kutipan.amount_sen,
            collected_at: kutipan.collected_at,
            note: kutipan.note,
            created_at: kutipan.created_at,
            updated_at: kutipan.updated_at,
        }
    }
}

/// Entries of one tabung, oldest first, with their total.
#[derive(Debug, Clone, Object)]
pub struct TabungCollectionResponse {
    pub tabung_id: String,
    pub total_sen: i64,
    pub entries: Vec<KutipanResponse>,
}

impl From<TabungCollection> for TabungCollectionResponse {
    fn from(collection: TabungCollection) -> Self {
        Self {
            tabung_id: collection.tabung_id.to_string(),
            total_sen: collection.total_sen,
            entries: collection
                .entries
                .into_iter()
                .map(KutipanResponse::from)
                .collect(),
        }
    }
}
