use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::Object;

use business::domain::tabung::model::{NewTabung, Tabung, TabungPatch};

#[derive(Debug, Clone, Object)]
pub struct CreateTabungRequest {
    /// Tabung type the fund is classified under
    pub tabung_type_id: uuid::Uuid,
    /// Fund name (cannot be empty)
    pub name: String,
    /// First day of the campaign
    #[oai(skip_serializing_if_is_none)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the campaign (not before `start_date`)
    #[oai(skip_serializing_if_is_none)]
    pub end_date: Option<NaiveDate>,
    /// Whether collections are counted down to coins
    #[oai(default)]
    pub is_cents_enabled: bool,
}

impl From<CreateTabungRequest> for NewTabung {
    fn from(request: CreateTabungRequest) -> Self {
        Self {
            tabung_type_id: request.tabung_type_id,
            name: request.name,
            start_date: request.start_date,
            end_date: request.end_date,
            is_cents_enabled: request.is_cents_enabled,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateTabungRequest {
    #[oai(skip_serializing_if_is_none)]
    pub tabung_type_id: Option<uuid::Uuid>,
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub start_date: Option<NaiveDate>,
    #[oai(skip_serializing_if_is_none)]
    pub end_date: Option<NaiveDate>,
    #[oai(skip_serializing_if_is_none)]
    pub is_cents_enabled: Option<bool>,
}

impl From<UpdateTabungRequest> for TabungPatch {
    fn from(request: UpdateTabungRequest) -> Self {
        Self {
            tabung_type_id: request.tabung_type_id,
            name: request.name,
            start_date: request.start_date,
            end_date: request.end_date,
            is_cents_enabled: request.is_cents_enabled,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TabungResponse {
    /// Tabung unique identifier
    pub id: String,
    pub tabung_type_id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub start_date: Option<NaiveDate>,
    #[oai(skip_serializing_if_is_none)]
    pub end_date: Option<NaiveDate>,
    pub is_cents_enabled: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Tabung> for TabungResponse {
    fn from(tabung: Tabung) -> Self {
        Self {
            id: tabung.id.to_string(),
            tabung_type_id: tabung.tabung_type_id.to_string(),
            name: tabung.name,
            start_date: tabung.start_date,
            end_date: tabung.end_date,
            is_cents_enabled: tabung.is_cents_enabled,
            created_at: tabung.created_at,
            updated_at: tabung.updated_at,
        }
    }
}
