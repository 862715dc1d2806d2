use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::tabung_type::model::{NewTabungType, TabungType, TabungTypePatch};

#[derive(Debug, Clone, Object)]
pub struct CreateTabungTypeRequest {
    /// Type name, unique per mosque (cannot be empty)
    pub name: String,
}

impl From<CreateTabungTypeRequest> for NewTabungType {
    fn from(request: CreateTabungTypeRequest) -> Self {
        Self { name: request.name }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateTabungTypeRequest {
    /// New type name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
}

impl From<UpdateTabungTypeRequest> for TabungTypePatch {
    fn from(request: UpdateTabungTypeRequest) -> Self {
        Self { name: request.name }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TabungTypeResponse {
    /// Tabung type unique identifier
    pub id: String,
    /// Type name
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<TabungType> for TabungTypeResponse {
    fn from(tabung_type: TabungType) -> Self {
        Self {
            id: tabung_type.id.to_string(),
            name: tabung_type.name,
            created_at: tabung_type.created_at,
            updated_at: tabung_type.updated_at,
        }
    }
}
