use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::TabungTypeError;
use crate::domain::crud::Resource;
use crate::domain::shared::value_objects::TenantId;

/// Category applied to funds, e.g. "Infaq Jumaat" or "Tabung Pembinaan".
#[derive(Debug, Clone)]
pub struct TabungType {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewTabungType {
    pub name: String,
}

pub struct TabungTypePatch {
    pub name: Option<String>,
}

impl TabungType {
    pub fn new(tenant_id: TenantId, props: NewTabungType) -> Result<Self, TabungTypeError> {
        let name = props.name.trim().to_string();
        if name.is_empty() {
            return Err(TabungTypeError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            tenant_id,
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        tenant_id: TenantId,
        name: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            name,
            created_at,
            updated_at,
        }
    }
}

impl Resource for TabungType {
    type Draft = NewTabungType;
    type Patch = TabungTypePatch;
    type Error = TabungTypeError;

    const KIND: &'static str = "tabung_type";

    fn id(&self) -> Uuid {
        self.id
    }

    fn create(tenant_id: TenantId, draft: NewTabungType) -> Result<Self, TabungTypeError> {
        TabungType::new(tenant_id, draft)
    }

    fn apply(mut self, patch: TabungTypePatch) -> Result<Self, TabungTypeError> {
        if let Some(name) = patch.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(TabungTypeError::NameEmpty);
            }
            self.name = name;
        }
        self.updated_at = Utc::now();
        Ok(self)
    }

    fn not_found() -> TabungTypeError {
        TabungTypeError::NotFound
    }
}
