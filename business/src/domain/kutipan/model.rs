use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::KutipanError;
use crate::domain::crud::Resource;
use crate::domain::shared::value_objects::TenantId;

/// One recorded contribution against a fund. Amounts are kept in sen.
#[derive(Debug, Clone)]
pub struct Kutipan {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub tabung_id: Uuid,
    pub amount_sen: i64,
    pub collected_at: DateTime<Utc>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewKutipan {
    pub tabung_id: Uuid,
    pub amount_sen: i64,
    /// Defaults to now.
    pub collected_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

#[derive(Default)]
pub struct KutipanPatch {
    pub amount_sen: Option<i64>,
    pub collected_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

impl Kutipan {
    /// Amount checks live in the kutipan rules so that creation and update
    /// share one code path.
    pub fn new(tenant_id: TenantId, props: NewKutipan) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            tabung_id: props.tabung_id,
            amount_sen: props.amount_sen,
            collected_at: props.collected_at.unwrap_or(now),
            note: normalize_note(props.note),
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        tenant_id: TenantId,
        tabung_id: Uuid,
        amount_sen: i64,
        collected_at: DateTime<Utc>,
        note: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            tabung_id,
            amount_sen,
            collected_at,
            note,
            created_at,
            updated_at,
        }
    }
}

fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

impl Resource for Kutipan {
    type Draft = NewKutipan;
    type Patch = KutipanPatch;
    type Error = KutipanError;

    const KIND: &'static str = "kutipan";

    fn id(&self) -> Uuid {
        self.id
    }

    fn create(tenant_id: TenantId, draft: NewKutipan) -> Result<Self, KutipanError> {
        Ok(Kutipan::new(tenant_id, draft))
    }

    fn apply(mut self, patch: KutipanPatch) -> Result<Self, KutipanError> {
        if let Some(amount_sen) = patch.amount_sen {
            self.amount_sen = amount_sen;
        }
        if let Some(collected_at) = patch.collected_at {
            self.collected_at = collected_at;
        }
        if patch.note.is_some() {
            self.note = normalize_note(patch.note);
        }
        self.updated_at = Utc::now();
        Ok(self)
    }

    fn not_found() -> KutipanError {
        KutipanError::NotFound
    }
}
