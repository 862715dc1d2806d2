use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CadanganError;
use super::value_objects::CadanganType;
use crate::domain::shared::value_objects::TenantId;

pub const MIN_SCORE: i16 = 1;
pub const MAX_SCORE: i16 = 5;

/// Feedback submitted by the community to the mosque committee.
#[derive(Debug, Clone)]
pub struct Cadangan {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub cadangan_type: CadanganType,
    pub content: String,
    pub sender_name: Option<String>,
    pub sender_phone: Option<String>,
    /// Still awaiting action from the committee.
    pub is_open: bool,
    pub remark: Option<String>,
    pub score: Option<i16>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewCadangan {
    pub cadangan_type: CadanganType,
    pub content: String,
    pub sender_name: Option<String>,
    pub sender_phone: Option<String>,
}

#[derive(Default)]
pub struct CadanganPatch {
    pub is_open: Option<bool>,
    pub remark: Option<String>,
    pub score: Option<i16>,
}

impl Cadangan {
    pub fn new(tenant_id: TenantId, props: NewCadangan) -> Result<Self, CadanganError> {
        let content = props.content.trim().to_string();
        if content.is_empty() {
            return Err(CadanganError::ContentEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            tenant_id,
            cadangan_type: props.cadangan_type,
            content,
            sender_name: non_blank(props.sender_name),
            sender_phone: non_blank(props.sender_phone),
            is_open: true,
            remark: None,
            score: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        tenant_id: TenantId,
        cadangan_type: CadanganType,
        content: String,
        sender_name: Option<String>,
        sender_phone: Option<String>,
        is_open: bool,
        remark: Option<String>,
        score: Option<i16>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            cadangan_type,
            content,
            sender_name,
            sender_phone,
            is_open,
            remark,
            score,
            created_at,
            updated_at,
        }
    }

    /// Committee follow-up: close/reopen, leave a remark, rate the suggestion.
    pub fn apply(mut self, patch: CadanganPatch) -> Result<Self, CadanganError> {
        if let Some(score) = patch.score {
            if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                return Err(CadanganError::InvalidScore);
            }
            self.score = Some(score);
        }
        if let Some(is_open) = patch.is_open {
            self.is_open = is_open;
        }
        if patch.remark.is_some() {
            self.remark = non_blank(patch.remark);
        }
        self.updated_at = Utc::now();
        Ok(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
