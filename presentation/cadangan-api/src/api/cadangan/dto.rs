use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::cadangan::model::{Cadangan, CadanganPatch, NewCadangan};
use business::domain::cadangan::value_objects::CadanganType;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum CadanganTypeDto {
    #[oai(rename = "cadangan")]
    Cadangan,
    #[oai(rename = "aduan")]
    Aduan,
    #[oai(rename = "penghargaan")]
    Penghargaan,
    #[oai(rename = "lain")]
    Lain,
}

impl From<CadanganType> for CadanganTypeDto {
    fn from(cadangan_type: CadanganType) -> Self {
        match cadangan_type {
            CadanganType::Cadangan => CadanganTypeDto::Cadangan,
            CadanganType::Aduan => CadanganTypeDto::Aduan,
            CadanganType::Penghargaan => CadanganTypeDto::Penghargaan,
            CadanganType::Lain => CadanganTypeDto::Lain,
        }
    }
}

impl From<CadanganTypeDto> for CadanganType {
    fn from(dto: CadanganTypeDto) -> Self {
        match dto {
            CadanganTypeDto::Cadangan => CadanganType::Cadangan,
            CadanganTypeDto::Aduan => CadanganType::Aduan,
            CadanganTypeDto::Penghargaan => CadanganType::Penghargaan,
            CadanganTypeDto::Lain => CadanganType::Lain,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateCadanganRequest {
    /// Kind of feedback
    #[oai(rename = "type")]
    pub cadangan_type: CadanganTypeDto,
    /// Feedback text (cannot be empty)
    pub content: String,
    #[oai(skip_serializing_if_is_none)]
    pub sender_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub sender_phone: Option<String>,
}

impl From<CreateCadanganRequest> for NewCadangan {
    fn from(request: CreateCadanganRequest) -> Self {
        Self {
            cadangan_type: request.cadangan_type.into(),
            content: request.content,
            sender_name: request.sender_name,
            sender_phone: request.sender_phone,
        }
    }
}

/// Committee follow-up on a suggestion.
#[derive(Debug, Clone, Object)]
pub struct UpdateCadanganRequest {
    #[oai(skip_serializing_if_is_none)]
    pub is_open: Option<bool>,
    #[oai(skip_serializing_if_is_none)]
    pub remark: Option<String>,
    /// Rating from 1 to 5
    #[oai(skip_serializing_if_is_none)]
    pub score: Option<i16>,
}

impl From<UpdateCadanganRequest> for CadanganPatch {
    fn from(request: UpdateCadanganRequest) -> Self {
        Self {
            is_open: request.is_open,
            remark: request.remark,
            score: request.score,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CadanganResponse {
    /// Cadangan unique identifier
    pub id: String,
    #[oai(rename = "type")]
    pub cadangan_type: CadanganTypeDto,
    pub content: String,
    #[oai(skip_serializing_if_is_none)]
    pub sender_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub sender_phone: Option<String>,
    pub is_open: bool,
    #[oai(skip_serializing_if_is_none)]
    pub remark: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub score: Option<i16>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Cadangan> for CadanganResponse {
    fn from(cadangan: Cadangan) -> Self {
        Self {
            id: cadangan.id.to_string(),
            cadangan_type: cadangan.cadangan_type.into(),
            content: cadangan.content,
            sender_name: cadangan.sender_name,
            sender_phone: cadangan.sender_phone,
            is_open: cadangan.is_open,
            remark: cadangan.remark,
            score: cadangan.score,
            created_at: cadangan.created_at,
            updated_at: cadangan.updated_at,
        }
    }
}
