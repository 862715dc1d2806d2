use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::errors::TabungError;
use crate::domain::crud::Resource;
use crate::domain::shared::value_objects::TenantId;

/// A named collection campaign (fund).
#[derive(Debug, Clone)]
pub struct Tabung {
    pub id: Uuid,
    pub tenant_id: TenantId,
    pub tabung_type_id: Uuid,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Whether collections are counted down to coins.
    pub is_cents_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewTabung {
    pub tabung_type_id: Uuid,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_cents_enabled: bool,
}

#[derive(Default)]
pub struct TabungPatch {
    pub tabung_type_id: Option<Uuid>,
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_cents_enabled: Option<bool>,
}

impl Tabung {
    pub fn new(tenant_id: TenantId, props: NewTabung) -> Result<Self, TabungError> {
        let name = props.name.trim().to_string();
        if name.is_empty() {
            return Err(TabungError::NameEmpty);
        }
        validate_period(props.start_date, props.end_date)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            tenant_id,
            tabung_type_id: props.tabung_type_id,
            name,
            start_date: props.start_date,
            end_date: props.end_date,
            is_cents_enabled: props.is_cents_enabled,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        tenant_id: TenantId,
        tabung_type_id: Uuid,
        name: String,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        is_cents_enabled: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            tenant_id,
            tabung_type_id,
            name,
            start_date,
            end_date,
            is_cents_enabled,
            created_at,
            updated_at,
        }
    }

    /// True when `at` falls inside the campaign period. Open ends accept anything.
    pub fn accepts_collection_on(&self, at: DateTime<Utc>) -> bool {
        let day = at.date_naive();
        let after_start = self.start_date.is_none_or(|start| day >= start);
        let before_end = self.end_date.is_none_or(|end| day <= end);
        after_start && before_end
    }
}

fn validate_period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), TabungError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(TabungError::InvalidPeriod),
        _ => Ok(()),
    }
}

impl Resource for Tabung {
    type Draft = NewTabung;
    type Patch = TabungPatch;
    type Error = TabungError;

    const KIND: &'static str = "tabung";

    fn id(&self) -> Uuid {
        self.id
    }

    fn create(tenant_id: TenantId, draft: NewTabung) -> Result<Self, TabungError> {
        Tabung::new(tenant_id, draft)
    }

    fn apply(mut self, patch: TabungPatch) -> Result<Self, TabungError> {
        if let Some(name) = patch.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(TabungError::NameEmpty);
            }
            self.name = name;
        }
        if let Some(tabung_type_id) = patch.tabung_type_id {
            self.tabung_type_id = tabung_type_id;
        }
        if patch.start_date.is_some() {
            self.start_date = patch.start_date;
        }
        if patch.end_date.is_some() {
            self.end_date = patch.end_date;
        }
        if let Some(is_cents_enabled) = patch.is_cents_enabled {
            self.is_cents_enabled = is_cents_enabled;
        }
        validate_period(self.start_date, self.end_date)?;

        self.updated_at = Utc::now();
        Ok(self)
    }

    fn not_found() -> TabungError {
        TabungError::NotFound
    }
}
