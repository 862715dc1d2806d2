use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::TenantId;

/// Where a tenant's records live.
#[derive(Clone, PartialEq, Eq)]
pub enum TenantPartition {
    /// Rows in the shared database, scoped by `tenant_id`.
    Shared,
    /// A database of its own, reachable through this connection string.
    Dedicated { connection_string: String },
}

// Connection strings carry credentials.
impl std::fmt::Debug for TenantPartition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TenantPartition::Shared => write!(f, "Shared"),
            TenantPartition::Dedicated { .. } => {
                write!(f, "Dedicated {{ connection_string: \"***\" }}")
            }
        }
    }
}

/// Tenant metadata as stored in the tenant registry.
#[derive(Debug, Clone)]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    pub display_name: String,
    pub partition: TenantPartition,
    pub is_active: bool,
}

impl Tenant {
    pub fn from_repository(
        id: TenantId,
        name: String,
        display_name: String,
        connection_string: Option<String>,
        is_active: bool,
    ) -> Self {
        let partition = match connection_string {
            Some(connection_string) if !connection_string.trim().is_empty() => {
                TenantPartition::Dedicated { connection_string }
            }
            _ => TenantPartition::Shared,
        };

        Self {
            id,
            name,
            display_name,
            partition,
            is_active,
        }
    }
}

/// Tenant attached to a single request.
///
/// Built fresh for every request from the registry's metadata and dropped
/// when the request ends.
#[derive(Debug, Clone)]
pub struct TenantContext {
    pub tenant_id: TenantId,
    pub name: String,
    pub partition: TenantPartition,
    pub resolved_at: DateTime<Utc>,
}

impl TenantContext {
    pub fn for_request(tenant: &Tenant) -> Self {
        Self {
            tenant_id: tenant.id.clone(),
            name: tenant.name.clone(),
            partition: tenant.partition.clone(),
            resolved_at: Utc::now(),
        }
    }
}
