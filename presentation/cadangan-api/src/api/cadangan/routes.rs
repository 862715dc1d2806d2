use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::cadangan::errors::CadanganError;
use business::domain::cadangan::model::Cadangan;
use business::domain::cadangan::repository::{CadanganFilter, CadanganRepository};
use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::tenant::model::TenantContext;

use crate::api::cadangan::dto::{
    CadanganResponse, CadanganTypeDto, CreateCadanganRequest, UpdateCadanganRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body};
use crate::api::tags::ApiTags;

fn missing(err: RepositoryError) -> CadanganError {
    match err {
        RepositoryError::NotFound => CadanganError::NotFound,
        other => CadanganError::Repository(other),
    }
}

fn invalid_id() -> Json<ErrorResponse> {
    error_body("ValidationError", "cadangan.invalid_id")
}

pub struct CadanganApi {
    repository: Arc<dyn CadanganRepository>,
    logger: Arc<dyn Logger>,
}

impl CadanganApi {
    pub fn new(repository: Arc<dyn CadanganRepository>, logger: Arc<dyn Logger>) -> Self {
        Self { repository, logger }
    }

    async fn follow_up(
        &self,
        tenant: &TenantContext,
        id: Uuid,
        request: UpdateCadanganRequest,
    ) -> Result<Cadangan, CadanganError> {
        self.logger.info(&format!("Following up cadangan {}", id));

        let existing = self
            .repository
            .get_by_id(tenant, id)
            .await
            .map_err(missing)?;
        let updated = existing.apply(request.into())?;
        self.repository
            .update(tenant, &updated)
            .await
            .map_err(missing)?;
        Ok(updated)
    }
}

/// Cadangan API
///
/// Suggestions, complaints and appreciation from the community, with the
/// committee's follow-up.
#[OpenApi]
impl CadanganApi {
    /// List cadangan
    ///
    /// Optionally filtered by `type` and by `open` status.
    #[oai(path = "/cadangan", method = "get", tag = "ApiTags::Cadangan")]
    async fn list_cadangan(
        &self,
        tenant: Data<&TenantContext>,
        #[oai(name = "type")] cadangan_type: Query<Option<CadanganTypeDto>>,
        open: Query<Option<bool>>,
    ) -> ListCadanganResponse {
        let filter = CadanganFilter {
            cadangan_type: cadangan_type.0.map(Into::into),
            is_open: open.0,
        };

        let result = if filter.is_empty() {
            self.repository.list(tenant.0).await
        } else {
            self.repository.find(tenant.0, filter).await
        };

        match result {
            Ok(items) => ListCadanganResponse::Ok(Json(
                items.into_iter().map(CadanganResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = CadanganError::Repository(err).into_error_response();
                ListCadanganResponse::InternalError(json)
            }
        }
    }

    /// Get a cadangan by ID
    #[oai(path = "/cadangan/:id", method = "get", tag = "ApiTags::Cadangan")]
    async fn get_cadangan(
        &self,
        tenant: Data<&TenantContext>,
        id: Path<String>,
    ) -> GetCadanganResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetCadanganResponse::BadRequest(invalid_id());
        };

        match self.repository.get_by_id(tenant.0, uuid).await {
            Ok(cadangan) => GetCadanganResponse::Ok(Json(cadangan.into())),
            Err(err) => {
                let (status, json) = missing(err).into_error_response();
                match status.as_u16() {
                    404 => GetCadanganResponse::NotFound(json),
                    _ => GetCadanganResponse::InternalError(json),
                }
            }
        }
    }

    /// Submit a cadangan
    #[oai(path = "/cadangan", method = "post", tag = "ApiTags::Cadangan")]
    async fn create_cadangan(
        &self,
        tenant: Data<&TenantContext>,
        body: Json<CreateCadanganRequest>,
    ) -> CreateCadanganResponse {
        let cadangan = match Cadangan::new(tenant.0.tenant_id.clone(), body.0.into()) {
            Ok(cadangan) => cadangan,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return CreateCadanganResponse::BadRequest(json);
            }
        };

        match self.repository.insert(tenant.0, &cadangan).await {
            Ok(()) => {
                self.logger.info(&format!(
                    "Received {} {} for tenant {}",
                    cadangan.cadangan_type, cadangan.id, tenant.0.tenant_id
                ));
                CreateCadanganResponse::Created(Json(cadangan.into()))
            }
            Err(err) => {
                let (_status, json) = CadanganError::Repository(err).into_error_response();
                CreateCadanganResponse::InternalError(json)
            }
        }
    }

    /// Follow up a cadangan
    ///
    /// Close or reopen it, leave a remark, or rate it from 1 to 5.
    #[oai(path = "/cadangan/:id", method = "put", tag = "ApiTags::Cadangan")]
    async fn update_cadangan(
        &self,
        tenant: Data<&TenantContext>,
        id: Path<String>,
        body: Json<UpdateCadanganRequest>,
    ) -> UpdateCadanganResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateCadanganResponse::BadRequest(invalid_id());
        };

        match self.follow_up(tenant.0, uuid, body.0).await {
            Ok(cadangan) => UpdateCadanganResponse::Ok(Json(cadangan.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCadanganResponse::BadRequest(json),
                    404 => UpdateCadanganResponse::NotFound(json),
                    _ => UpdateCadanganResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a cadangan
    #[oai(path = "/cadangan/:id", method = "delete", tag = "ApiTags::Cadangan")]
    async fn delete_cadangan(
        &self,
        tenant: Data<&TenantContext>,
        id: Path<String>,
    ) -> DeleteCadanganResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteCadanganResponse::BadRequest(invalid_id());
        };

        match self.repository.delete(tenant.0, uuid).await {
            Ok(()) => {
                self.logger.info(&format!("Deleted cadangan {}", uuid));
                DeleteCadanganResponse::NoContent
            }
            Err(err) => {
                let (status, json) = missing(err).into_error_response();
                match status.as_u16() {
                    404 => DeleteCadanganResponse::NotFound(json),
                    _ => DeleteCadanganResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCadanganResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CadanganResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCadanganResponse {
    #[oai(status = 200)]
    Ok(Json<CadanganResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCadanganResponse {
    #[oai(status = 201)]
    Created(Json<CadanganResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCadanganResponse {
    #[oai(status = 200)]
    Ok(Json<CadanganResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCadanganResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
