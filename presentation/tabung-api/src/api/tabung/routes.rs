use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::crud::ResourceService;
use business::domain::tabung::model::Tabung;
use business::domain::tenant::model::TenantContext;

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::tabung::dto::{CreateTabungRequest, TabungResponse, UpdateTabungRequest};
use crate::api::tags::ApiTags;

pub struct TabungApi {
    service: Arc<dyn ResourceService<Tabung>>,
}

impl TabungApi {
    pub fn new(service: Arc<dyn ResourceService<Tabung>>) -> Self {
        Self { service }
    }
}

/// Tabung management API
///
/// Collection campaigns run by a mosque, each classified under a tabung type.
#[OpenApi]
impl TabungApi {
    /// List tabung
    #[oai(path = "/tabung", method = "get", tag = "ApiTags::Tabung")]
    async fn list_tabung(&self, tenant: Data<&TenantContext>) -> ListTabungResponse {
        match self.service.list(tenant.0).await {
            Ok(funds) => {
                ListTabungResponse::Ok(Json(funds.into_iter().map(TabungResponse::from).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListTabungResponse::InternalError(json)
            }
        }
    }

    /// Get a tabung by ID
    #[oai(path = "/tabung/:id", method = "get", tag = "ApiTags::Tabung")]
    async fn get_tabung(&self, tenant: Data<&TenantContext>, id: Path<String>) -> GetTabungResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetTabungResponse::BadRequest(invalid_id("tabung"));
        };

        match self.service.get(tenant.0, uuid).await {
            Ok(tabung) => GetTabungResponse::Ok(Json(tabung.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetTabungResponse::NotFound(json),
                    _ => GetTabungResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a tabung
    ///
    /// The tabung type must exist for the same mosque.
    #[oai(path = "/tabung", method = "post", tag = "ApiTags::Tabung")]
    async fn create_tabung(
        &self,
        tenant: Data<&TenantContext>,
        body: Json<CreateTabungRequest>,
    ) -> CreateTabungResponse {
        match self.service.create(tenant.0, body.0.into()).await {
            Ok(tabung) => CreateTabungResponse::Created(Json(tabung.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateTabungResponse::BadRequest(json),
                    409 => CreateTabungResponse::Conflict(json),
                    422 => CreateTabungResponse::UnprocessableEntity(json),
                    _ => CreateTabungResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a tabung
    #[oai(path = "/tabung/:id", method = "put", tag = "ApiTags::Tabung")]
    async fn update_tabung(
        &self,
        tenant: Data<&TenantContext>,
        id: Path<String>,
        body: Json<UpdateTabungRequest>,
    ) -> UpdateTabungResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateTabungResponse::BadRequest(invalid_id("tabung"));
        };

        match self.service.update(tenant.0, uuid, body.0.into()).await {
            Ok(tabung) => UpdateTabungResponse::Ok(Json(tabung.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateTabungResponse::BadRequest(json),
                    404 => UpdateTabungResponse::NotFound(json),
                    409 => UpdateTabungResponse::Conflict(json),
                    422 => UpdateTabungResponse::UnprocessableEntity(json),
                    _ => UpdateTabungResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a tabung
    ///
    /// Its kutipan entries are removed with it.
    #[oai(path = "/tabung/:id", method = "delete", tag = "ApiTags::Tabung")]
    async fn delete_tabung(
        &self,
        tenant: Data<&TenantContext>,
        id: Path<String>,
    ) -> DeleteTabungResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteTabungResponse::BadRequest(invalid_id("tabung"));
        };

        match self.service.delete(tenant.0, uuid).await {
            Ok(()) => DeleteTabungResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteTabungResponse::NotFound(json),
                    _ => DeleteTabungResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListTabungResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<TabungResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTabungResponse {
    #[oai(status = 200)]
    Ok(Json<TabungResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateTabungResponse {
    #[oai(status = 201)]
    Created(Json<TabungResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateTabungResponse {
    #[oai(status = 200)]
    Ok(Json<TabungResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteTabungResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
