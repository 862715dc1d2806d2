use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::crud::ResourceService;
use business::domain::tabung_type::model::TabungType;
use business::domain::tenant::model::TenantContext;

use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_id};
use crate::api::tabung_type::dto::{
    CreateTabungTypeRequest, TabungTypeResponse, UpdateTabungTypeRequest,
};
use crate::api::tags::ApiTags;

pub struct TabungTypeApi {
    service: Arc<dyn ResourceService<TabungType>>,
}

impl TabungTypeApi {
    pub fn new(service: Arc<dyn ResourceService<TabungType>>) -> Self {
        Self { service }
    }
}

/// Tabung type management API
///
/// Categories a mosque uses to classify its funds.
#[OpenApi]
impl TabungTypeApi {
    /// List tabung types
    #[oai(path = "/tabung-type", method = "get", tag = "ApiTags::TabungType")]
    async fn list_tabung_types(&self, tenant: Data<&TenantContext>) -> ListTabungTypesResponse {
        match self.service.list(tenant.0).await {
            Ok(types) => ListTabungTypesResponse::Ok(Json(
                types.into_iter().map(TabungTypeResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListTabungTypesResponse::InternalError(json)
            }
        }
    }

    /// Get a tabung type by ID
    #[oai(path = "/tabung-type/:id", method = "get", tag = "ApiTags::TabungType")]
    async fn get_tabung_type(
        &self,
        tenant: Data<&TenantContext>,
        id: Path<String>,
    ) -> GetTabungTypeResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetTabungTypeResponse::BadRequest(invalid_id("tabung_type"));
        };

        match self.service.get(tenant.0, uuid).await {
            Ok(tabung_type) => GetTabungTypeResponse::Ok(Json(tabung_type.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetTabungTypeResponse::NotFound(json),
                    _ => GetTabungTypeResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a tabung type
    #[oai(path = "/tabung-type", method = "post", tag = "ApiTags::TabungType")]
    async fn create_tabung_type(
        &self,
        tenant: Data<&TenantContext>,
        body: Json<CreateTabungTypeRequest>,
    ) -> CreateTabungTypeResponse {
        match self.service.create(tenant.0, body.0.into()).await {
            Ok(tabung_type) => CreateTabungTypeResponse::Created(Json(tabung_type.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateTabungTypeResponse::BadRequest(json),
                    409 => CreateTabungTypeResponse::Conflict(json),
                    _ => CreateTabungTypeResponse::InternalError(json),
                }
            }
        }
    }

    /// Rename a tabung type
    #[oai(path = "/tabung-type/:id", method = "put", tag = "ApiTags::TabungType")]
    async fn update_tabung_type(
        &self,
        tenant: Data<&TenantContext>,
        id: Path<String>,
        body: Json<UpdateTabungTypeRequest>,
    ) -> UpdateTabungTypeResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateTabungTypeResponse::BadRequest(invalid_id("tabung_type"));
        };

        match self.service.update(tenant.0, uuid, body.0.into()).await {
            Ok(tabung_type) => UpdateTabungTypeResponse::Ok(Json(tabung_type.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateTabungTypeResponse::BadRequest(json),
                    404 => UpdateTabungTypeResponse::NotFound(json),
                    409 => UpdateTabungTypeResponse::Conflict(json),
                    _ => UpdateTabungTypeResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a tabung type
    ///
    /// Refused while any tabung is still classified under it.
    #[oai(path = "/tabung-type/:id", method = "delete", tag = "ApiTags::TabungType")]
    async fn delete_tabung_type(
        &self,
        tenant: Data<&TenantContext>,
        id: Path<String>,
    ) -> DeleteTabungTypeResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteTabungTypeResponse::BadRequest(invalid_id("tabung_type"));
        };

        match self.service.delete(tenant.0, uuid).await {
            Ok(()) => DeleteTabungTypeResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteTabungTypeResponse::NotFound(json),
                    409 => DeleteTabungTypeResponse::Conflict(json),
                    _ => DeleteTabungTypeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListTabungTypesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<TabungTypeResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTabungTypeResponse {
    #[oai(status = 200)]
    Ok(Json<TabungTypeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateTabungTypeResponse {
    #[oai(status = 201)]
    Created(Json<TabungTypeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateTabungTypeResponse {
    #[oai(status = 200)]
    Ok(Json<TabungTypeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteTabungTypeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
