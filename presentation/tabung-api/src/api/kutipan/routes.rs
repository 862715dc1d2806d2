use std::sync::Arc;

use chrono::{DateTime, Utc};
use poem::web::Data;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::crud::ResourceService;
use business::domain::kutipan::errors::KutipanError;
use business::domain::kutipan::model::Kutipan;
use business::domain::kutipan::repository::CollectionRange;
use business::domain::kutipan::use_cases::list_by_tabung::{
    ListKutipanByTabungParams, ListKutipanByTabungUseCase,
};
use business::domain::tenant::model::TenantContext;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_body, invalid_id};
use crate::api::kutipan::dto::{
    CreateKutipanRequest, KutipanResponse, TabungCollectionResponse, UpdateKutipanRequest,
};
use crate::api::tags::ApiTags;

pub struct KutipanApi {
    service: Arc<dyn ResourceService<Kutipan>>,
    list_by_tabung_use_case: Arc<dyn ListKutipanByTabungUseCase>,
}

impl KutipanApi {
    pub fn new(
        service: Arc<dyn ResourceService<Kutipan>>,
        list_by_tabung_use_case: Arc<dyn ListKutipanByTabungUseCase>,
    ) -> Self {
        Self {
            service,
            list_by_tabung_use_case,
        }
    }
}

/// Kutipan management API
///
/// Contributions collected for a tabung. Amounts are in sen.
#[OpenApi]
impl KutipanApi {
    /// List kutipan
    #[oai(path = "/kutipan", method = "get", tag = "ApiTags::Kutipan")]
    async fn list_kutipan(&self, tenant: Data<&TenantContext>) -> ListKutipanResponse {
        match self.service.list(tenant.0).await {
            Ok(entries) => ListKutipanResponse::Ok(Json(
                entries.into_iter().map(KutipanResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListKutipanResponse::InternalError(json)
            }
        }
    }

    /// List kutipan of one tabung
    ///
    /// Entries oldest first, optionally bounded by `from` and `to`
    /// (RFC 3339, inclusive), together with their total.
    #[oai(
        path = "/kutipan/tabung/:tabung_id",
        method = "get",
        tag = "ApiTags::Kutipan"
    )]
    async fn list_kutipan_by_tabung(
        &self,
        tenant: Data<&TenantContext>,
        tabung_id: Path<String>,
        from: Query<Option<DateTime<Utc>>>,
        to: Query<Option<DateTime<Utc>>>,
    ) -> ListKutipanByTabungResponse {
        let Ok(tabung_id) = Uuid::parse_str(&tabung_id.0) else {
            return ListKutipanByTabungResponse::BadRequest(invalid_id("tabung"));
        };

        let params = ListKutipanByTabungParams {
            tabung_id,
            range: CollectionRange {
                from: from.0,
                to: to.0,
            },
        };

        match self.list_by_tabung_use_case.execute(tenant.0, params).await {
            Ok(collection) => ListKutipanByTabungResponse::Ok(Json(collection.into())),
            // The fund in the path is the resource being read here.
            Err(KutipanError::TabungNotFound) => ListKutipanByTabungResponse::NotFound(
                error_body("NotFound", "kutipan.tabung_not_found"),
            ),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListKutipanByTabungResponse::BadRequest(json),
                    _ => ListKutipanByTabungResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a kutipan by ID
    #[oai(path = "/kutipan/:id", method = "get", tag = "ApiTags::Kutipan")]
    async fn get_kutipan(
        &self,
        tenant: Data<&TenantContext>,
        id: Path<String>,
    ) -> GetKutipanResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetKutipanResponse::BadRequest(invalid_id("kutipan"));
        };

        match self.service.get(tenant.0, uuid).await {
            Ok(kutipan) => GetKutipanResponse::Ok(Json(kutipan.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetKutipanResponse::NotFound(json),
                    _ => GetKutipanResponse::InternalError(json),
                }
            }
        }
    }

    /// Record a kutipan
    ///
    /// The tabung must exist and, when it has a period, `collected_at` must
    /// fall inside it.
    #[oai(path = "/kutipan", method = "post", tag = "ApiTags::Kutipan")]
    async fn create_kutipan(
        &self,
        tenant: Data<&TenantContext>,
        body: Json<CreateKutipanRequest>,
    ) -> CreateKutipanResponse {
        match self.service.create(tenant.0, body.0.into()).await {
            Ok(kutipan) => CreateKutipanResponse::Created(Json(kutipan.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateKutipanResponse::BadRequest(json),
                    409 => CreateKutipanResponse::Conflict(json),
                    422 => CreateKutipanResponse::UnprocessableEntity(json),
                    _ => CreateKutipanResponse::InternalError(json),
                }
            }
        }
    }

    /// Correct a kutipan
    #[oai(path = "/kutipan/:id", method = "put", tag = "ApiTags::Kutipan")]
    async fn update_kutipan(
        &self,
        tenant: Data<&TenantContext>,
        id: Path<String>,
        body: Json<UpdateKutipanRequest>,
    ) -> UpdateKutipanResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return UpdateKutipanResponse::BadRequest(invalid_id("kutipan"));
        };

        match self.service.update(tenant.0, uuid, body.0.into()).await {
            Ok(kutipan) => UpdateKutipanResponse::Ok(Json(kutipan.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateKutipanResponse::BadRequest(json),
                    404 => UpdateKutipanResponse::NotFound(json),
                    409 => UpdateKutipanResponse::Conflict(json),
                    422 => UpdateKutipanResponse::UnprocessableEntity(json),
                    _ => UpdateKutipanResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a kutipan
    #[oai(path = "/kutipan/:id", method = "delete", tag = "ApiTags::Kutipan")]
    async fn delete_kutipan(
        &self,
        tenant: Data<&TenantContext>,
        id: Path<String>,
    ) -> DeleteKutipanResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return DeleteKutipanResponse::BadRequest(invalid_id("kutipan"));
        };

        match self.service.delete(tenant.0, uuid).await {
            Ok(()) => DeleteKutipanResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteKutipanResponse::NotFound(json),
                    _ => DeleteKutipanResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListKutipanResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<KutipanResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListKutipanByTabungResponse {
    #[oai(status = 200)]
    Ok(Json<TabungCollectionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetKutipanResponse {
    #[oai(status = 200)]
    Ok(Json<KutipanResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateKutipanResponse {
    #[oai(status = 201)]
    Created(Json<KutipanResponse>),
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
pub enum UpdateKutipanResponse {
    #[oai(status = 200)]
    Ok(Json<KutipanResponse>),
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
pub enum DeleteKutipanResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
