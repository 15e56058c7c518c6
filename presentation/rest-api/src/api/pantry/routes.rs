use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::pantry::use_cases::delete::{
    DeletePantryEntryParams, DeletePantryEntryUseCase,
};
use business::domain::pantry::use_cases::get_all::{GetPantryParams, GetPantryUseCase};
use business::domain::pantry::use_cases::update_quantity::{
    UpdatePantryQuantityParams, UpdatePantryQuantityUseCase,
};
use business::domain::shared::value_objects::Quantity;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::pantry::dto::{PantryEntryResponse, UpdatePantryQuantityRequest};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct PantryApi {
    get_all_use_case: Arc<dyn GetPantryUseCase>,
    update_quantity_use_case: Arc<dyn UpdatePantryQuantityUseCase>,
    delete_use_case: Arc<dyn DeletePantryEntryUseCase>,
}

impl PantryApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetPantryUseCase>,
        update_quantity_use_case: Arc<dyn UpdatePantryQuantityUseCase>,
        delete_use_case: Arc<dyn DeletePantryEntryUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            update_quantity_use_case,
            delete_use_case,
        }
    }
}

fn unresolved_owner() -> Json<ErrorResponse> {
    ErrorResponse::new("Unauthorized", "auth.owner_unresolved")
}

/// Pantry API
///
/// Household stock of the authenticated user, one entry per product.
#[OpenApi]
impl PantryApi {
    /// List pantry entries
    #[oai(path = "/pantry", method = "get", tag = "ApiTags::Pantry")]
    async fn get_all(&self, auth: FirebaseBearer) -> GetPantryResponse {
        let Some(owner) = auth.owner() else {
            return GetPantryResponse::Unauthorized(unresolved_owner());
        };

        match self.get_all_use_case.execute(GetPantryParams { owner }).await {
            Ok(entries) => {
                GetPantryResponse::Ok(Json(entries.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetPantryResponse::InternalError(json)
            }
        }
    }

    /// Set the stock of an entry
    #[oai(path = "/pantry/:id", method = "put", tag = "ApiTags::Pantry")]
    async fn update_quantity(
        &self,
        auth: FirebaseBearer,
        id: Path<i64>,
        body: Json<UpdatePantryQuantityRequest>,
    ) -> UpdatePantryQuantityResponse {
        let Some(owner) = auth.owner() else {
            return UpdatePantryQuantityResponse::Unauthorized(unresolved_owner());
        };
        let quantity = match Quantity::parse(&body.0.quantity) {
            Ok(quantity) => quantity,
            Err(err) => {
                return UpdatePantryQuantityResponse::BadRequest(err.into_error_response().1);
            }
        };

        let params = UpdatePantryQuantityParams {
            id: id.0,
            owner,
            quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(entry) => UpdatePantryQuantityResponse::Ok(Json(entry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdatePantryQuantityResponse::NotFound(json),
                    _ => UpdatePantryQuantityResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove an entry
    #[oai(path = "/pantry/:id", method = "delete", tag = "ApiTags::Pantry")]
    async fn delete(&self, auth: FirebaseBearer, id: Path<i64>) -> DeletePantryEntryResponse {
        let Some(owner) = auth.owner() else {
            return DeletePantryEntryResponse::Unauthorized(unresolved_owner());
        };

        match self
            .delete_use_case
            .execute(DeletePantryEntryParams { id: id.0, owner })
            .await
        {
            Ok(()) => DeletePantryEntryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeletePantryEntryResponse::NotFound(json),
                    _ => DeletePantryEntryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPantryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PantryEntryResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdatePantryQuantityResponse {
    #[oai(status = 200)]
    Ok(Json<PantryEntryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeletePantryEntryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
