use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::pantry::errors::PantryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PantryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            PantryError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            PantryError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, ErrorResponse::new(name, self))
    }
}
