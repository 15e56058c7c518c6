use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ShoppingListError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ShoppingListError::ProductNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ShoppingListError::InvalidQuantity(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            ShoppingListError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, ErrorResponse::new(name, self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_missing_row_to_not_found() {
        let (status, json) = ShoppingListError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "shopping_list.not_found");
    }

    #[test]
    fn should_map_remote_failure_to_internal_error() {
        let (status, json) =
            ShoppingListError::Repository(RepositoryError::persistence()).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
        assert_eq!(json.0.message, "repository.persistence");
    }
}
