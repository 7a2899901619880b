use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ProductError::InvalidInput
            | ProductError::InvalidRange
            | ProductError::InvalidIdentifier
            | ProductError::NoFieldsToUpdate => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::StoreFailure(source) => {
                tracing::error!(error = %source, "store call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
