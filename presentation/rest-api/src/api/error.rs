use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every failing endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error family, e.g. `ValidationError` or `NotFound`
    pub name: String,
    /// Code-style message, e.g. `product.invalid_price_range`
    pub message: String,
}

/// Maps a domain error to the HTTP status and body a handler returns.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
