use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Message returned to clients for every missing product.
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

#[derive(Debug, Error)]
pub enum ProductError {
    /// A client-supplied field is missing or malformed. The message is shown to the client.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Product not found: {0}")]
    NotFound(u64),

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidInput(msg) => AppError::Validation(msg),
            ProductError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            ProductError::InvalidSeed(msg) => AppError::InternalServerError(msg),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
