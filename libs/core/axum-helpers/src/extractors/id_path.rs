//! Integer id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for numeric `{id}` path parameters.
///
/// Parses the segment as a non-negative integer (surrounding whitespace is
/// ignored) and rejects anything else with `400 id must be a valid number`
/// before the handler body runs.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_item(IdPath(id): IdPath) -> String {
///     format!("Item {}", id)
/// }
///
/// let app = Router::new().route("/items/{id}", get(get_item));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub u64);

impl IdPath {
    /// Parse a raw path segment.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        raw.trim()
            .parse::<u64>()
            .map(IdPath)
            .map_err(|_| AppError::InvalidId(raw.to_string()))
    }
}

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        IdPath::parse(&raw).map_err(IntoResponse::into_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(IdPath::parse("6").unwrap(), IdPath(6));
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        assert_eq!(IdPath::parse(" 12 ").unwrap(), IdPath(12));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for raw in ["abc", "", "1.5", "-3", "6abc"] {
            let err = IdPath::parse(raw).unwrap_err();
            assert!(matches!(err, AppError::InvalidId(ref r) if r == raw), "{raw}");
        }
    }
}
