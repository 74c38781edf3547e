use axum::http::{HeaderValue, Method};
use core_config::Environment;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Environment variable holding comma-separated allowed origins.
pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

/// Creates a CORS layer restricted to the given origins.
///
/// - Common HTTP methods (GET, POST, PUT, DELETE, OPTIONS)
/// - Content-Type and Accept headers
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer for development.
///
/// Allows any origin - **DO NOT USE IN PRODUCTION**.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// - Set: only the listed origins are allowed. Empty or invalid values are an error.
/// - Unset in development: permissive.
/// - Unset in production: no cross-origin access.
pub fn cors_layer_from_env(environment: &Environment) -> io::Result<CorsLayer> {
    let Ok(origins_str) = std::env::var(CORS_ALLOWED_ORIGIN) else {
        if environment.is_development() {
            info!("{} not set, using permissive CORS for development", CORS_ALLOWED_ORIGIN);
            return Ok(create_permissive_cors_layer());
        }
        info!("{} not set, cross-origin requests disabled", CORS_ALLOWED_ORIGIN);
        return Ok(CorsLayer::new());
    };

    let allowed_origins: Vec<HeaderValue> = origins_str
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid {} value: {}", CORS_ALLOWED_ORIGIN, e),
            )
        })?;

    if allowed_origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} cannot be empty", CORS_ALLOWED_ORIGIN),
        ));
    }

    info!("CORS configured with allowed origins: {}", origins_str);
    Ok(create_cors_layer(allowed_origins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_origin_is_allowed_in_both_environments() {
        temp_env::with_var_unset(CORS_ALLOWED_ORIGIN, || {
            assert!(cors_layer_from_env(&Environment::Development).is_ok());
            assert!(cors_layer_from_env(&Environment::Production).is_ok());
        });
    }

    #[test]
    fn test_origin_list_is_parsed() {
        temp_env::with_var(
            CORS_ALLOWED_ORIGIN,
            Some("http://localhost:3000, https://shop.example.com"),
            || {
                assert!(cors_layer_from_env(&Environment::Production).is_ok());
            },
        );
    }

    #[test]
    fn test_blank_origin_list_is_rejected() {
        temp_env::with_var(CORS_ALLOWED_ORIGIN, Some(" , "), || {
            let err = cors_layer_from_env(&Environment::Production).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        });
    }
}
