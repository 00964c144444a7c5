// ABOUTME: CORS middleware configuration for the HTTP API
// ABOUTME: Builds a tower-http CorsLayer from the configured origin list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Project

//! CORS configuration for web client access

use crate::config::environment::ServerConfig;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

/// Configure CORS for the server
///
/// Origins come from `CORS_ALLOWED_ORIGINS`: the wildcard (or an empty
/// value) allows any origin for development, otherwise a comma-separated
/// origin list is enforced. A list where no entry parses as a header value
/// falls back to allowing any origin rather than locking every client out.
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_origin = if config.cors.allowed_origins.is_empty()
        || config.cors.allowed_origins == "*"
    {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    HeaderValue::from_str(trimmed).ok()
                }
            })
            .collect();
        if origins.is_empty() {
            warn!(
                "No valid origins in CORS_ALLOWED_ORIGINS '{}', allowing any origin",
                config.cors.allowed_origins
            );
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::CorsConfig;
    use axum::{body::Body, routing::get, Router};
    use tower::ServiceExt;

    #[test]
    fn test_wildcard_and_list_configs_build() {
        let mut config = ServerConfig::default();
        let _layer = setup_cors(&config);

        config.cors.allowed_origins = "https://app.example.com, https://admin.example.com".into();
        let _layer = setup_cors(&config);
    }

    #[tokio::test]
    async fn test_unparseable_origin_list_allows_any() {
        let config = ServerConfig {
            cors: CorsConfig {
                allowed_origins: "https://bad\norigin.example".into(),
            },
            ..ServerConfig::default()
        };

        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(setup_cors(&config));
        let request = http::Request::builder()
            .uri("/")
            .header(http::header::ORIGIN, "https://elsewhere.example")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        let allow_origin = response
            .headers()
            .get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok());
        assert_eq!(allow_origin, Some("*"));
    }
}
