// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! DCIM-Lite Server - rack occupancy and floor projection API.
//!
//! A stateless JSON service for the DCIM-Lite console. Each request carries
//! the cabinet records and device lists it concerns; nothing is stored
//! between requests.
//!
//! # Endpoints
//!
//! - `GET /` - API information and view tuning constants
//! - `GET /api/v1/health` - Health check
//! - `POST /api/v1/occupancy` - Free runs, utilization and overlaps
//! - `POST /api/v1/placements` - Start slots for a device of a given height
//! - `POST /api/v1/placements/validate` - Check one candidate slot range
//! - `POST /api/v1/projection` - World positions for cabinets and devices

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod config;
mod error;
mod routes;
mod types;

use config::Config;
use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,tower_http=debug,dcim_lite_server=debug".into()),
        )
        .pretty()
        .init();

    let config = Config::from_env();

    tracing::info!(
        port = config.port,
        max_body_kb = config.max_body_kb,
        request_timeout_secs = config.request_timeout_secs,
        max_u_height = config.max_u_height,
        cors_origins = ?config.cors_origins,
        "Starting DCIM-Lite Server"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState {
        config: Arc::new(config),
    };
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/// Builds the router with all routes and middleware.
fn app(state: AppState) -> Router {
    let config = state.config.clone();

    Router::new()
        // Root endpoint - API information
        .route("/", get(routes::health::info))
        // Health check
        .route("/api/v1/health", get(routes::health::check))
        // Compute endpoints
        .route("/api/v1/occupancy", post(routes::occupancy::occupancy))
        .route("/api/v1/placements", post(routes::placements::available))
        .route(
            "/api/v1/placements/validate",
            post(routes::placements::validate),
        )
        .route("/api/v1/projection", post(routes::projection::projection))
        .fallback(not_found)
        // Middleware
        .layer(DefaultBodyLimit::max(config.max_body_kb * 1024))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_permissive() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorResponse;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(AppState {
            config: Arc::new(Config {
                port: 0,
                max_body_kb: 64,
                request_timeout_secs: 5,
                cors_origins: vec!["*".into()],
                highlight_clear_ms: 3000,
                max_u_height: 100,
            }),
        })
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let response = test_app()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn placements_round_trip_over_http() {
        let body = r#"{
            "cabinet": {"id": 1, "u_height": 42, "row": 1, "column": 1},
            "devices": [
                {"id": 1, "cabinet_id": 1, "category": "server", "start_u": 5, "end_u": 6},
                {"id": 2, "cabinet_id": 1, "category": "Switch", "start_u": 10, "end_u": 10}
            ],
            "height": 3
        }"#;
        let (status, bytes) = post_json("/api/v1/placements", body).await;
        assert_eq!(status, StatusCode::OK);

        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let starts: Vec<i64> = value["starts"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_i64().unwrap())
            .collect();
        assert_eq!(&starts[..3], &[1, 2, 7]);
    }

    #[tokio::test]
    async fn malformed_body_is_a_json_error() {
        let (status, bytes) = post_json("/api/v1/occupancy", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn unknown_category_is_rejected() {
        let body = r#"{
            "cabinet": {"id": 1, "u_height": 42, "row": 1, "column": 1},
            "devices": [
                {"id": 1, "cabinet_id": 1, "category": "toaster", "start_u": 5, "end_u": 6}
            ]
        }"#;
        let (status, _) = post_json("/api/v1/occupancy", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = test_app()
            .oneshot(Request::get("/api/v1/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
