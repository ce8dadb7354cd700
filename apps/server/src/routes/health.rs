// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Health check and API information endpoints.

use axum::{extract::State, Json};
use dcim_lite_engine::{
    DEFAULT_DAMPING, DEFAULT_EPSILON, DEFAULT_FOCUS_OFFSET, PIXELS_PER_QUARTER_TURN,
};
use dcim_lite_geometry::U_UNIT_HEIGHT;
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
}

/// API information response.
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: Vec<EndpointInfo>,
    /// Tallest cabinet the compute endpoints accept.
    pub max_u_height: i32,
    pub view: ViewTuning,
}

/// Endpoint information.
#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Interaction constants the console should use so its floor plan matches
/// the server's projection.
#[derive(Debug, Serialize)]
pub struct ViewTuning {
    pub u_unit_height: f64,
    pub focus_offset: [f64; 3],
    pub damping: f64,
    pub arrival_epsilon: f64,
    pub pixels_per_quarter_turn: f64,
    pub highlight_clear_ms: u64,
}

/// GET /api/v1/health - Health check endpoint.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "dcim-lite-server",
    })
}

/// GET / - API information endpoint.
pub async fn info(State(state): State<AppState>) -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        service: "dcim-lite-server",
        version: env!("CARGO_PKG_VERSION"),
        description: "Rack occupancy and floor projection for the DCIM-Lite console",
        endpoints: vec![
            EndpointInfo {
                method: "GET",
                path: "/api/v1/health",
                description: "Health check endpoint",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/occupancy",
                description: "Free runs, utilization and overlaps for one cabinet",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/placements",
                description: "Start slots where a device of a given height fits",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/placements/validate",
                description: "Check a candidate slot range",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/projection",
                description: "World positions for cabinets and devices",
            },
        ],
        max_u_height: state.config.max_u_height,
        view: ViewTuning {
            u_unit_height: U_UNIT_HEIGHT,
            focus_offset: DEFAULT_FOCUS_OFFSET,
            damping: DEFAULT_DAMPING,
            arrival_epsilon: DEFAULT_EPSILON,
            pixels_per_quarter_turn: PIXELS_PER_QUARTER_TURN,
            highlight_clear_ms: state.config.highlight_clear_ms,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::sync::Arc;

    #[tokio::test]
    async fn health_reports_healthy() {
        let Json(health) = check().await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "dcim-lite-server");
    }

    #[tokio::test]
    async fn info_reports_configured_highlight_delay() {
        let state = AppState {
            config: Arc::new(Config {
                port: 0,
                max_body_kb: 16,
                request_timeout_secs: 1,
                cors_origins: Vec::new(),
                highlight_clear_ms: 1500,
                max_u_height: 100,
            }),
        };
        let Json(info) = info(State(state)).await;
        assert_eq!(info.view.highlight_clear_ms, 1500);
        assert_eq!(info.endpoints.len(), 5);
    }
}
