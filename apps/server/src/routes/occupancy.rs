// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Occupancy endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use dcim_lite_core::{summarize, OccupancySummary};

use crate::error::ApiError;
use crate::types::{ensure_cabinet_size, ensure_devices_in, OccupancyRequest};
use crate::AppState;

/// POST /api/v1/occupancy - Recompute a cabinet's occupancy.
///
/// The cabinet's own `used_u` is echoed back as `reported_used_u` and never
/// trusted.
pub async fn occupancy(
    State(state): State<AppState>,
    payload: Result<Json<OccupancyRequest>, JsonRejection>,
) -> Result<Json<OccupancySummary>, ApiError> {
    let Json(request) = payload?;
    ensure_cabinet_size(&request.cabinet, state.config.max_u_height)?;
    ensure_devices_in(&request.cabinet, &request.devices)?;

    let cabinet_id = request.cabinet.id;
    let summary =
        tokio::task::spawn_blocking(move || summarize(&request.cabinet, &request.devices)).await?;

    if !summary.overlaps.is_empty() {
        tracing::warn!(
            cabinet = %cabinet_id,
            overlaps = summary.overlaps.len(),
            "Cabinet has overlapping devices"
        );
    }
    if summary.used_u != summary.reported_used_u {
        tracing::debug!(
            cabinet = %cabinet_id,
            used_u = summary.used_u,
            reported_used_u = summary.reported_used_u,
            "Reported occupancy is stale"
        );
    }

    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::fixtures::{cabinet, device, state};
    use dcim_lite_core::{CabinetId, SlotRange};

    #[tokio::test]
    async fn recomputes_free_runs_and_utilization() {
        let request = OccupancyRequest {
            cabinet: cabinet(42),
            devices: vec![device(1, 5, 6), device(2, 10, 10)],
        };
        let Json(summary) = occupancy(State(state()), Ok(Json(request))).await.unwrap();

        assert_eq!(
            summary.free_runs,
            vec![
                SlotRange::new(1, 4),
                SlotRange::new(7, 9),
                SlotRange::new(11, 42)
            ]
        );
        assert_eq!(summary.used_u, 3);
        assert_eq!(summary.largest_free_run, Some(SlotRange::new(11, 42)));
        assert!((summary.utilization - 3.0 / 42.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn reports_overlaps() {
        let request = OccupancyRequest {
            cabinet: cabinet(42),
            devices: vec![device(1, 5, 8), device(2, 7, 9)],
        };
        let Json(summary) = occupancy(State(state()), Ok(Json(request))).await.unwrap();
        assert_eq!(summary.overlaps.len(), 1);
        assert_eq!(summary.overlaps[0].range, SlotRange::new(7, 8));
    }

    #[tokio::test]
    async fn rejects_devices_from_other_cabinets() {
        let mut stray = device(9, 1, 1);
        stray.cabinet_id = CabinetId(2);
        let request = OccupancyRequest {
            cabinet: cabinet(42),
            devices: vec![stray],
        };
        let err = occupancy(State(state()), Ok(Json(request))).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn rejects_cabinets_above_the_slot_limit() {
        let request = OccupancyRequest {
            cabinet: cabinet(400_000_000),
            devices: Vec::new(),
        };
        let err = occupancy(State(state()), Ok(Json(request)))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }
}
