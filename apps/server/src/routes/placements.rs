// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement search and validation endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use dcim_lite_core::{find_available_starts_excluding, Device, DeviceId, SlotRange};

use crate::error::ApiError;
use crate::types::{
    ensure_cabinet_size, ensure_devices_in, PlacementRequest, PlacementResponse, ValidateRequest,
    ValidateResponse,
};
use crate::AppState;

/// POST /api/v1/placements - Every start slot where a device fits.
pub async fn available(
    State(state): State<AppState>,
    payload: Result<Json<PlacementRequest>, JsonRejection>,
) -> Result<Json<PlacementResponse>, ApiError> {
    let Json(request) = payload?;
    ensure_cabinet_size(&request.cabinet, state.config.max_u_height)?;
    ensure_devices_in(&request.cabinet, &request.devices)?;
    if request.height < 1 {
        return Err(ApiError::InvalidRequest(format!(
            "height must be at least 1, got {}",
            request.height
        )));
    }

    let (cabinet_id, height) = (request.cabinet.id, request.height);
    let starts = tokio::task::spawn_blocking(move || {
        find_available_starts_excluding(
            request.cabinet.u_height,
            &request.devices,
            request.height,
            request.exclude,
        )
    })
    .await?;
    tracing::debug!(
        cabinet = %cabinet_id,
        height,
        found = starts.len(),
        "Placement search"
    );

    Ok(Json(PlacementResponse { starts }))
}

/// POST /api/v1/placements/validate - Check one candidate range.
pub async fn validate(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let Json(request) = payload?;
    ensure_cabinet_size(&request.cabinet, state.config.max_u_height)?;
    ensure_devices_in(&request.cabinet, &request.devices)?;

    let reason = rejection_reason(
        request.cabinet.u_height,
        &request.devices,
        request.candidate,
        request.exclude,
    );

    Ok(Json(ValidateResponse {
        valid: reason.is_none(),
        reason,
    }))
}

/// Why `candidate` cannot be placed, or `None` if it can.
///
/// Agrees with [`dcim_lite_core::is_placement_valid`]; the first blocking
/// device by slot order is named.
fn rejection_reason(
    u_height: i32,
    devices: &[Device],
    candidate: SlotRange,
    exclude: Option<DeviceId>,
) -> Option<String> {
    if candidate.is_empty() {
        return Some(format!(
            "start_u {} is above end_u {}",
            candidate.start_u, candidate.end_u
        ));
    }
    if !candidate.fits_within(u_height) {
        return Some(format!("{candidate} is outside U1-U{u_height}"));
    }

    devices
        .iter()
        .filter(|device| Some(device.id) != exclude)
        .filter(|device| candidate.intersect(&device.slots()).is_some())
        .min_by_key(|device| (device.start_u, device.id))
        .map(|device| format!("{candidate} overlaps {} ({})", device.id, device.name))
}
