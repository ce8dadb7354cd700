// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor projection endpoint.

use axum::{extract::rejection::JsonRejection, Json};
use dcim_lite_core::{Cabinet, CabinetId, Error as CoreError};
use dcim_lite_geometry::{
    cabinet_height, device_local_offset, device_world_position, project_cabinet, FloorBounds,
};
use rustc_hash::FxHashMap;

use crate::error::ApiError;
use crate::types::{
    to_array, CabinetProjection, DeviceProjection, Extent, ProjectionRequest, ProjectionResponse,
};

/// POST /api/v1/projection - World positions for a set of cabinets and
/// their devices.
pub async fn projection(
    payload: Result<Json<ProjectionRequest>, JsonRejection>,
) -> Result<Json<ProjectionResponse>, ApiError> {
    let Json(request) = payload?;
    if request.cabinets.is_empty() {
        return Err(ApiError::InvalidRequest(
            "at least one cabinet is required".into(),
        ));
    }

    tracing::info!(
        cabinets = request.cabinets.len(),
        devices = request.devices.len(),
        "Projecting floor"
    );

    // Large floors project on the blocking pool.
    let response = tokio::task::spawn_blocking(move || project(&request)).await??;

    Ok(Json(response))
}

fn project(request: &ProjectionRequest) -> Result<ProjectionResponse, ApiError> {
    let mut by_id: FxHashMap<CabinetId, &Cabinet> = FxHashMap::default();
    let mut cabinets = Vec::with_capacity(request.cabinets.len());
    for cabinet in &request.cabinets {
        if by_id.insert(cabinet.id, cabinet).is_some() {
            return Err(ApiError::InvalidRequest(format!(
                "{} listed more than once",
                cabinet.id
            )));
        }
        cabinets.push(CabinetProjection {
            id: cabinet.id,
            position: to_array(&project_cabinet(cabinet)),
            height: cabinet_height(cabinet.u_height),
        });
    }

    let mut centers = FxHashMap::default();
    let mut devices = Vec::with_capacity(request.devices.len());
    for device in &request.devices {
        let cabinet = by_id
            .get(&device.cabinet_id)
            .ok_or(CoreError::CabinetNotFound(device.cabinet_id))?;
        let center = centers
            .entry(cabinet.id)
            .or_insert_with(|| project_cabinet(cabinet));
        devices.push(DeviceProjection {
            id: device.id,
            cabinet_id: cabinet.id,
            position: to_array(&device_world_position(center, device.start_u, device.end_u)),
            height: device_local_offset(device.start_u, device.end_u).height,
        });
    }

    let bounds = FloorBounds::from_cabinets(&request.cabinets);

    Ok(ProjectionResponse {
        cabinets,
        devices,
        extent: Extent::from(&bounds),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::fixtures::{cabinet, device};
    use dcim_lite_geometry::{COLUMN_SPACING, U_UNIT_HEIGHT};

    #[tokio::test]
    async fn full_span_device_sits_at_cabinet_center() {
        let mut second = cabinet(42);
        second.id = CabinetId(2);
        second.column = 3;
        let mut tall = device(7, 1, 42);
        tall.cabinet_id = CabinetId(2);

        let request = ProjectionRequest {
            cabinets: vec![cabinet(42), second],
            devices: vec![tall],
        };
        let Json(response) = projection(Ok(Json(request))).await.unwrap();

        assert_eq!(response.cabinets.len(), 2);
        let cabinet_pos = response.cabinets[1].position;
        assert!((cabinet_pos[0] - 2.0 * COLUMN_SPACING).abs() < 1e-12);

        let device_pos = response.devices[0].position;
        assert!((device_pos[1] - cabinet_pos[1]).abs() < 1e-12);
        assert!((response.devices[0].height - 42.0 * U_UNIT_HEIGHT).abs() < 1e-12);
    }

    #[tokio::test]
    async fn device_in_unknown_cabinet_is_not_found() {
        let mut orphan = device(7, 1, 2);
        orphan.cabinet_id = CabinetId(99);
        let request = ProjectionRequest {
            cabinets: vec![cabinet(42)],
            devices: vec![orphan],
        };
        let err = projection(Ok(Json(request))).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Core(CoreError::CabinetNotFound(CabinetId(99)))
        ));
    }

    #[tokio::test]
    async fn empty_floor_is_rejected() {
        let request = ProjectionRequest {
            cabinets: Vec::new(),
            devices: Vec::new(),
        };
        let err = projection(Ok(Json(request))).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn duplicate_cabinets_are_rejected() {
        let request = ProjectionRequest {
            cabinets: vec![cabinet(42), cabinet(42)],
            devices: Vec::new(),
        };
        let err = projection(Ok(Json(request))).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }
}
