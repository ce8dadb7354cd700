// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request types for the API.
//!
//! Every request carries the cabinet records and device lists it needs;
//! the server keeps no inventory of its own.

use dcim_lite_core::{Cabinet, Device, DeviceId, SlotRange};
use serde::Deserialize;

use crate::error::ApiError;

/// Body of `POST /api/v1/occupancy`.
#[derive(Debug, Clone, Deserialize)]
pub struct OccupancyRequest {
    pub cabinet: Cabinet,
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// Body of `POST /api/v1/placements`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacementRequest {
    pub cabinet: Cabinet,
    #[serde(default)]
    pub devices: Vec<Device>,
    /// Height in slots of the device to place.
    pub height: i32,
    /// Device being moved, ignored as an obstacle.
    #[serde(default)]
    pub exclude: Option<DeviceId>,
}

/// Body of `POST /api/v1/placements/validate`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    pub cabinet: Cabinet,
    #[serde(default)]
    pub devices: Vec<Device>,
    pub candidate: SlotRange,
    #[serde(default)]
    pub exclude: Option<DeviceId>,
}

/// Body of `POST /api/v1/projection`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionRequest {
    pub cabinets: Vec<Cabinet>,
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// Rejects cabinets taller than `max_u_height` slots.
pub fn ensure_cabinet_size(cabinet: &Cabinet, max_u_height: i32) -> Result<(), ApiError> {
    if cabinet.u_height > max_u_height {
        return Err(ApiError::InvalidRequest(format!(
            "{} has {} slots, above the limit of {}",
            cabinet.id, cabinet.u_height, max_u_height
        )));
    }
    Ok(())
}

/// Rejects devices that claim to live in another cabinet.
pub fn ensure_devices_in(cabinet: &Cabinet, devices: &[Device]) -> Result<(), ApiError> {
    match devices.iter().find(|d| d.cabinet_id != cabinet.id) {
        Some(device) => Err(ApiError::InvalidRequest(format!(
            "{} belongs to {}, not {}",
            device.id, device.cabinet_id, cabinet.id
        ))),
        None => Ok(()),
    }
}
