// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for the API.

use dcim_lite_core::{CabinetId, DeviceId};
use dcim_lite_geometry::{FloorBounds, Point3};
use serde::{Deserialize, Serialize};

/// Start slots where the requested device fits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementResponse {
    pub starts: Vec<i32>,
}

/// Placement check outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    /// Why the placement was rejected.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,
}

/// World position of a cabinet center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CabinetProjection {
    pub id: CabinetId,
    pub position: [f64; 3],
    /// Body height in world units.
    pub height: f64,
}

/// World position of a device center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceProjection {
    pub id: DeviceId,
    pub cabinet_id: CabinetId,
    pub position: [f64; 3],
    pub height: f64,
}

/// Axis-aligned box enclosing every projected cabinet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extent {
    pub min: [f64; 3],
    pub max: [f64; 3],
    pub center: [f64; 3],
}

impl From<&FloorBounds> for Extent {
    fn from(bounds: &FloorBounds) -> Self {
        Self {
            min: to_array(&bounds.min),
            max: to_array(&bounds.max),
            center: to_array(&bounds.centroid()),
        }
    }
}

/// Projected floor plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResponse {
    pub cabinets: Vec<CabinetProjection>,
    pub devices: Vec<DeviceProjection>,
    pub extent: Extent,
}

/// Flattens a point for JSON.
pub fn to_array(point: &Point3<f64>) -> [f64; 3] {
    [point.x, point.y, point.z]
}
