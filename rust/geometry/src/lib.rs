// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! DCIM-Lite Spatial Projection
//!
//! Maps the logical layout of a datacenter (grid rows and columns, cabinets,
//! rack units) into 3D world coordinates using nalgebra. Rendering is left
//! to the caller; everything here returns plain positions and transforms.

pub mod bounds;
pub mod constants;
pub mod projection;
pub mod transform;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Vector3};

pub use bounds::{floor_extent, FloorBounds};
pub use constants::{
    CABINET_DEPTH, CABINET_WIDTH, COLUMN_SPACING, FLOOR_Y, ROW_SPACING, U_UNIT_HEIGHT,
};
pub use projection::{
    cabinet_height, cabinet_world_position, device_local_offset, device_world_position,
    project_cabinet, project_device, LocalOffset,
};
pub use transform::{pivot_transform, rotate_about_pivot};
