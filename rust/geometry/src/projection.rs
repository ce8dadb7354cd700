// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Logical → world coordinate projection.
//!
//! Cabinets sit on a regular grid: column maps to X, row maps to Z, and
//! each cabinet is centered vertically on its own half-height. Devices are
//! placed on the cabinet's front face, centered on the slots they occupy.
//! These are pure functions of their inputs; overlapping cabinets are the
//! caller's problem.

use nalgebra::Point3;

use dcim_lite_core::{Cabinet, Device};

use crate::constants::{CABINET_DEPTH, COLUMN_SPACING, FLOOR_Y, ROW_SPACING, U_UNIT_HEIGHT};

/// Vertical placement of a device inside its cabinet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalOffset {
    /// Center of the device, measured up from the cabinet floor.
    pub y: f64,
    /// Height of the device.
    pub height: f64,
}

/// Height of a cabinet with `u_height` slots.
#[inline]
pub fn cabinet_height(u_height: i32) -> f64 {
    f64::from(u_height) * U_UNIT_HEIGHT
}

/// Center of a cabinet at grid position (`row`, `column`).
#[inline]
pub fn cabinet_world_position(row: i32, column: i32, u_height: i32) -> Point3<f64> {
    Point3::new(
        (f64::from(column) - 1.0) * COLUMN_SPACING,
        cabinet_height(u_height) / 2.0,
        (f64::from(row) - 1.0) * ROW_SPACING,
    )
}

/// Center and height of a device spanning `[start_u, end_u]`.
///
/// Slot 1 sits at the bottom, so slot `u` spans
/// `[(u - 1) * U, u * U]` and a run of slots is centered on the midpoint
/// of its first and last slot. Neighbouring devices meet with no gap.
/// Slot arithmetic is done in `f64`, so any pair of `i32` slots projects.
#[inline]
pub fn device_local_offset(start_u: i32, end_u: i32) -> LocalOffset {
    let (start, end) = (f64::from(start_u), f64::from(end_u));
    LocalOffset {
        y: ((start + end) / 2.0 - 0.5) * U_UNIT_HEIGHT,
        height: (end - start + 1.0) * U_UNIT_HEIGHT,
    }
}

/// Center of a device on the front face of the cabinet at `cabinet_pos`.
///
/// Cabinets stand on the floor plane, so the device's height is measured
/// from [`FLOOR_Y`] rather than from the cabinet's vertical center.
#[inline]
pub fn device_world_position(cabinet_pos: &Point3<f64>, start_u: i32, end_u: i32) -> Point3<f64> {
    let local = device_local_offset(start_u, end_u);
    Point3::new(
        cabinet_pos.x,
        FLOOR_Y + local.y,
        cabinet_pos.z + CABINET_DEPTH / 2.0,
    )
}

/// World position of a cabinet record.
#[inline]
pub fn project_cabinet(cabinet: &Cabinet) -> Point3<f64> {
    cabinet_world_position(cabinet.row, cabinet.column, cabinet.u_height)
}

/// World position of a device mounted in `cabinet`.
#[inline]
pub fn project_device(cabinet: &Cabinet, device: &Device) -> Point3<f64> {
    device_world_position(&project_cabinet(cabinet), device.start_u, device.end_u)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn first_cabinet_sits_at_origin() {
        let p = cabinet_world_position(1, 1, 42);
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.z, 0.0);
        assert_relative_eq!(p.y, 42.0 * U_UNIT_HEIGHT / 2.0);
    }

    #[test]
    fn grid_pitch() {
        let p = cabinet_world_position(3, 5, 42);
        assert_relative_eq!(p.x, 4.0 * COLUMN_SPACING);
        assert_relative_eq!(p.z, 2.0 * ROW_SPACING);
    }

    #[test]
    fn single_slot_device_centered_on_slot() {
        let bottom = device_local_offset(1, 1);
        assert_relative_eq!(bottom.y, 0.5 * U_UNIT_HEIGHT);
        assert_relative_eq!(bottom.height, U_UNIT_HEIGHT);

        let tenth = device_local_offset(10, 10);
        assert_relative_eq!(tenth.y, 9.5 * U_UNIT_HEIGHT);
    }

    #[test]
    fn multi_slot_device_spans_its_slots() {
        let offset = device_local_offset(5, 6);
        assert_relative_eq!(offset.height, 2.0 * U_UNIT_HEIGHT);
        assert_relative_eq!(offset.y - offset.height / 2.0, 4.0 * U_UNIT_HEIGHT, epsilon = 1e-12);
        assert_relative_eq!(offset.y + offset.height / 2.0, 6.0 * U_UNIT_HEIGHT, epsilon = 1e-12);
    }

    #[test]
    fn neighbours_meet_without_gap() {
        let lower = device_local_offset(5, 6);
        let upper = device_local_offset(7, 9);
        let lower_top = lower.y + lower.height / 2.0;
        let upper_bottom = upper.y - upper.height / 2.0;
        assert_relative_eq!(lower_top, upper_bottom, epsilon = 1e-12);
    }

    #[test]
    fn full_span_device_is_centered_with_cabinet() {
        for u_height in [1, 2, 24, 42, 48] {
            let cabinet = cabinet_world_position(1, 1, u_height);
            let device = device_local_offset(1, u_height);
            assert_relative_eq!(device.y, cabinet.y, epsilon = 1e-12);
            assert_relative_eq!(device.height, cabinet_height(u_height), epsilon = 1e-12);
        }
    }

    #[test]
    fn device_on_front_face() {
        let cabinet = cabinet_world_position(2, 3, 42);
        let p = device_world_position(&cabinet, 10, 10);
        assert_relative_eq!(p.x, cabinet.x);
        assert_relative_eq!(p.z, cabinet.z + CABINET_DEPTH / 2.0);
        assert_relative_eq!(p.y, 9.5 * U_UNIT_HEIGHT);
    }

    #[test]
    fn device_height_is_measured_from_floor_not_cabinet_center() {
        let local = device_local_offset(20, 23);
        for cabinet_y in [0.0, 0.9345, 5.0, -3.0] {
            let p = device_world_position(&Point3::new(1.6, cabinet_y, 4.8), 20, 23);
            assert_relative_eq!(p.y, FLOOR_Y + local.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn extreme_slots_project_without_overflow() {
        let top = i32::MAX;
        let offset = device_local_offset(top, top);
        assert_relative_eq!(offset.height, U_UNIT_HEIGHT, epsilon = 1e-9);
        assert!(offset.y > 0.0);
        assert_relative_eq!(
            offset.y,
            (f64::from(top) - 0.5) * U_UNIT_HEIGHT,
            max_relative = 1e-12
        );

        let span = device_local_offset(i32::MIN, i32::MAX);
        assert_relative_eq!(
            span.height,
            (2.0 * f64::from(i32::MAX) + 2.0) * U_UNIT_HEIGHT,
            max_relative = 1e-12
        );

        let corner = cabinet_world_position(i32::MIN, i32::MIN, top);
        assert!(corner.x < 0.0 && corner.z < 0.0);
        assert_relative_eq!(
            corner.x,
            (f64::from(i32::MIN) - 1.0) * COLUMN_SPACING,
            max_relative = 1e-12
        );
    }
}
