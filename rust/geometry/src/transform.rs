// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rotation of a subject about a vertical axis through a pivot.
//!
//! The pivot is a height in the subject's local frame: the cabinet body
//! turns about half its own height, a zoomed device about its own center.
//! Angles are in radians and unbounded.

use nalgebra::{Matrix4, Point3, Rotation3, Vector3};

/// Local-frame transform turning a subject by `angle` about the vertical
/// axis through `(0, pivot, 0)`.
///
/// The axis is vertical, so the shift along it commutes with the rotation
/// and the matrix equals a plain rotation about Y whatever `pivot` is. The
/// pivot only matters to a renderer that parents the subject at that
/// height.
pub fn pivot_transform(pivot: f64, angle: f64) -> Matrix4<f64> {
    let to_pivot = Matrix4::new_translation(&Vector3::new(0.0, -pivot, 0.0));
    let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), angle).to_homogeneous();
    let from_pivot = Matrix4::new_translation(&Vector3::new(0.0, pivot, 0.0));
    from_pivot * rotation * to_pivot
}

/// Applies [`pivot_transform`] to a single point.
pub fn rotate_about_pivot(point: &Point3<f64>, pivot: f64, angle: f64) -> Point3<f64> {
    pivot_transform(pivot, angle).transform_point(point)
}
