// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pointer-drag rotation about a pivot.
//!
//! Horizontal drag distance maps linearly to angle: 100 px is a quarter
//! turn, measured from where the drag started. The angle is unbounded and
//! kept as-is when the pointer is released.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Matrix4;

use dcim_lite_geometry::pivot_transform;

/// Horizontal drag distance that rotates a subject by a quarter turn.
pub const PIXELS_PER_QUARTER_TURN: f64 = 100.0;

/// Rotation state of one subject (a cabinet body or a zoomed device).
#[derive(Debug, Clone, PartialEq)]
pub struct DragRotation {
    angle: f64,
    pivot: f64,
    drag_active: bool,
    drag_start_x: f64,
    angle_at_drag_start: f64,
}

impl DragRotation {
    /// A subject at rest, rotating about the given pivot height.
    pub fn new(pivot: f64) -> Self {
        Self {
            angle: 0.0,
            pivot,
            drag_active: false,
            drag_start_x: 0.0,
            angle_at_drag_start: 0.0,
        }
    }

    /// Current angle in radians.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn pivot(&self) -> f64 {
        self.pivot
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_active
    }

    /// Starts a drag at `pointer_x`.
    pub fn on_pointer_down(&mut self, pointer_x: f64) {
        self.drag_active = true;
        self.drag_start_x = pointer_x;
        self.angle_at_drag_start = self.angle;
        tracing::trace!(pointer_x, angle = self.angle, "Drag started");
    }

    /// Updates the angle for a pointer at `pointer_x`.
    ///
    /// Returns the new angle, or `None` when no drag is active.
    pub fn on_pointer_move(&mut self, pointer_x: f64) -> Option<f64> {
        if !self.drag_active {
            return None;
        }
        let delta_x = pointer_x - self.drag_start_x;
        self.angle = self.angle_at_drag_start + (delta_x / PIXELS_PER_QUARTER_TURN) * FRAC_PI_2;
        Some(self.angle)
    }

    /// Ends the drag. The angle stays where it is.
    pub fn on_pointer_up(&mut self) {
        if self.drag_active {
            tracing::trace!(angle = self.angle, "Drag ended");
        }
        self.drag_active = false;
    }

    /// Local transform a renderer applies to draw the subject at this angle.
    /// See [`pivot_transform`] for what the pivot does and does not change.
    pub fn transform(&self) -> Matrix4<f64> {
        pivot_transform(self.pivot, self.angle)
    }
}
