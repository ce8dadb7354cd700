// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor-plan bounds.
//!
//! Used to size the floor plane under a datacenter grid and to pick a
//! default camera aim point that frames every cabinet.

use nalgebra::Point3;

use dcim_lite_core::Cabinet;

use crate::constants::{CABINET_DEPTH, CABINET_WIDTH, COLUMN_SPACING, FLOOR_Y, ROW_SPACING};
use crate::projection::{cabinet_height, project_cabinet};

/// Axis-aligned bounds in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorBounds {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
    /// Number of boxes merged in.
    pub sample_count: usize,
}

impl FloorBounds {
    /// Bounds with no content.
    pub fn new() -> Self {
        Self {
            min: Point3::new(f64::MAX, f64::MAX, f64::MAX),
            max: Point3::new(f64::MIN, f64::MIN, f64::MIN),
            sample_count: 0,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.sample_count > 0
    }

    /// Grows the bounds to include the box `[min, max]`.
    pub fn expand(&mut self, min: Point3<f64>, max: Point3<f64>) {
        self.min = self.min.inf(&min);
        self.max = self.max.sup(&max);
        self.sample_count += 1;
    }

    /// Center of the bounds, or the origin when empty.
    pub fn centroid(&self) -> Point3<f64> {
        if !self.is_valid() {
            return Point3::origin();
        }
        nalgebra::center(&self.min, &self.max)
    }

    /// Extent along (x, y, z), zero when empty.
    pub fn size(&self) -> (f64, f64, f64) {
        if !self.is_valid() {
            return (0.0, 0.0, 0.0);
        }
        let d = self.max - self.min;
        (d.x, d.y, d.z)
    }

    /// Bounds enclosing every cabinet body.
    pub fn from_cabinets<'a, I>(cabinets: I) -> Self
    where
        I: IntoIterator<Item = &'a Cabinet>,
    {
        let mut bounds = Self::new();
        for cabinet in cabinets {
            let center = project_cabinet(cabinet);
            let half_height = cabinet_height(cabinet.u_height) / 2.0;
            bounds.expand(
                Point3::new(
                    center.x - CABINET_WIDTH / 2.0,
                    center.y - half_height,
                    center.z - CABINET_DEPTH / 2.0,
                ),
                Point3::new(
                    center.x + CABINET_WIDTH / 2.0,
                    center.y + half_height,
                    center.z + CABINET_DEPTH / 2.0,
                ),
            );
        }
        bounds
    }
}

impl Default for FloorBounds {
    fn default() -> Self {
        Self::new()
    }
}

/// Floor footprint of a `rows` × `columns` grid, flat on the floor plane.
///
/// Empty for a grid with no rows or no columns.
pub fn floor_extent(rows: i32, columns: i32) -> FloorBounds {
    let mut bounds = FloorBounds::new();
    if rows < 1 || columns < 1 {
        return bounds;
    }
    bounds.expand(
        Point3::new(-CABINET_WIDTH / 2.0, FLOOR_Y, -CABINET_DEPTH / 2.0),
        Point3::new(
            (f64::from(columns) - 1.0) * COLUMN_SPACING + CABINET_WIDTH / 2.0,
            FLOOR_Y,
            (f64::from(rows) - 1.0) * ROW_SPACING + CABINET_DEPTH / 2.0,
        ),
    );
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use dcim_lite_core::CabinetId;

    fn cabinet(row: i32, column: i32, u_height: i32) -> Cabinet {
        Cabinet {
            id: CabinetId((row * 100 + column) as u64),
            name: String::new(),
            datacenter_id: None,
            u_height,
            row,
            column,
            used_u: 0,
        }
    }

    #[test]
    fn empty_bounds() {
        let bounds = FloorBounds::new();
        assert!(!bounds.is_valid());
        assert_eq!(bounds.centroid(), Point3::origin());
        assert_eq!(bounds.size(), (0.0, 0.0, 0.0));
        assert!(!floor_extent(0, 4).is_valid());
    }

    #[test]
    fn single_cell_extent_is_one_footprint() {
        let (w, h, d) = floor_extent(1, 1).size();
        assert_relative_eq!(w, CABINET_WIDTH);
        assert_relative_eq!(h, 0.0);
        assert_relative_eq!(d, CABINET_DEPTH);
    }

    #[test]
    fn grid_extent_centroid() {
        let bounds = floor_extent(3, 5);
        let c = bounds.centroid();
        assert_relative_eq!(c.x, 2.0 * COLUMN_SPACING, epsilon = 1e-12);
        assert_relative_eq!(c.z, ROW_SPACING, epsilon = 1e-12);
    }

    #[test]
    fn cabinet_bounds_cover_tallest_cabinet() {
        let cabinets = [cabinet(1, 1, 42), cabinet(2, 3, 48)];
        let bounds = FloorBounds::from_cabinets(&cabinets);
        assert_eq!(bounds.sample_count, 2);
        assert_relative_eq!(bounds.min.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max.y, cabinet_height(48), epsilon = 1e-12);
        assert_relative_eq!(bounds.max.x, 2.0 * COLUMN_SPACING + CABINET_WIDTH / 2.0);
    }
}
