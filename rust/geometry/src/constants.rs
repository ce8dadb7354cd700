// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Physical constants of the floor plan, in world units (meters).

/// Height of one rack unit (1.75 in).
pub const U_UNIT_HEIGHT: f64 = 0.0445;

/// Cabinet footprint along X.
pub const CABINET_WIDTH: f64 = 0.6;

/// Cabinet footprint along Z.
pub const CABINET_DEPTH: f64 = 1.0;

/// Distance between neighbouring cabinet centers in a row.
pub const COLUMN_SPACING: f64 = 0.8;

/// Distance between cabinet rows, center to center (cabinet depth plus aisle).
pub const ROW_SPACING: f64 = 2.4;

/// Height of the floor plane cabinets stand on.
pub const FLOOR_Y: f64 = 0.0;
