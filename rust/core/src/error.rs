// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for inventory lookups and category parsing.
//!
//! Occupancy queries never fail: malformed ranges are clamped instead.
//! Errors only arise when a caller names an entity the inventory does
//! not hold, or hands over a category string outside the closed set.

use crate::model::{CabinetId, DatacenterId, DeviceId};

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A referenced cabinet is not in the inventory.
    #[error("cabinet not found: {0}")]
    CabinetNotFound(CabinetId),

    /// A referenced device is not in the inventory.
    #[error("device not found: {0}")]
    DeviceNotFound(DeviceId),

    /// A referenced datacenter is not in the inventory.
    #[error("datacenter not found: {0}")]
    DatacenterNotFound(DatacenterId),

    /// A device category string outside the known set.
    #[error("unknown device category: {0:?}")]
    UnknownCategory(String),
}
