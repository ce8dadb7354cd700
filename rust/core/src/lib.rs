// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # DCIM-Lite Core
//!
//! Rack-space occupancy model and inventory types for data-center asset
//! management.
//!
//! ## Overview
//!
//! - **Model**: datacenters, cabinets, devices and inclusive slot ranges
//! - **Occupancy**: free slot runs, placement validation and placement search
//! - **Inventory**: the loaded entity snapshot, lookups and keyword search
//!
//! ## Quick Start
//!
//! ```rust
//! use dcim_lite_core::{compute_free_runs, find_available_starts, CabinetId, Device, DeviceCategory, DeviceId, SlotRun};
//!
//! let devices = vec![
//!     Device { id: DeviceId(1), name: "sw-01".into(), cabinet_id: CabinetId(1),
//!              category: DeviceCategory::Switch, start_u: 5, end_u: 6 },
//!     Device { id: DeviceId(2), name: "fw-01".into(), cabinet_id: CabinetId(1),
//!              category: DeviceCategory::Firewall, start_u: 10, end_u: 10 },
//! ];
//!
//! let runs = compute_free_runs(42, &devices);
//! assert_eq!(runs, vec![SlotRun::new(1, 4), SlotRun::new(7, 9), SlotRun::new(11, 42)]);
//!
//! let starts = find_available_starts(42, &devices, 3);
//! assert!(starts.contains(&7) && !starts.contains(&8));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for model and occupancy types

pub mod category;
pub mod error;
pub mod inventory;
pub mod model;
pub mod occupancy;

pub use category::{DeviceCategory, DeviceVisual, PanelStyle};
pub use error::{Error, Result};
pub use inventory::Inventory;
pub use model::{
    Cabinet, CabinetId, Datacenter, DatacenterId, Device, DeviceId, EntityRef, SlotRange, SlotRun,
};
pub use occupancy::{
    compute_free_runs, find_available_starts, find_available_starts_excluding, find_overlaps,
    is_placement_valid, summarize, OccupancyMap, OccupancySummary, Overlap,
};
