// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inventory entities: datacenters, cabinets, devices and slot ranges.
//!
//! Rack units ("U") are numbered from 1 at the bottom of a cabinet. Slot
//! values are signed because the upstream store enforces no schema and
//! may hand over zero or negative indices; the occupancy model clamps
//! them instead of rejecting them.

use std::fmt;

use crate::category::DeviceCategory;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " #{}"), self.0)
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

entity_id!(
    /// Identifier of a datacenter.
    DatacenterId,
    "datacenter"
);
entity_id!(
    /// Identifier of a cabinet.
    CabinetId,
    "cabinet"
);
entity_id!(
    /// Identifier of a device.
    DeviceId,
    "device"
);

/// An inclusive range of rack units `[start_u, end_u]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotRange {
    pub start_u: i32,
    pub end_u: i32,
}

/// A maximal run of free slots, as produced by the occupancy model.
pub type SlotRun = SlotRange;

impl SlotRange {
    #[inline]
    pub const fn new(start_u: i32, end_u: i32) -> Self {
        Self { start_u, end_u }
    }

    /// Range of `height` slots beginning at `start_u`. Saturates at
    /// `i32::MAX` instead of wrapping.
    #[inline]
    pub const fn with_height(start_u: i32, height: i32) -> Self {
        Self::new(start_u, start_u.saturating_add(height.saturating_sub(1)))
    }

    /// Number of slots covered, saturating at `i32::MAX`. Reversed ranges
    /// cover nothing.
    #[inline]
    pub fn len(&self) -> i32 {
        self.end_u
            .saturating_sub(self.start_u)
            .saturating_add(1)
            .max(0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end_u < self.start_u
    }

    #[inline]
    pub fn contains(&self, u: i32) -> bool {
        self.start_u <= u && u <= self.end_u
    }

    /// True when the range lies entirely within `[1, u_height]`.
    #[inline]
    pub fn fits_within(&self, u_height: i32) -> bool {
        1 <= self.start_u && self.start_u <= self.end_u && self.end_u <= u_height
    }

    /// Intersection with `[1, u_height]`, or `None` when nothing remains.
    pub fn clamp_to(&self, u_height: i32) -> Option<SlotRange> {
        self.intersect(&SlotRange::new(1, u_height))
    }

    /// Slots shared by both ranges, or `None` when they are disjoint.
    pub fn intersect(&self, other: &SlotRange) -> Option<SlotRange> {
        let range = SlotRange::new(
            self.start_u.max(other.start_u),
            self.end_u.min(other.end_u),
        );
        (!range.is_empty()).then_some(range)
    }

    /// Iterates over every slot index in the range, bottom to top.
    pub fn slots(&self) -> impl Iterator<Item = i32> {
        self.start_u..=self.end_u
    }
}

impl fmt::Display for SlotRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_u == self.end_u {
            write!(f, "U{}", self.start_u)
        } else {
            write!(f, "U{}-U{}", self.start_u, self.end_u)
        }
    }
}

/// A datacenter hall laid out as a grid of cabinet positions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Datacenter {
    pub id: DatacenterId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Number of cabinet rows on the floor grid.
    pub rows: i32,
    /// Number of cabinet columns on the floor grid.
    pub columns: i32,
}

/// A rack cabinet standing at a grid position on the datacenter floor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cabinet {
    pub id: CabinetId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub datacenter_id: Option<DatacenterId>,
    /// Total slot count.
    pub u_height: i32,
    /// Grid row, 1-based.
    pub row: i32,
    /// Grid column, 1-based.
    pub column: i32,
    /// Occupied slot count as reported upstream. Informational only; use
    /// [`crate::occupancy::summarize`] for the real figure.
    #[cfg_attr(feature = "serde", serde(default))]
    pub used_u: i32,
}

impl Cabinet {
    /// The cabinet's full slot range `[1, u_height]`.
    #[inline]
    pub fn slot_range(&self) -> SlotRange {
        SlotRange::new(1, self.u_height)
    }
}

/// A device mounted in a cabinet over a contiguous slot range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Device {
    pub id: DeviceId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub cabinet_id: CabinetId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: DeviceCategory,
    pub start_u: i32,
    pub end_u: i32,
}

impl Device {
    /// The slots this device claims, exactly as supplied (not clamped).
    #[inline]
    pub fn slots(&self) -> SlotRange {
        SlotRange::new(self.start_u, self.end_u)
    }

    /// Height in rack units. Zero for reversed ranges.
    #[inline]
    pub fn height(&self) -> i32 {
        self.slots().len()
    }
}

/// Something the user can pick or search for on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", content = "id", rename_all = "snake_case")
)]
pub enum EntityRef {
    Cabinet(CabinetId),
    Device(DeviceId),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Cabinet(id) => id.fmt(f),
            EntityRef::Device(id) => id.fmt(f),
        }
    }
}
