// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rack-space occupancy model.
//!
//! Derives free and occupied slots for a cabinet from its device list,
//! validates candidate placements and searches for legal start positions.
//!
//! Every function here is total. Device ranges that fall partly outside
//! `[1, u_height]` contribute only their in-bounds intersection; reversed
//! or fully out-of-bounds ranges contribute nothing. A cabinet with
//! `u_height < 1` has no slots at all.

use std::cmp::Reverse;

use crate::model::{Cabinet, Device, DeviceId, SlotRange, SlotRun};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Occupied slots of one cabinet, kept as sorted disjoint runs.
///
/// Runs are clamped to `[1, u_height]` and merged whenever they overlap or
/// touch, so coverage is a union and marking a slot twice is a no-op. Cost
/// follows the number of devices, not the number of slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMap {
    u_height: i32,
    occupied: Vec<SlotRange>,
}

impl OccupancyMap {
    /// An empty cabinet of `u_height` slots.
    pub fn new(u_height: i32) -> Self {
        Self {
            u_height: u_height.max(0),
            occupied: Vec::new(),
        }
    }

    /// Builds the map from raw slot ranges.
    pub fn from_ranges<I>(u_height: i32, ranges: I) -> Self
    where
        I: IntoIterator<Item = SlotRange>,
    {
        let mut map = Self::new(u_height);
        let u_height = map.u_height;
        map.occupied = ranges
            .into_iter()
            .filter_map(|range| range.clamp_to(u_height))
            .collect();
        map.normalize();
        map
    }

    /// Builds the map from a cabinet's devices, skipping `exclude` if given.
    ///
    /// Exclusion is how an existing device's own placement is re-validated:
    /// without it the device would always collide with itself.
    pub fn from_devices(u_height: i32, devices: &[Device], exclude: Option<DeviceId>) -> Self {
        Self::from_ranges(
            u_height,
            devices
                .iter()
                .filter(|device| Some(device.id) != exclude)
                .map(Device::slots),
        )
    }

    /// Marks the in-bounds part of `range` as occupied.
    pub fn mark(&mut self, range: SlotRange) {
        if let Some(clamped) = range.clamp_to(self.u_height) {
            self.occupied.push(clamped);
            self.normalize();
        }
    }

    /// Sorts and merges overlapping or adjacent runs.
    fn normalize(&mut self) {
        self.occupied.sort_unstable();
        let mut merged: Vec<SlotRange> = Vec::with_capacity(self.occupied.len());
        for range in self.occupied.drain(..) {
            match merged.last_mut() {
                // start_u >= 1 here, so the subtraction cannot overflow.
                Some(last) if range.start_u - 1 <= last.end_u => {
                    last.end_u = last.end_u.max(range.end_u);
                }
                _ => merged.push(range),
            }
        }
        self.occupied = merged;
    }

    #[inline]
    pub fn u_height(&self) -> i32 {
        self.u_height
    }

    /// Maximal occupied runs, ascending by `start_u`.
    #[inline]
    pub fn occupied_runs(&self) -> &[SlotRange] {
        &self.occupied
    }

    /// Slot `u` is covered by at least one device. Out-of-range slots are
    /// never occupied.
    pub fn is_occupied(&self, u: i32) -> bool {
        let index = self.occupied.partition_point(|run| run.end_u < u);
        self.occupied
            .get(index)
            .is_some_and(|run| run.contains(u))
    }

    /// `range` lies inside the cabinet and none of its slots are occupied.
    pub fn is_free(&self, range: SlotRange) -> bool {
        range.fits_within(self.u_height)
            && self.occupied.iter().all(|run| run.intersect(&range).is_none())
    }

    pub fn occupied_count(&self) -> i32 {
        self.occupied.iter().map(SlotRange::len).sum()
    }

    pub fn free_count(&self) -> i32 {
        self.u_height - self.occupied_count()
    }

    /// Maximal runs of free slots, ascending by `start_u`.
    ///
    /// Runs never touch: two free slots with no occupied slot between them
    /// always land in the same run.
    pub fn free_runs(&self) -> Vec<SlotRun> {
        let mut runs = Vec::with_capacity(self.occupied.len() + 1);
        // Widened so a run ending at i32::MAX leaves nothing above it.
        let mut next_free = 1i64;

        for run in &self.occupied {
            if i64::from(run.start_u) > next_free {
                runs.push(SlotRun::new(next_free as i32, run.start_u - 1));
            }
            next_free = i64::from(run.end_u) + 1;
        }

        if next_free <= i64::from(self.u_height) {
            runs.push(SlotRun::new(next_free as i32, self.u_height));
        }

        runs
    }

    /// Every start position where a device of `height` slots fits, ascending.
    ///
    /// A free run of `len` slots offers `len - height + 1` starts.
    pub fn available_starts(&self, height: i32) -> Vec<i32> {
        if height < 1 {
            return Vec::new();
        }

        self.free_runs()
            .into_iter()
            .filter(|run| run.len() >= height)
            .flat_map(|run| run.start_u..=run.end_u - (height - 1))
            .collect()
    }
}

/// Free slot runs of a cabinet holding `devices`.
///
/// For `u_height = 42` with devices at `5-6` and `10`, the result is
/// `[1-4, 7-9, 11-42]`.
pub fn compute_free_runs(u_height: i32, devices: &[Device]) -> Vec<SlotRun> {
    OccupancyMap::from_devices(u_height, devices, None).free_runs()
}

/// Whether `candidate` is a legal placement.
///
/// The candidate must satisfy `1 <= start_u <= end_u <= u_height` and be
/// disjoint from every device except `exclude`.
pub fn is_placement_valid(
    u_height: i32,
    devices: &[Device],
    candidate: SlotRange,
    exclude: Option<DeviceId>,
) -> bool {
    candidate.fits_within(u_height)
        && devices
            .iter()
            .filter(|device| Some(device.id) != exclude)
            .all(|device| candidate.intersect(&device.slots()).is_none())
}

/// Start positions where a device of `height` slots fits, ascending.
///
/// An empty result means there is no contiguous space; it is not an error.
pub fn find_available_starts(u_height: i32, devices: &[Device], height: i32) -> Vec<i32> {
    find_available_starts_excluding(u_height, devices, height, None)
}

/// Like [`find_available_starts`], ignoring the device being moved.
pub fn find_available_starts_excluding(
    u_height: i32,
    devices: &[Device],
    height: i32,
    exclude: Option<DeviceId>,
) -> Vec<i32> {
    OccupancyMap::from_devices(u_height, devices, exclude).available_starts(height)
}

/// Two devices claiming the same slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Overlap {
    /// Lower device id of the pair.
    pub first: DeviceId,
    /// Higher device id of the pair.
    pub second: DeviceId,
    /// Slots claimed by both, clamped to the cabinet.
    pub range: SlotRange,
}

/// Every pair of devices whose in-bounds ranges intersect.
///
/// Pairs are ordered by id within and across overlaps, so the result is
/// the same for any ordering of `devices`.
pub fn find_overlaps(u_height: i32, devices: &[Device]) -> Vec<Overlap> {
    let mut clamped: Vec<(DeviceId, SlotRange)> = devices
        .iter()
        .filter_map(|device| device.slots().clamp_to(u_height).map(|r| (device.id, r)))
        .collect();
    clamped.sort_unstable();

    let mut overlaps = Vec::new();
    for (i, (first, a)) in clamped.iter().enumerate() {
        for (second, b) in &clamped[i + 1..] {
            if let Some(range) = a.intersect(b) {
                overlaps.push(Overlap {
                    first: *first,
                    second: *second,
                    range,
                });
            }
        }
    }

    overlaps
}

/// Occupancy figures recomputed from a cabinet's device list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OccupancySummary {
    pub u_height: i32,
    /// Slots covered by at least one device.
    pub used_u: i32,
    pub free_u: i32,
    /// `used_u` as stored on the cabinet record, which may be stale.
    pub reported_used_u: i32,
    /// `used_u / u_height`, or `0.0` for a cabinet with no slots.
    pub utilization: f64,
    pub free_runs: Vec<SlotRun>,
    /// Longest free run; the lowest one wins ties.
    pub largest_free_run: Option<SlotRun>,
    pub overlaps: Vec<Overlap>,
}

/// Recomputes occupancy for `cabinet` from `devices`.
pub fn summarize(cabinet: &Cabinet, devices: &[Device]) -> OccupancySummary {
    let map = OccupancyMap::from_devices(cabinet.u_height, devices, None);
    let free_runs = map.free_runs();
    let largest_free_run = free_runs
        .iter()
        .copied()
        .min_by_key(|run| (Reverse(run.len()), run.start_u));
    let used_u = map.occupied_count();

    OccupancySummary {
        u_height: map.u_height(),
        used_u,
        free_u: map.free_count(),
        reported_used_u: cabinet.used_u,
        utilization: if map.u_height() > 0 {
            f64::from(used_u) / f64::from(map.u_height())
        } else {
            0.0
        },
        free_runs,
        largest_free_run,
        overlaps: find_overlaps(cabinet.u_height, devices),
    }
}
