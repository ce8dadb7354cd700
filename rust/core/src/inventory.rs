// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory snapshot of the entities supplied by the data services.
//!
//! Device lists arrive per cabinet and replace whatever was loaded before,
//! wholesale. Nothing here orders overlapping loads: if two loads for the
//! same cabinet complete out of order, the one applied last wins even when
//! it carries older data.

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::model::{Cabinet, CabinetId, Datacenter, DatacenterId, Device, DeviceId, EntityRef};
use crate::occupancy::{summarize, OccupancySummary};

/// Datacenters, cabinets and their devices.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    datacenters: FxHashMap<DatacenterId, Datacenter>,
    cabinets: FxHashMap<CabinetId, Cabinet>,
    devices: FxHashMap<CabinetId, Vec<Device>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a datacenter.
    pub fn insert_datacenter(&mut self, datacenter: Datacenter) {
        self.datacenters.insert(datacenter.id, datacenter);
    }

    /// Inserts or replaces a cabinet record. Its device list is untouched.
    pub fn insert_cabinet(&mut self, cabinet: Cabinet) {
        self.cabinets.insert(cabinet.id, cabinet);
    }

    /// Replaces the device list of `cabinet_id`, returning the previous one.
    pub fn replace_devices(&mut self, cabinet_id: CabinetId, devices: Vec<Device>) -> Vec<Device> {
        self.devices.insert(cabinet_id, devices).unwrap_or_default()
    }

    pub fn datacenter(&self, id: DatacenterId) -> Result<&Datacenter> {
        self.datacenters.get(&id).ok_or(Error::DatacenterNotFound(id))
    }

    pub fn cabinet(&self, id: CabinetId) -> Result<&Cabinet> {
        self.cabinets.get(&id).ok_or(Error::CabinetNotFound(id))
    }

    /// Looks a device up across every loaded cabinet.
    ///
    /// An id loaded into several cabinets resolves to the one under the
    /// lowest cabinet id, then to its first occurrence in that list.
    pub fn device(&self, id: DeviceId) -> Result<&Device> {
        self.devices
            .iter()
            .filter_map(|(cabinet_id, devices)| {
                devices
                    .iter()
                    .find(|device| device.id == id)
                    .map(|device| (*cabinet_id, device))
            })
            .min_by_key(|(cabinet_id, _)| *cabinet_id)
            .map(|(_, device)| device)
            .ok_or(Error::DeviceNotFound(id))
    }

    /// Devices loaded for a cabinet; empty if none were loaded yet.
    pub fn devices_in(&self, cabinet_id: CabinetId) -> &[Device] {
        self.devices
            .get(&cabinet_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Cabinets sorted by id.
    pub fn cabinets(&self) -> Vec<&Cabinet> {
        let mut cabinets: Vec<&Cabinet> = self.cabinets.values().collect();
        cabinets.sort_by_key(|cabinet| cabinet.id);
        cabinets
    }

    /// Cabinets standing in `datacenter_id`, sorted by id.
    pub fn cabinets_in(&self, datacenter_id: DatacenterId) -> Vec<&Cabinet> {
        let mut cabinets: Vec<&Cabinet> = self
            .cabinets
            .values()
            .filter(|cabinet| cabinet.datacenter_id == Some(datacenter_id))
            .collect();
        cabinets.sort_by_key(|cabinet| cabinet.id);
        cabinets
    }

    /// The cabinet an entity lives in. A cabinet owns itself.
    pub fn owning_cabinet(&self, entity: EntityRef) -> Result<&Cabinet> {
        match entity {
            EntityRef::Cabinet(id) => self.cabinet(id),
            EntityRef::Device(id) => {
                let device = self.device(id)?;
                self.cabinet(device.cabinet_id)
            }
        }
    }

    /// Resolves a free-text search to an entity.
    ///
    /// Case-insensitive substring match on device names first (lowest id
    /// wins), then on cabinet names. Blank keywords match nothing.
    pub fn find_by_keyword(&self, keyword: &str) -> Option<EntityRef> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let device = self
            .devices
            .values()
            .flatten()
            .filter(|device| device.name.to_lowercase().contains(&needle))
            .map(|device| device.id)
            .min();
        if let Some(id) = device {
            return Some(EntityRef::Device(id));
        }

        self.cabinets
            .values()
            .filter(|cabinet| cabinet.name.to_lowercase().contains(&needle))
            .map(|cabinet| cabinet.id)
            .min()
            .map(EntityRef::Cabinet)
    }

    /// Occupancy recomputed from the loaded device list of a cabinet.
    pub fn occupancy(&self, cabinet_id: CabinetId) -> Result<OccupancySummary> {
        let cabinet = self.cabinet(cabinet_id)?;
        Ok(summarize(cabinet, self.devices_in(cabinet_id)))
    }
}
