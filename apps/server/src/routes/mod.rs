// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP route handlers.

pub mod health;
pub mod occupancy;
pub mod placements;
pub mod projection;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use dcim_lite_core::{Cabinet, CabinetId, Device, DeviceCategory, DeviceId};

    use crate::config::Config;
    use crate::AppState;

    pub fn state() -> AppState {
        AppState {
            config: Arc::new(Config {
                port: 0,
                max_body_kb: 64,
                request_timeout_secs: 5,
                cors_origins: Vec::new(),
                highlight_clear_ms: 3000,
                max_u_height: 100,
            }),
        }
    }

    pub fn cabinet(u_height: i32) -> Cabinet {
        Cabinet {
            id: CabinetId(1),
            name: "A01".into(),
            datacenter_id: None,
            u_height,
            row: 1,
            column: 1,
            used_u: 0,
        }
    }

    pub fn device(id: u64, start_u: i32, end_u: i32) -> Device {
        Device {
            id: DeviceId(id),
            name: format!("dev-{id}"),
            cabinet_id: CabinetId(1),
            category: DeviceCategory::Server,
            start_u,
            end_u,
        }
    }
}
