// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device categories and the visual representation chosen for each.
//!
//! The category set is closed. Every dispatch on it is an exhaustive
//! `match`, so adding a category is a compile error until every visual
//! mapping handles it.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of equipment mounted in a cabinet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum DeviceCategory {
    Switch,
    Router,
    Server,
    Storage,
    Firewall,
    LoadBalancer,
    Pdu,
    #[default]
    Other,
}

/// Front-panel treatment a renderer draws for a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStyle {
    /// Rows of network ports.
    PortGrid,
    /// Drive bays across the face.
    DriveBays,
    /// Vent grille with status LEDs.
    Vented,
    /// Power outlets.
    Outlets,
    /// Plain face plate.
    Blank,
}

/// Visual representation of a device category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceVisual {
    /// Base color as `0xRRGGBB`.
    pub color: u32,
    pub panel: PanelStyle,
}

impl DeviceCategory {
    /// All categories in display order.
    pub const ALL: [DeviceCategory; 8] = [
        DeviceCategory::Switch,
        DeviceCategory::Router,
        DeviceCategory::Server,
        DeviceCategory::Storage,
        DeviceCategory::Firewall,
        DeviceCategory::LoadBalancer,
        DeviceCategory::Pdu,
        DeviceCategory::Other,
    ];

    /// Canonical lowercase name, as used on the wire.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DeviceCategory::Switch => "switch",
            DeviceCategory::Router => "router",
            DeviceCategory::Server => "server",
            DeviceCategory::Storage => "storage",
            DeviceCategory::Firewall => "firewall",
            DeviceCategory::LoadBalancer => "loadbalancer",
            DeviceCategory::Pdu => "pdu",
            DeviceCategory::Other => "other",
        }
    }

    /// How this category is drawn.
    pub const fn visual(&self) -> DeviceVisual {
        let (color, panel) = match self {
            DeviceCategory::Switch => (0x1F77B4, PanelStyle::PortGrid),
            DeviceCategory::Router => (0x2CA02C, PanelStyle::PortGrid),
            DeviceCategory::Server => (0x7F8C8D, PanelStyle::Vented),
            DeviceCategory::Storage => (0x9467BD, PanelStyle::DriveBays),
            DeviceCategory::Firewall => (0xD62728, PanelStyle::PortGrid),
            DeviceCategory::LoadBalancer => (0xFF7F0E, PanelStyle::PortGrid),
            DeviceCategory::Pdu => (0xBCBD22, PanelStyle::Outlets),
            DeviceCategory::Other => (0x555555, PanelStyle::Blank),
        };
        DeviceVisual { color, panel }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceCategory {
    type Err = Error;

    /// Case-insensitive; accepts the separated spellings of "load balancer".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "switch" => Ok(DeviceCategory::Switch),
            "router" => Ok(DeviceCategory::Router),
            "server" => Ok(DeviceCategory::Server),
            "storage" => Ok(DeviceCategory::Storage),
            "firewall" => Ok(DeviceCategory::Firewall),
            "loadbalancer" | "load_balancer" | "load-balancer" => Ok(DeviceCategory::LoadBalancer),
            "pdu" => Ok(DeviceCategory::Pdu),
            "other" => Ok(DeviceCategory::Other),
            _ => Err(Error::UnknownCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for DeviceCategory {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DeviceCategory> for String {
    fn from(category: DeviceCategory) -> Self {
        category.as_str().to_string()
    }
}
