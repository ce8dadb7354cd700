// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # DCIM-Lite Engine
//!
//! Renderer-neutral view state for the 3D floor plan. Nothing here draws;
//! a host shell feeds pointer input and frame ticks in and renders from
//! what comes back.
//!
//! ## Overview
//!
//! - **Camera focus**: exponential easing toward a target plus a fixed
//!   offset, with an optional arrival callback
//! - **Drag rotation**: horizontal drags rotate a cabinet or device replica
//!   about a Y-axis pivot
//! - **Highlights**: selecting or searching focuses the camera and
//!   highlights the entity until a delay passes
//! - **View context**: one owner for all of the above, driven by commands
//!
//! ## Quick Start
//!
//! ```rust
//! use dcim_lite_core::{Cabinet, CabinetId, EntityRef, Inventory};
//! use dcim_lite_engine::{ViewCommand, ViewContext, ViewEvent};
//! use nalgebra::Point3;
//!
//! let mut inventory = Inventory::new();
//! inventory.insert_cabinet(Cabinet {
//!     id: CabinetId(1),
//!     name: "A01".into(),
//!     datacenter_id: None,
//!     u_height: 42,
//!     row: 1,
//!     column: 1,
//!     used_u: 0,
//! });
//!
//! let mut view = ViewContext::new(inventory);
//! let events = view
//!     .handle(ViewCommand::Select(EntityRef::Cabinet(CabinetId(1))))
//!     .unwrap();
//! assert!(matches!(events[0], ViewEvent::FocusChanged { .. }));
//!
//! let frame = view.tick(Point3::new(0.0, 4.5, 7.0), 1.0 / 60.0);
//! assert!(matches!(frame[0], ViewEvent::CameraMoved(_)));
//! ```

pub mod camera;
pub mod context;
pub mod highlight;
pub mod rotation;

pub use camera::{
    DampingMode, FocusConfig, FocusController, FocusTick, DEFAULT_DAMPING, DEFAULT_EPSILON,
    DEFAULT_FOCUS_OFFSET, DEFAULT_HOME_TARGET,
};
pub use context::{RotationSubject, ViewCommand, ViewContext, ViewEvent};
pub use highlight::{
    Highlight, HighlightConfig, HighlightCoordinator, Selection, DEFAULT_HIGHLIGHT_DURATION,
};
pub use rotation::{DragRotation, PIXELS_PER_QUARTER_TURN};

pub use dcim_lite_core::{Error, Result};
