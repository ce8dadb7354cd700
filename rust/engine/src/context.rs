// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Explicit view context: commands in, events out.
//!
//! [`ViewContext`] owns everything the floor-plan view mutates (the loaded
//! inventory, camera focus, both rotation subjects and the highlight), so
//! there is no ambient state. The host shell calls [`ViewContext::handle`]
//! for user input and [`ViewContext::tick`] once per frame, then draws from
//! the returned events and the read accessors.
//!
//! ```text
//! pointer / search / pick ──► handle(ViewCommand) ──► Vec<ViewEvent>
//! frame callback          ──► tick(camera, dt)    ──► Vec<ViewEvent>
//! ```

use std::time::Duration;

use nalgebra::Point3;

use dcim_lite_core::{CabinetId, DeviceId, EntityRef, Inventory, Result};
use dcim_lite_geometry::{cabinet_height, device_local_offset};

use crate::camera::{FocusConfig, FocusController, FocusTick};
use crate::highlight::{HighlightConfig, HighlightCoordinator};
use crate::rotation::DragRotation;

/// Which independently rotatable subject a pointer gesture targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationSubject {
    /// The open cabinet's body.
    Cabinet,
    /// The zoomed device replica.
    Device,
}

/// Input to the view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Pick an entity directly.
    Select(EntityRef),
    /// Pick the entity matching a keyword.
    Search(String),
    /// Fly the camera back to its home position.
    ResetCamera,
    /// Show a cabinet's body, rotatable about half its height.
    OpenCabinet(CabinetId),
    /// Show a rotatable replica of a device, pivoting about its center.
    ZoomDevice(DeviceId),
    /// Dismiss the zoomed device.
    CloseZoom,
    PointerDown { subject: RotationSubject, x: f64 },
    PointerMove { subject: RotationSubject, x: f64 },
    PointerUp { subject: RotationSubject },
}

/// Output of the view, for the renderer and the surrounding UI.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// The camera started moving toward `aim` to look at `target`.
    FocusChanged {
        target: Point3<f64>,
        aim: Point3<f64>,
    },
    CameraMoved(Point3<f64>),
    /// The camera reached its aim point.
    FocusArrived(Point3<f64>),
    Highlighted {
        entity: EntityRef,
        cabinet: CabinetId,
    },
    HighlightCleared {
        entity: EntityRef,
        cabinet: CabinetId,
    },
    /// A search found nothing.
    NoMatch { keyword: String },
    CabinetOpened { cabinet: CabinetId, pivot: f64 },
    DeviceZoomed { device: DeviceId, pivot: f64 },
    ZoomClosed,
    Rotated { subject: RotationSubject, angle: f64 },
}

/// All mutable state of one floor-plan view.
#[derive(Debug)]
pub struct ViewContext {
    inventory: Inventory,
    camera: FocusController,
    highlight: HighlightCoordinator,
    open_cabinet: Option<CabinetId>,
    cabinet_rotation: DragRotation,
    zoomed_device: Option<DeviceId>,
    device_rotation: DragRotation,
}

impl ViewContext {
    pub fn new(inventory: Inventory) -> Self {
        Self::with_config(inventory, FocusConfig::default(), HighlightConfig::default())
    }

    pub fn with_config(
        inventory: Inventory,
        focus: FocusConfig,
        highlight: HighlightConfig,
    ) -> Self {
        Self {
            inventory,
            camera: FocusController::new(focus),
            highlight: HighlightCoordinator::new(highlight),
            open_cabinet: None,
            cabinet_rotation: DragRotation::new(0.0),
            zoomed_device: None,
            device_rotation: DragRotation::new(0.0),
        }
    }

    #[inline]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable inventory, for applying completed data loads.
    #[inline]
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    #[inline]
    pub fn camera(&self) -> &FocusController {
        &self.camera
    }

    #[inline]
    pub fn highlight(&self) -> &HighlightCoordinator {
        &self.highlight
    }

    #[inline]
    pub fn open_cabinet(&self) -> Option<CabinetId> {
        self.open_cabinet
    }

    #[inline]
    pub fn zoomed_device(&self) -> Option<DeviceId> {
        self.zoomed_device
    }

    pub fn rotation(&self, subject: RotationSubject) -> &DragRotation {
        match subject {
            RotationSubject::Cabinet => &self.cabinet_rotation,
            RotationSubject::Device => &self.device_rotation,
        }
    }

    /// The rotation a gesture on `subject` drives, if that subject is shown.
    fn rotation_mut(&mut self, subject: RotationSubject) -> Option<&mut DragRotation> {
        match subject {
            RotationSubject::Cabinet if self.open_cabinet.is_some() => {
                Some(&mut self.cabinet_rotation)
            }
            RotationSubject::Device if self.zoomed_device.is_some() => {
                Some(&mut self.device_rotation)
            }
            _ => None,
        }
    }

    /// Applies one command.
    ///
    /// Errors only for entities missing from the inventory; the view state
    /// is left unchanged in that case.
    pub fn handle(&mut self, command: ViewCommand) -> Result<Vec<ViewEvent>> {
        let mut events = Vec::new();

        match command {
            ViewCommand::Select(entity) => {
                let selection = self
                    .highlight
                    .select(&self.inventory, &mut self.camera, entity)?;
                events.push(self.focus_changed(selection.focus));
                events.push(ViewEvent::Highlighted {
                    entity: selection.highlight.entity,
                    cabinet: selection.highlight.cabinet,
                });
            }
            ViewCommand::Search(keyword) => {
                match self
                    .highlight
                    .search(&self.inventory, &mut self.camera, &keyword)?
                {
                    Some(selection) => {
                        events.push(self.focus_changed(selection.focus));
                        events.push(ViewEvent::Highlighted {
                            entity: selection.highlight.entity,
                            cabinet: selection.highlight.cabinet,
                        });
                    }
                    None => events.push(ViewEvent::NoMatch { keyword }),
                }
            }
            ViewCommand::ResetCamera => {
                self.camera.reset();
                events.push(self.focus_changed(self.camera.config().home));
            }
            ViewCommand::OpenCabinet(id) => {
                let cabinet = self.inventory.cabinet(id)?;
                let pivot = cabinet_height(cabinet.u_height) / 2.0;
                self.open_cabinet = Some(id);
                self.cabinet_rotation = DragRotation::new(pivot);
                events.push(ViewEvent::CabinetOpened { cabinet: id, pivot });
            }
            ViewCommand::ZoomDevice(id) => {
                let device = self.inventory.device(id)?;
                let pivot = device_local_offset(device.start_u, device.end_u).height / 2.0;
                self.zoomed_device = Some(id);
                self.device_rotation = DragRotation::new(pivot);
                events.push(ViewEvent::DeviceZoomed { device: id, pivot });
            }
            ViewCommand::CloseZoom => {
                if self.zoomed_device.take().is_some() {
                    self.device_rotation.on_pointer_up();
                    events.push(ViewEvent::ZoomClosed);
                }
            }
            ViewCommand::PointerDown { subject, x } => {
                if let Some(rotation) = self.rotation_mut(subject) {
                    rotation.on_pointer_down(x);
                }
            }
            ViewCommand::PointerMove { subject, x } => {
                if let Some(angle) = self
                    .rotation_mut(subject)
                    .and_then(|rotation| rotation.on_pointer_move(x))
                {
                    events.push(ViewEvent::Rotated { subject, angle });
                }
            }
            ViewCommand::PointerUp { subject } => {
                if let Some(rotation) = self.rotation_mut(subject) {
                    rotation.on_pointer_up();
                }
            }
        }

        Ok(events)
    }

    /// Advances animations by one frame of `dt` seconds, starting from the
    /// renderer's current camera position.
    pub fn tick(&mut self, camera_position: Point3<f64>, dt: f64) -> Vec<ViewEvent> {
        let mut events = Vec::new();

        match self.camera.tick(camera_position, dt) {
            FocusTick::Idle => {}
            FocusTick::Moving(position) => events.push(ViewEvent::CameraMoved(position)),
            FocusTick::Arrived(position) => {
                events.push(ViewEvent::CameraMoved(position));
                events.push(ViewEvent::FocusArrived(position));
            }
        }

        let elapsed = Duration::try_from_secs_f64(dt).unwrap_or(Duration::ZERO);
        if let Some(cleared) = self.highlight.advance(elapsed) {
            events.push(ViewEvent::HighlightCleared {
                entity: cleared.entity,
                cabinet: cleared.cabinet,
            });
        }

        events
    }

    fn focus_changed(&self, target: Point3<f64>) -> ViewEvent {
        ViewEvent::FocusChanged {
            target,
            aim: target + self.camera.config().offset,
        }
    }
}
