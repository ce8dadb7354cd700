// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Highlight/focus coordination for picked and searched entities.
//!
//! Selecting an entity focuses the camera on its cabinet and highlights
//! both the entity and the cabinet. The highlight clears itself after a
//! fixed delay unless another selection comes first, which cancels the
//! pending clear and schedules its own. Time is advanced by the render
//! loop; nothing here runs on its own.

use std::time::Duration;

use nalgebra::Point3;

use dcim_lite_core::{CabinetId, EntityRef, Inventory, Result};
use dcim_lite_geometry::project_cabinet;

use crate::camera::FocusController;

/// How long a highlight stays up.
pub const DEFAULT_HIGHLIGHT_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightConfig {
    pub duration: Duration,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_HIGHLIGHT_DURATION,
        }
    }
}

/// The highlighted entity and the cabinet that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub entity: EntityRef,
    pub cabinet: CabinetId,
}

/// Outcome of a selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub highlight: Highlight,
    /// World position handed to the camera.
    pub focus: Point3<f64>,
}

/// Couples selection to camera focus and a self-clearing highlight.
#[derive(Debug, Clone, Default)]
pub struct HighlightCoordinator {
    config: HighlightConfig,
    active: Option<Highlight>,
    /// Time left before `active` clears.
    pending_clear: Option<Duration>,
}

impl HighlightCoordinator {
    pub fn new(config: HighlightConfig) -> Self {
        Self {
            config,
            active: None,
            pending_clear: None,
        }
    }

    /// Focuses the camera on `entity`'s cabinet and highlights both.
    ///
    /// Unknown entities are reported as errors and change nothing.
    pub fn select(
        &mut self,
        inventory: &Inventory,
        camera: &mut FocusController,
        entity: EntityRef,
    ) -> Result<Selection> {
        let cabinet = inventory.owning_cabinet(entity)?;
        let focus = project_cabinet(cabinet);
        camera.set_focus(focus);

        let highlight = Highlight {
            entity,
            cabinet: cabinet.id,
        };
        self.schedule(highlight);

        Ok(Selection { highlight, focus })
    }

    /// Selects the entity matching `keyword`. `Ok(None)` means no match, in
    /// which case the current highlight is left alone.
    pub fn search(
        &mut self,
        inventory: &Inventory,
        camera: &mut FocusController,
        keyword: &str,
    ) -> Result<Option<Selection>> {
        match inventory.find_by_keyword(keyword) {
            Some(entity) => self.select(inventory, camera, entity).map(Some),
            None => {
                tracing::debug!(keyword, "Search matched nothing");
                Ok(None)
            }
        }
    }

    fn schedule(&mut self, highlight: Highlight) {
        if self.pending_clear.is_some() {
            tracing::debug!(previous = ?self.active, "Pending highlight clear cancelled");
        }
        tracing::debug!(entity = %highlight.entity, cabinet = %highlight.cabinet, "Highlighted");
        self.active = Some(highlight);
        self.pending_clear = Some(self.config.duration);
    }

    /// Advances the clear timer by `dt`, returning the highlight that was
    /// cleared on this call, if any.
    pub fn advance(&mut self, dt: Duration) -> Option<Highlight> {
        let remaining = self.pending_clear.as_mut()?;
        *remaining = remaining.saturating_sub(dt);
        if !remaining.is_zero() {
            return None;
        }

        self.pending_clear = None;
        let cleared = self.active.take();
        if let Some(highlight) = &cleared {
            tracing::debug!(entity = %highlight.entity, "Highlight cleared");
        }
        cleared
    }

    /// Drops the highlight and its pending clear immediately.
    pub fn clear(&mut self) -> Option<Highlight> {
        self.pending_clear = None;
        self.active.take()
    }

    #[inline]
    pub fn active(&self) -> Option<Highlight> {
        self.active
    }

    /// Time left before the current highlight clears.
    #[inline]
    pub fn remaining(&self) -> Option<Duration> {
        self.pending_clear
    }

    pub fn is_highlighted(&self, entity: EntityRef) -> bool {
        self.active.is_some_and(|h| h.entity == entity)
    }

    pub fn is_cabinet_highlighted(&self, cabinet: CabinetId) -> bool {
        self.active.is_some_and(|h| h.cabinet == cabinet)
    }
}
