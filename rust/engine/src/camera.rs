// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Animated camera focus.
//!
//! A focus request turns a world point into an aim point (the point plus a
//! fixed lead offset so the camera does not end up inside the subject) and
//! the camera eases toward it once per frame. The newest request always
//! wins; a superseded request is dropped without notification.

use std::fmt;

use nalgebra::{Point3, Vector3};

/// Lead offset added to every focus target: up and in front of the subject.
pub const DEFAULT_FOCUS_OFFSET: [f64; 3] = [0.0, 1.5, 3.0];

/// Target used by [`FocusController::reset`].
pub const DEFAULT_HOME_TARGET: [f64; 3] = [0.0, 4.5, 7.0];

/// Fraction of the remaining distance covered per frame.
pub const DEFAULT_DAMPING: f64 = 0.05;

/// Remaining distance below which the camera has arrived.
pub const DEFAULT_EPSILON: f64 = 0.1;

/// How the damping factor relates to frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DampingMode {
    /// Fixed fraction per tick regardless of `dt`. Convergence speed
    /// follows the display refresh rate.
    PerFrame,
    /// The per-frame fraction is defined at `reference_fps` and rescaled by
    /// `dt`, so convergence takes the same wall-clock time at any rate.
    TimeScaled { reference_fps: f64 },
}

/// Tuning for [`FocusController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusConfig {
    pub damping: f64,
    pub epsilon: f64,
    pub offset: Vector3<f64>,
    /// Target of [`FocusController::reset`].
    pub home: Point3<f64>,
    pub mode: DampingMode,
}

impl Default for FocusConfig {
    fn default() -> Self {
        let [ox, oy, oz] = DEFAULT_FOCUS_OFFSET;
        let [hx, hy, hz] = DEFAULT_HOME_TARGET;
        Self {
            damping: DEFAULT_DAMPING,
            epsilon: DEFAULT_EPSILON,
            offset: Vector3::new(ox, oy, oz),
            home: Point3::new(hx, hy, hz),
            mode: DampingMode::PerFrame,
        }
    }
}

/// Result of advancing the camera by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusTick {
    /// No focus in progress; the camera stays where it is.
    Idle,
    /// Moved to the given position, still animating.
    Moving(Point3<f64>),
    /// Moved to the given position and arrived. Reported once per target.
    Arrived(Point3<f64>),
}

impl FocusTick {
    /// New camera position, if the camera moved.
    pub fn position(&self) -> Option<Point3<f64>> {
        match self {
            FocusTick::Idle => None,
            FocusTick::Moving(p) | FocusTick::Arrived(p) => Some(*p),
        }
    }
}

type ArrivalCallback = Box<dyn FnOnce(Point3<f64>)>;

/// Per-frame state machine easing the camera toward a focus target.
pub struct FocusController {
    config: FocusConfig,
    target: Option<Point3<f64>>,
    animating: bool,
    on_arrival: Option<ArrivalCallback>,
}

impl FocusController {
    pub fn new(config: FocusConfig) -> Self {
        Self {
            config,
            target: None,
            animating: false,
            on_arrival: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    /// The world point currently being focused, if any.
    #[inline]
    pub fn target(&self) -> Option<Point3<f64>> {
        self.target
    }

    /// Where the camera is heading: target plus the lead offset.
    #[inline]
    pub fn aim(&self) -> Option<Point3<f64>> {
        self.target.map(|target| target + self.config.offset)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Starts animating toward `target`, replacing any focus in progress.
    pub fn set_focus(&mut self, target: Point3<f64>) {
        self.begin(target, None);
    }

    /// Like [`set_focus`](Self::set_focus), calling `on_arrival` once when
    /// the camera arrives. If the focus is superseded first, the callback
    /// is dropped without being called.
    pub fn set_focus_with<F>(&mut self, target: Point3<f64>, on_arrival: F)
    where
        F: FnOnce(Point3<f64>) + 'static,
    {
        self.begin(target, Some(Box::new(on_arrival)));
    }

    /// Animates back to the configured home target.
    pub fn reset(&mut self) {
        self.set_focus(self.config.home);
    }

    fn begin(&mut self, target: Point3<f64>, on_arrival: Option<ArrivalCallback>) {
        if let Some(previous) = self.target.replace(target) {
            tracing::debug!(?previous, ?target, "Focus superseded");
        } else {
            tracing::debug!(?target, "Focus set");
        }
        self.on_arrival = on_arrival;
        self.animating = true;
    }

    /// Advances the camera from `current` by one frame of `dt` seconds.
    pub fn tick(&mut self, current: Point3<f64>, dt: f64) -> FocusTick {
        if !self.animating {
            return FocusTick::Idle;
        }
        let Some(aim) = self.aim() else {
            self.animating = false;
            return FocusTick::Idle;
        };

        let next = current + (aim - current) * self.step_factor(dt);
        if (aim - next).norm() >= self.config.epsilon {
            return FocusTick::Moving(next);
        }

        self.animating = false;
        self.target = None;
        tracing::debug!(position = ?next, "Focus arrived");
        if let Some(on_arrival) = self.on_arrival.take() {
            on_arrival(next);
        }
        FocusTick::Arrived(next)
    }

    fn step_factor(&self, dt: f64) -> f64 {
        match self.config.mode {
            DampingMode::PerFrame => self.config.damping,
            DampingMode::TimeScaled { reference_fps } => {
                let frames = (dt * reference_fps).max(0.0);
                (1.0 - (1.0 - self.config.damping).powf(frames)).clamp(0.0, 1.0)
            }
        }
    }
}

impl Default for FocusController {
    fn default() -> Self {
        Self::new(FocusConfig::default())
    }
}

impl fmt::Debug for FocusController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusController")
            .field("config", &self.config)
            .field("target", &self.target)
            .field("animating", &self.animating)
            .field("has_arrival_callback", &self.on_arrival.is_some())
            .finish()
    }
}
