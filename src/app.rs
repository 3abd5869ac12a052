//! Application state: the glue between sensor delivery and rendering.
//!
//! [`AttitudeApp`] owns the persistent pieces of the pipeline (the signal
//! smoother and the projector configuration) and exposes the two entry
//! points the host event loop drives:
//!
//! - [`on_sample`](AttitudeApp::on_sample): called once per delivered
//!   accelerometer sample; folds it into the smoothed state and marks a
//!   redraw pending
//! - [`render`](AttitudeApp::render): called when the host is ready to
//!   paint; derives the attitude and returns the frame's command list
//!
//! Single-threaded by construction: one owner, no locks, both methods run
//! on the caller's thread. There is no global state anywhere in the
//! pipeline.

use crate::attitude::{estimate, Attitude};
use crate::projector::{DrawCommand, HorizonProjector, OverlayStyle};
use crate::smoothing::{AccelSample, SignalSmoother};

/// Owned application state for the attitude indicator.
#[derive(Debug)]
pub struct AttitudeApp {
    smoother: SignalSmoother,
    projector: HorizonProjector,
    /// Set by `on_sample`, cleared by `render`: whether new data arrived
    /// since the last paint.
    dirty: bool,
}

impl AttitudeApp {
    pub const fn new(style: OverlayStyle) -> Self {
        Self {
            smoother: SignalSmoother::new(),
            projector: HorizonProjector::new(style),
            dirty: true,
        }
    }

    /// Accept one raw accelerometer sample and schedule a redraw.
    pub fn on_sample(&mut self, x: i32, y: i32, z: i32) {
        self.smoother.update(AccelSample::new(x, y, z));
        self.dirty = true;
    }

    /// Whether a redraw is pending.
    #[inline]
    pub const fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Current attitude derived from the smoothed state.
    pub fn attitude(&self) -> Attitude {
        estimate(self.smoother.state())
    }

    /// Produce the draw command list for the current state and clear the
    /// redraw flag.
    pub fn render(&mut self) -> Vec<DrawCommand> {
        self.dirty = false;
        self.projector.render(&self.attitude())
    }

    /// Switch between the classic and plain overlay variants.
    pub fn toggle_overlay_style(&mut self) {
        let toggled = self.projector.style().toggled();
        self.projector.set_style(toggled);
        self.dirty = true;
    }
}

impl Default for AttitudeApp {
    fn default() -> Self {
        Self::new(OverlayStyle::classic())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
