//! Exponential smoothing of the raw 3-axis accelerometer stream.
//!
//! Raw wearable accelerometer data is noisy enough to make the horizon
//! jitter visibly. A single-pole smoother with a fixed weight keeps the
//! display steady without the lag of a longer window:
//!
//! ```text
//! new = (sample + SMOOTHING_FACTOR * prev) / (SMOOTHING_FACTOR + 1)
//! ```
//!
//! applied independently per axis with integer division truncating toward
//! zero. With the factor fixed at 3 each update keeps 75% of the old state.
//!
//! The smoothed state initializes to zero and lives for the process
//! lifetime; [`SignalSmoother`] is its single owner and mutates it once per
//! incoming sample.

use crate::config::SMOOTHING_FACTOR;

/// One raw accelerometer reading (device units, sign convention
/// device-defined).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccelSample {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl AccelSample {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Exponential moving average of the sample stream, one value per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SmoothedState {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Owns and updates the persistent [`SmoothedState`].
///
/// Create one instance for the process lifetime and call [`update`]
/// once per delivered sample. Infallible.
///
/// [`update`]: SignalSmoother::update
#[derive(Debug, Default)]
pub struct SignalSmoother {
    state: SmoothedState,
}

impl SignalSmoother {
    /// Create a smoother with all axes at zero.
    pub const fn new() -> Self {
        Self {
            state: SmoothedState { x: 0, y: 0, z: 0 },
        }
    }

    /// Fold one raw sample into the smoothed state and return the result.
    pub fn update(&mut self, sample: AccelSample) -> SmoothedState {
        self.state.x = smooth_axis(sample.x, self.state.x);
        self.state.y = smooth_axis(sample.y, self.state.y);
        self.state.z = smooth_axis(sample.z, self.state.z);
        self.state
    }

    /// Current smoothed state without folding in a new sample.
    #[inline]
    pub const fn state(&self) -> SmoothedState {
        self.state
    }
}

/// Single-axis smoothing step. Rust's `/` truncates toward zero, matching
/// the device firmware this filter was calibrated on.
#[inline]
fn smooth_axis(sample: i32, prev: i32) -> i32 {
    (sample + SMOOTHING_FACTOR * prev) / (SMOOTHING_FACTOR + 1)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_zero() {
        let smoother = SignalSmoother::new();
        assert_eq!(smoother.state(), SmoothedState::default());
    }

    #[test]
    fn test_first_sample_weighted_quarter() {
        // From zero state, one sample contributes 1/(factor+1) = 1/4
        let mut smoother = SignalSmoother::new();
        let state = smoother.update(AccelSample::new(1000, -1000, 400));
        assert_eq!(state.x, 250);
        assert_eq!(state.y, -250);
        assert_eq!(state.z, 100);
    }

    #[test]
    fn test_axes_are_independent() {
        let mut smoother = SignalSmoother::new();
        smoother.update(AccelSample::new(4000, 0, 0));
        let state = smoother.update(AccelSample::new(0, 4000, 0));
        // x decays from its own history, y starts fresh, z stays zero
        assert_eq!(state.x, 750);
        assert_eq!(state.y, 1000);
        assert_eq!(state.z, 0);
    }

    #[test]
    fn test_truncation_toward_zero() {
        // Negative intermediate sums must truncate toward zero, not floor.
        // (-1000 + 3*0) / 4 = -250 exactly; (-1000 + 3*-250) / 4 =
        // -1750/4 = -437.5 -> -437 with truncation (floor would give -438)
        let mut smoother = SignalSmoother::new();
        smoother.update(AccelSample::new(0, -1000, 0));
        let state = smoother.update(AccelSample::new(0, -1000, 0));
        assert_eq!(state.y, -437, "Division must truncate toward zero");
    }

    #[test]
    fn test_converges_near_constant_input() {
        // Repeated constant input converges to a fixed point just shy of
        // the input value (truncation leaves a small standing offset)
        let mut smoother = SignalSmoother::new();
        let mut state = SmoothedState::default();
        for _ in 0..64 {
            state = smoother.update(AccelSample::new(0, -1000, 0));
        }
        assert!(
            (-1000..=-997).contains(&state.y),
            "Smoothed y = {} should settle within truncation distance of -1000",
            state.y
        );
        // And the fixed point is stable
        let again = smoother.update(AccelSample::new(0, -1000, 0));
        assert_eq!(again.y, state.y, "Fixed point should be stable");
    }
}
