//! Pitch and bank derivation from the smoothed acceleration vector.
//!
//! The formulas below define the aircraft-axis convention of the whole
//! display: which physical orientation reads as zero pitch and zero bank is
//! a consequence of exactly this formula set, and downstream visual
//! calibration (pitch scaling, ladder spacing) depends on it. Do not
//! "correct" them.
//!
//! - `pitch = atan2(z, |xy|)`, centered into `(-0x8000, 0x8000]`
//! - `bank  = atan2(x, -y)`
//!
//! With gravity resting on the negative y axis (device held upright facing
//! the wearer) both angles read zero.

use crate::fixedmath::{atan2_lookup, isqrt, ANGLE_RANGE, HALF_TURN};
use crate::smoothing::SmoothedState;

/// Attitude angles for one frame.
///
/// `pitch` is a signed angle in `(-0x8000, 0x8000]`; `bank` is an unsigned
/// angle in `[0, 0x10000)`. Recomputed fresh from the smoothed state every
/// redraw; carries no identity between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attitude {
    pub pitch: i32,
    pub bank: i32,
}

/// Derive the attitude from the smoothed acceleration vector.
///
/// Pure and deterministic: the same state always yields the same angles.
pub fn estimate(state: SmoothedState) -> Attitude {
    // Magnitude of the horizontal (screen-plane) component. The squares
    // are summed in i64 so overflow is unreachable for any input.
    let horizontal = isqrt(horizontal_magnitude_squared(state));

    let mut pitch = atan2_lookup(state.z, horizontal);
    if pitch > HALF_TURN {
        pitch -= ANGLE_RANGE;
    }

    let bank = atan2_lookup(state.x, -state.y);

    Attitude { pitch, bank }
}

/// `x² + y²` clamped into i32 range (saturating far beyond any real
/// accelerometer output).
fn horizontal_magnitude_squared(state: SmoothedState) -> i32 {
    let sum = i64::from(state.x) * i64::from(state.x) + i64::from(state.y) * i64::from(state.y);
    sum.min(i64::from(i32::MAX)) as i32
}

// =============================================================================
// Unit Tests
// =============================================================================
