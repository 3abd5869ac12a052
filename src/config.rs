//! Application configuration constants.
//!
//! Every empirical constant of the display geometry and the angle pipeline
//! is named here instead of appearing as a literal in the rendering code.
//! The values are calibrated against each other (the pitch scaling, the
//! ladder divisors and the screen center all assume a 144×168 panel), so
//! changing one in isolation will skew the rendered horizon.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (portrait 144x168 panel).
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Screen center X coordinate. Rotation origin for all banked overlays.
/// Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate. Rotation origin for all banked overlays.
/// Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Attitude Pipeline Configuration
// =============================================================================

/// Exponential smoothing factor for incoming accelerometer samples.
/// Each axis updates as `(sample + SMOOTHING_FACTOR * prev) / (SMOOTHING_FACTOR + 1)`.
pub const SMOOTHING_FACTOR: i32 = 3;

/// Empirical factor reconciling the 0..0x10000 angle domain with screen
/// pixels when projecting pitch. Calibrated for this panel size; must stay
/// at 1000 for visual fidelity.
pub const PITCH_SCALING: i64 = 1000;

// =============================================================================
// Pitch Ladder / Label Configuration
// =============================================================================

/// Pitch ladder tick index range: one tick per index in `-26..26`.
pub const LADDER_RANGE: core::ops::Range<i32> = -26..26;

/// Angle-domain divisor converting a ladder index into a pitch offset
/// (`0x10000 * i / LADDER_STEP_DIVISOR`). Each index is five degrees.
pub const LADDER_STEP_DIVISOR: i64 = 72;

/// Half-length in pixels of a minor (odd-index) ladder tick.
pub const LADDER_HALF_MINOR: i64 = 10;

/// Half-length in pixels of a major (even-index) ladder tick.
pub const LADDER_HALF_MAJOR: i64 = 20;

/// Pitch label index range (each index is ten degrees; index 0 is skipped).
pub const LABEL_RANGE: core::ops::Range<i32> = -9..10;

/// Angle-domain divisor for label placement (one index per ten degrees,
/// half the ladder granularity).
pub const LABEL_STEP_DIVISOR: i64 = 36;

/// Unrotated x offset of the pitch label column from the screen center.
pub const LABEL_X_OFFSET: i64 = 23 + 10;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Interval between synthetic accelerometer samples (25 Hz delivery, one
/// redraw per sample). Matches a typical wearable accel subscription rate.
pub const FRAME_TIME: Duration = Duration::from_millis(40);

// =============================================================================
// Unit Tests
// =============================================================================
