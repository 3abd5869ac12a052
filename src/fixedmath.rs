//! Integer square root and trigonometric lookups on the fixed-point angle
//! domain.
//!
//! # Angle Domain
//!
//! Angles are integers in `[0, 0x10000)`, where 0x10000 units represent a
//! full 360° rotation. Arithmetic wraps modulo 0x10000, so `-bank` is a
//! valid argument everywhere an angle is expected. Signed pitch values in
//! `(-0x8000, 0x8000]` are obtained by centering (subtracting 0x10000 from
//! anything above the half turn).
//!
//! # Trig Scaling
//!
//! `sin_lookup`/`cos_lookup` return values on a circle of radius
//! [`TRIG_MAX_RATIO`] (0x10000), so a rotation matrix product is divided by
//! 0x10000 to recover pixel units. The lookups are float-backed internally
//! and rounded to the nearest integer; results match a quantized lookup
//! table within ±1 unit and are exact at the quadrant points.
//!
//! # isqrt Seeding
//!
//! `isqrt` is the Newton iteration the display was calibrated against:
//! seed `n / 100`, iterate while `estimate² - n >= 4`. That seed only works
//! when it lands at or above the true root (`n >= 10000`); smaller inputs
//! are re-seeded with 100, an over-estimate for the entire small range, so
//! the same loop condition converges from above. The loop body only runs when
//! `estimate² - n >= 4`, which forces `estimate >= 2`, so the division
//! inside the iteration can never see a zero estimate. The estimate and its
//! square are held in i64: the seed alone reaches ~21M for the largest
//! inputs, far past what an i32 square can hold.

// =============================================================================
// Angle Domain Constants
// =============================================================================

/// Number of angle units in a full rotation (360°).
pub const ANGLE_RANGE: i32 = 0x10000;

/// Half rotation (180°). Pitch values above this wrap to negative.
pub const HALF_TURN: i32 = 0x8000;

/// Quarter rotation (90°).
pub const QUARTER_TURN: i32 = 0x4000;

/// Radius of the fixed-point unit circle returned by the trig lookups.
pub const TRIG_MAX_RATIO: i32 = 0x10000;

/// Seed used by `isqrt` for inputs below 10000, where the `n / 100` seed
/// would under-estimate the root and stall the iteration.
const ISQRT_SMALL_SEED: i32 = 100;

/// Convergence tolerance of the Newton iteration (`estimate² - n < 4` stops).
const ISQRT_TOLERANCE: i32 = 4;

// =============================================================================
// Integer Square Root
// =============================================================================

/// Newton's-method integer square root.
///
/// The result `r` satisfies `r*r - n < 4`, which can land one either side
/// of the floor square root (most small perfect squares resolve exactly).
/// Downstream consumers (accelerometer magnitudes) were calibrated against
/// exactly this convergence behavior.
///
/// The iteration runs in i64: the `n / 100` seed squares past i32 for
/// inputs above ~4.6M, and smoothed magnitudes reach `4096²` and beyond.
///
/// Returns 0 for zero or negative input. Never divides by zero.
pub fn isqrt(n: i32) -> i32 {
    if n <= 0 {
        return 0;
    }

    let n = i64::from(n);
    let mut estimate = n / 100;
    if estimate * estimate < n {
        // Seed fell below the root (only possible for n < ~10000); restart
        // from an over-estimate so the loop condition can engage.
        estimate = i64::from(ISQRT_SMALL_SEED);
    }

    while estimate * estimate - n >= i64::from(ISQRT_TOLERANCE) {
        estimate = (estimate + n / estimate) / 2;
    }
    estimate as i32
}

// =============================================================================
// Trigonometric Lookups
// =============================================================================

/// Radians per angle unit.
const RADIANS_PER_UNIT: f64 = core::f64::consts::TAU / ANGLE_RANGE as f64;

/// Sine of a fixed-point angle, scaled to the 0x10000-radius unit circle.
///
/// Accepts any i32 angle; values wrap modulo [`ANGLE_RANGE`].
pub fn sin_lookup(angle: i32) -> i32 {
    let wrapped = angle.rem_euclid(ANGLE_RANGE);
    let radians = f64::from(wrapped) * RADIANS_PER_UNIT;
    (radians.sin() * f64::from(TRIG_MAX_RATIO)).round() as i32
}

/// Cosine of a fixed-point angle, scaled to the 0x10000-radius unit circle.
///
/// Accepts any i32 angle; values wrap modulo [`ANGLE_RANGE`].
pub fn cos_lookup(angle: i32) -> i32 {
    let wrapped = angle.rem_euclid(ANGLE_RANGE);
    let radians = f64::from(wrapped) * RADIANS_PER_UNIT;
    (radians.cos() * f64::from(TRIG_MAX_RATIO)).round() as i32
}

/// Direction of the vector `(x, y)` as a fixed-point angle in `[0, 0x10000)`.
///
/// Standard atan2 quadrant behavior scaled from radians to angle units:
/// the positive x-axis maps to 0, the positive y-axis to [`QUARTER_TURN`].
/// The degenerate zero vector maps to 0.
pub fn atan2_lookup(y: i32, x: i32) -> i32 {
    if x == 0 && y == 0 {
        return 0;
    }
    let radians = f64::from(y).atan2(f64::from(x));
    let units = (radians / core::f64::consts::TAU * f64::from(ANGLE_RANGE)).round() as i32;
    units.rem_euclid(ANGLE_RANGE)
}

// =============================================================================
// Unit Tests
// =============================================================================
