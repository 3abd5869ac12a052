//! Projection of (pitch, bank) into the per-frame draw command list.
//!
//! This is the geometric heart of the display. Given one [`Attitude`], the
//! projector emits every drawing operation for the frame, in paint order:
//!
//! 1. Full-screen ground-color fill (everything below the horizon shows
//!    through wherever no sky row is painted on top)
//! 2. Sky fill, one horizontal line per scan row, split at the banked and
//!    pitched horizon crossing
//! 3. Pitch ladder ticks and ten-degree pitch labels, rotated with the
//!    horizon
//! 4. Bank scale (zero-degree arrow plus tick marks) counter-rotated about
//!    the screen center so it tracks the horizon
//! 5. Fixed aircraft pointer and crosshair in absolute screen coordinates
//!
//! The projector is stateless: the previous frame has no influence, and the
//! command list is rebuilt from scratch every time.
//!
//! # Fixed-Point Geometry
//!
//! All projection runs on the 0x10000 angle domain with 0x10000-radius trig
//! lookups. Intermediate products (trig value × pixel offset, pitch ×
//! scaling) are taken in i64 so overflow is unreachable, then divided back
//! down to pixels. The one genuine numerical hazard, a horizon division by
//! `sin(bank) == 0`, is an explicit branch rather than a fault: a zero sine
//! means the horizon is axis-aligned and each row is either fully sky or
//! fully ground.

use core::fmt::Write;

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use crate::attitude::Attitude;
use crate::colors::{BLACK, GROUND_TAN, SKY_BLUE, WHITE, YELLOW};
use crate::config::{
    CENTER_X, CENTER_Y, LABEL_RANGE, LABEL_STEP_DIVISOR, LABEL_X_OFFSET, LADDER_HALF_MAJOR,
    LADDER_HALF_MINOR, LADDER_RANGE, LADDER_STEP_DIVISOR, PITCH_SCALING, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use crate::fixedmath::{cos_lookup, sin_lookup, ANGLE_RANGE, HALF_TURN, TRIG_MAX_RATIO};

/// Fixed-capacity text carried by a [`DrawCommand::Text`] (pitch labels are
/// at most three characters plus slack).
pub type LabelText = String<8>;

// =============================================================================
// Draw Commands
// =============================================================================

/// One drawing operation, produced transiently for a single frame.
///
/// The command list is the only interface between the projector and the
/// rendering sink; nothing here knows how pixels actually get painted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    /// Fill an axis-aligned rectangle.
    FillRect {
        top_left: Point,
        size: Size,
        color: Rgb565,
    },
    /// Stroke a line segment with the given width.
    Line {
        start: Point,
        end: Point,
        color: Rgb565,
        width: u32,
    },
    /// Draw left-aligned text inside a bounding rectangle.
    Text {
        text: LabelText,
        bounds: Rectangle,
        color: Rgb565,
    },
}

// =============================================================================
// Overlay Styling
// =============================================================================

/// Color/overlay configuration distinguishing the display variants.
///
/// The two historical render routines differed only in the pointer and
/// crosshair color and in whether the aircraft-instrument bank scale was
/// drawn; they collapse into one projector parameterized by this struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayStyle {
    /// Color of the fixed bank pointer and crosshair.
    pub pointer_color: Rgb565,
    /// Whether the rotated bank scale (arrow + tick marks) is drawn.
    pub show_bank_scale: bool,
}

impl OverlayStyle {
    /// Classic variant: yellow pointer/crosshair with the full bank scale.
    pub const fn classic() -> Self {
        Self {
            pointer_color: YELLOW,
            show_bank_scale: true,
        }
    }

    /// Plain variant: black pointer/crosshair, no bank scale.
    pub const fn plain() -> Self {
        Self {
            pointer_color: BLACK,
            show_bank_scale: false,
        }
    }

    /// Switch between the two variants.
    pub const fn toggled(self) -> Self {
        if self.show_bank_scale {
            Self::plain()
        } else {
            Self::classic()
        }
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::classic()
    }
}

// =============================================================================
// Fixed Overlay Artwork
// =============================================================================
//
// Segment tables in absolute screen coordinates for the 144x168 panel.
// The bank-scale segments pass through the rotate-about-center helper; the
// pointer and crosshair are drawn as-is.

/// Zero-degree bank arrow (rotated with the horizon), stroked at width 5.
const BANK_ARROW: [(i32, i32, i32, i32); 3] = [(72, 10, 76, 2), (72, 10, 68, 2), (76, 2, 68, 2)];

/// Bank scale tick marks (rotated with the horizon), stroked at width 3.
/// First seven go left from the arrow, last seven mirror to the right.
const BANK_TICKS: [(i32, i32, i32, i32); 14] = [
    (59, 12, 58, 9),
    (47, 15, 46, 12),
    (35, 21, 31, 14),
    (20, 32, 16, 24),
    (20, 32, 12, 28),
    (16, 24, 12, 28),
    (9, 47, 2, 43),
    (84, 12, 85, 9),
    (96, 15, 97, 12),
    (108, 21, 112, 14),
    (123, 32, 127, 24),
    (123, 32, 131, 28),
    (127, 24, 131, 28),
    (134, 47, 141, 43),
];

/// Fixed aircraft pointer triangle below the bank arrow, width 5.
const POINTER_TRIANGLE: [(i32, i32, i32, i32); 3] =
    [(72, 16, 76, 24), (72, 16, 68, 24), (76, 24, 68, 24)];

/// Crosshair wings and notches around the screen center, width 3.
const CROSSHAIR_SEGMENTS: [(i32, i32, i32, i32); 4] =
    [(37, 84, 57, 84), (57, 84, 57, 88), (87, 84, 109, 84), (87, 84, 87, 88)];

/// Sentinel: horizon crossing right of every pixel (row is fully sky or
/// fully ground depending on the bank branch).
const HORIZON_PAST_RIGHT: i64 = SCREEN_WIDTH as i64 + 1;

/// Sentinel: horizon crossing left of every pixel.
const HORIZON_PAST_LEFT: i64 = -1;

// =============================================================================
// Projector
// =============================================================================

/// Stateless per-frame renderer from attitude to draw commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct HorizonProjector {
    style: OverlayStyle,
}

impl HorizonProjector {
    pub const fn new(style: OverlayStyle) -> Self {
        Self { style }
    }

    pub const fn style(&self) -> OverlayStyle {
        self.style
    }

    /// Replace the overlay style (variant switch).
    pub const fn set_style(&mut self, style: OverlayStyle) {
        self.style = style;
    }

    /// Produce the complete command list for one frame.
    pub fn render(&self, attitude: &Attitude) -> Vec<DrawCommand> {
        let mut cmds = Vec::with_capacity(280);

        // Ground-color background; sky rows are painted over it
        cmds.push(DrawCommand::FillRect {
            top_left: Point::zero(),
            size: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            color: GROUND_TAN,
        });

        self.push_horizon(&mut cmds, attitude);
        self.push_pitch_ladder(&mut cmds, attitude);
        self.push_pitch_labels(&mut cmds, attitude);
        if self.style.show_bank_scale {
            self.push_bank_scale(&mut cmds, attitude.bank);
        }
        self.push_fixed_overlays(&mut cmds);

        cmds
    }

    /// Sky fill: one horizontal segment per scan row, split where the
    /// horizon crosses that row.
    fn push_horizon(&self, cmds: &mut Vec<DrawCommand>, attitude: &Attitude) {
        let cos = i64::from(cos_lookup(attitude.bank));
        let sin = i64::from(sin_lookup(attitude.bank));
        let pitch_term = i64::from(attitude.pitch) * PITCH_SCALING;
        let width = i64::from(SCREEN_WIDTH);

        // Bank in the upper half of the rotation domain puts the sky fill
        // left of the horizon crossing; the lower half mirrors it.
        let sky_on_left = attitude.bank >= 0 && attitude.bank <= HALF_TURN;

        for row in 0..SCREEN_HEIGHT as i32 {
            let tilt = i64::from(row - CENTER_Y) * -cos + pitch_term;

            let horizon = if sin == 0 {
                // Horizon parallel to the scan rows: the whole row is on
                // one side, decided by the sign of the tilt term
                if tilt > i64::from(TRIG_MAX_RATIO) / 2 {
                    HORIZON_PAST_RIGHT
                } else {
                    HORIZON_PAST_LEFT
                }
            } else {
                i64::from(CENTER_X) + tilt / sin
            };

            let span = if sky_on_left {
                if horizon < 0 {
                    continue;
                } else if horizon > width {
                    (0, width)
                } else {
                    (0, horizon)
                }
            } else if horizon < 0 {
                (0, width)
            } else if horizon > width {
                continue;
            } else {
                (horizon, width)
            };

            cmds.push(DrawCommand::Line {
                start: Point::new(span.0 as i32, row),
                end: Point::new(span.1 as i32, row),
                color: SKY_BLUE,
                width: 1,
            });
        }
    }

    /// Pitch ladder: one tick per index, major every even index, all
    /// rotated with the horizon.
    fn push_pitch_ladder(&self, cmds: &mut Vec<DrawCommand>, attitude: &Attitude) {
        for i in LADDER_RANGE {
            let half = if i % 2 != 0 {
                LADDER_HALF_MINOR
            } else {
                LADDER_HALF_MAJOR
            };

            let y = pitch_offset_to_pixels(i, LADDER_STEP_DIVISOR, attitude.pitch);
            let start = rotate_about_center(attitude.bank, half, y);
            let end = rotate_about_center(attitude.bank, -half, y);

            cmds.push(DrawCommand::Line {
                start,
                end,
                color: WHITE,
                width: 1,
            });
        }
    }

    /// Ten-degree pitch labels beside the ladder, rotated with the horizon.
    fn push_pitch_labels(&self, cmds: &mut Vec<DrawCommand>, attitude: &Attitude) {
        for i in LABEL_RANGE {
            if i == 0 {
                continue;
            }

            let y = pitch_offset_to_pixels(i, LABEL_STEP_DIVISOR, attitude.pitch);
            let anchor = rotate_about_center(attitude.bank, LABEL_X_OFFSET, y);

            // Positive indices sit below the horizon and label negative
            // pitch, hence the sign flip
            let mut text = LabelText::new();
            let _ = write!(text, "{}0", -i);

            cmds.push(DrawCommand::Text {
                text,
                // Offset so the glyph box is roughly centered on the anchor
                bounds: Rectangle::new(anchor - Point::new(10, 10), Size::new(20, 10)),
                color: WHITE,
            });
        }
    }

    /// Bank scale: zero-degree arrow plus tick marks, counter-rotated so
    /// they track the horizon.
    fn push_bank_scale(&self, cmds: &mut Vec<DrawCommand>, bank: i32) {
        for &(x1, y1, x2, y2) in &BANK_ARROW {
            cmds.push(rotated_segment(bank, x1, y1, x2, y2, WHITE, 5));
        }
        for &(x1, y1, x2, y2) in &BANK_TICKS {
            cmds.push(rotated_segment(bank, x1, y1, x2, y2, WHITE, 3));
        }
    }

    /// Fixed pointer triangle and crosshair, independent of attitude.
    fn push_fixed_overlays(&self, cmds: &mut Vec<DrawCommand>) {
        let color = self.style.pointer_color;

        for &(x1, y1, x2, y2) in &POINTER_TRIANGLE {
            cmds.push(DrawCommand::Line {
                start: Point::new(x1, y1),
                end: Point::new(x2, y2),
                color,
                width: 5,
            });
        }

        // Center dot: a width-5 degenerate line reads as a filled square
        cmds.push(DrawCommand::Line {
            start: Point::new(CENTER_X, CENTER_Y),
            end: Point::new(CENTER_X, CENTER_Y),
            color,
            width: 5,
        });

        for &(x1, y1, x2, y2) in &CROSSHAIR_SEGMENTS {
            cmds.push(DrawCommand::Line {
                start: Point::new(x1, y1),
                end: Point::new(x2, y2),
                color,
                width: 3,
            });
        }
    }
}

// =============================================================================
// Geometry Helpers
// =============================================================================

/// Convert a ladder/label index into a rotated-frame y coordinate in
/// pixels: `(0x10000 * i / divisor + pitch) * PITCH_SCALING / 0x10000`.
///
/// Truncating division at each step, matching the calibration of
/// `PITCH_SCALING`.
fn pitch_offset_to_pixels(index: i32, divisor: i64, pitch: i32) -> i64 {
    let angle_offset = i64::from(ANGLE_RANGE) * i64::from(index) / divisor;
    (angle_offset + i64::from(pitch)) * PITCH_SCALING / i64::from(TRIG_MAX_RATIO)
}

/// Rotate a center-relative point by `-bank` and translate it back into
/// screen coordinates.
///
/// Standard 2D rotation with the 0x10000-radius trig lookups; products are
/// i64 to keep `trig × offset` far from overflow.
fn rotate_about_center(bank: i32, x: i64, y: i64) -> Point {
    let cos = i64::from(cos_lookup(-bank));
    let sin = i64::from(sin_lookup(-bank));
    let ratio = i64::from(TRIG_MAX_RATIO);

    let px = (cos * x - sin * y) / ratio;
    let py = (sin * x + cos * y) / ratio;

    Point::new(px as i32 + CENTER_X, py as i32 + CENTER_Y)
}

/// Rotate an absolute-coordinate segment about the screen center by
/// `-bank` and wrap it in a Line command.
fn rotated_segment(
    bank: i32,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Rgb565,
    width: u32,
) -> DrawCommand {
    let start = rotate_about_center(
        bank,
        i64::from(x1 - CENTER_X),
        i64::from(y1 - CENTER_Y),
    );
    let end = rotate_about_center(
        bank,
        i64::from(x2 - CENTER_X),
        i64::from(y2 - CENTER_Y),
    );
    DrawCommand::Line {
        start,
        end,
        color,
        width,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixedmath::QUARTER_TURN;

    /// Rows covered by sky-fill commands, as (row, start_x, end_x).
    fn sky_spans(cmds: &[DrawCommand]) -> Vec<(i32, i32, i32)> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCommand::Line {
                    start,
                    end,
                    color,
                    width: 1,
                } if *color == SKY_BLUE && start.y == end.y => Some((start.y, start.x, end.x)),
                _ => None,
            })
            .collect()
    }

    fn render_with(pitch: i32, bank: i32) -> Vec<DrawCommand> {
        HorizonProjector::new(OverlayStyle::classic()).render(&Attitude { pitch, bank })
    }

    // -------------------------------------------------------------------------
    // Rotation Helper Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_rotation_round_trip_within_one_unit() {
        let original = (30i64, -40i64);
        for bank in [0, QUARTER_TURN, HALF_TURN, 3 * QUARTER_TURN] {
            // Rotate forward, re-center, rotate back
            let forward = rotate_about_center(bank, original.0, original.1);
            let back = rotate_about_center(
                -bank,
                i64::from(forward.x - CENTER_X),
                i64::from(forward.y - CENTER_Y),
            );
            let restored = (i64::from(back.x - CENTER_X), i64::from(back.y - CENTER_Y));
            assert!(
                (restored.0 - original.0).abs() <= 1 && (restored.1 - original.1).abs() <= 1,
                "Round trip at bank {bank} drifted: {original:?} -> {restored:?}"
            );
        }
    }

    #[test]
    fn test_rotation_identity_at_zero_bank() {
        let p = rotate_about_center(0, 15, -20);
        assert_eq!(p, Point::new(CENTER_X + 15, CENTER_Y - 20));
    }

    #[test]
    fn test_rotation_quarter_turn_swaps_axes() {
        // Rotation by -0x4000: (x, y) -> (y, -x) in the screen frame
        let p = rotate_about_center(QUARTER_TURN, 10, 4);
        assert_eq!(p, Point::new(CENTER_X + 4, CENTER_Y - 10));
    }

    // -------------------------------------------------------------------------
    // Horizon Fill Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_flat_horizon_splits_at_mid_screen() {
        // Level flight: zero-sin branch, sky rows exactly 0..=83
        let spans = sky_spans(&render_with(0, 0));
        assert_eq!(spans.len(), 84, "Exactly the top half should be sky");
        for (row, x0, x1) in &spans {
            assert!(*row < CENTER_Y, "Sky row {row} should be above center");
            assert_eq!((*x0, *x1), (0, SCREEN_WIDTH as i32), "Sky rows should span full width");
        }
        let max_row = spans.iter().map(|s| s.0).max().unwrap();
        assert_eq!(max_row, CENTER_Y - 1, "Split should occur exactly at mid-screen");
    }

    #[test]
    fn test_quarter_bank_gives_vertical_horizon() {
        // 90 degrees of bank: horizon crossing is x = 72 on every row,
        // sky filling the left half
        let spans = sky_spans(&render_with(0, QUARTER_TURN));
        assert_eq!(spans.len(), SCREEN_HEIGHT as usize, "Every row should carry a sky span");
        for (row, x0, x1) in spans {
            assert_eq!((x0, x1), (0, CENTER_X), "Row {row} should fill left of center");
        }
    }

    #[test]
    fn test_inverted_bank_fills_opposite_side() {
        // Bank past the half turn flips the filled side to the right
        let spans = sky_spans(&render_with(0, 3 * QUARTER_TURN));
        assert_eq!(spans.len(), SCREEN_HEIGHT as usize);
        for (row, x0, x1) in spans {
            assert_eq!(
                (x0, x1),
                (CENTER_X, SCREEN_WIDTH as i32),
                "Row {row} should fill right of center"
            );
        }
    }

    #[test]
    fn test_extreme_pitch_fills_everything_or_nothing() {
        // Pitch far positive at level bank: tilt term dominates every row
        let all_sky = sky_spans(&render_with(0x4000, 0));
        assert_eq!(all_sky.len(), SCREEN_HEIGHT as usize, "Nose far up: all rows sky");

        let no_sky = sky_spans(&render_with(-0x4000, 0));
        assert!(no_sky.is_empty(), "Nose far down: no sky rows");
    }

    // -------------------------------------------------------------------------
    // Command List Structure Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_background_fill_is_first_command() {
        let cmds = render_with(0, 0);
        assert_eq!(
            cmds[0],
            DrawCommand::FillRect {
                top_left: Point::zero(),
                size: Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                color: GROUND_TAN,
            },
            "Frame must start with the full-screen ground fill"
        );
    }

    #[test]
    fn test_label_count_and_text() {
        let cmds = render_with(0, 0);
        let labels: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str().to_owned()),
                _ => None,
            })
            .collect();
        // Indices -9..10 minus the skipped zero
        assert_eq!(labels.len(), 18, "One label per non-zero ten-degree index");
        assert!(labels.contains(&"90".to_owned()), "Index -9 should label +90");
        assert!(labels.contains(&"-90".to_owned()), "Index 9 should label -90");
        assert!(!labels.contains(&"00".to_owned()), "Zero index must be skipped");
    }

    #[test]
    fn test_ladder_tick_count() {
        let cmds = render_with(0, 0);
        let white_thin = cmds
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCommand::Line {
                        color,
                        width: 1,
                        ..
                    } if *color == WHITE
                )
            })
            .count();
        assert_eq!(white_thin, 52, "Ladder should draw one tick per index in -26..26");
    }

    #[test]
    fn test_plain_style_omits_bank_scale() {
        let classic = render_with(0, 0);
        let plain =
            HorizonProjector::new(OverlayStyle::plain()).render(&Attitude { pitch: 0, bank: 0 });

        let white_wide = |cmds: &[DrawCommand]| {
            cmds.iter()
                .filter(|c| {
                    matches!(
                        c,
                        DrawCommand::Line { color, width, .. }
                        if *color == WHITE && (*width == 3 || *width == 5)
                    )
                })
                .count()
        };
        // Classic: 3 arrow segments (w5) + 14 ticks (w3)
        assert_eq!(white_wide(&classic), 17, "Classic variant draws the bank scale");
        assert_eq!(white_wide(&plain), 0, "Plain variant omits the bank scale");

        // Pointer + crosshair survive in both, in the style's color
        let pointer_count = |cmds: &[DrawCommand], color: Rgb565| {
            cmds.iter()
                .filter(|c| matches!(c, DrawCommand::Line { color: c2, .. } if *c2 == color))
                .count()
        };
        assert_eq!(pointer_count(&classic, YELLOW), 8);
        assert_eq!(pointer_count(&plain, BLACK), 8);
    }

    #[test]
    fn test_unbanked_overlays_are_axis_aligned() {
        // At zero bank the rotated bank arrow lands on its authored
        // coordinates (rotation is the identity there)
        let cmds = render_with(0, 0);
        let has_arrow_tip = cmds.iter().any(|c| {
            matches!(
                c,
                DrawCommand::Line { start, end, width: 5, .. }
                if *start == Point::new(72, 10) && *end == Point::new(76, 2)
            )
        });
        assert!(has_arrow_tip, "Unrotated arrow should match its authored geometry");
    }

    #[test]
    fn test_render_is_deterministic() {
        let att = Attitude { pitch: -1234, bank: 0x3456 };
        let projector = HorizonProjector::new(OverlayStyle::classic());
        assert_eq!(
            projector.render(&att),
            projector.render(&att),
            "Stateless projector must be reproducible"
        );
    }

    #[test]
    fn test_style_toggle_round_trip() {
        let style = OverlayStyle::classic();
        assert_eq!(style.toggled(), OverlayStyle::plain());
        assert_eq!(style.toggled().toggled(), style);
    }
}
