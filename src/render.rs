//! Rendering sink: replays a frame's draw commands onto the simulator
//! display.
//!
//! The projector knows nothing about embedded-graphics; this module is the
//! only place that maps [`DrawCommand`] variants onto concrete primitives:
//!
//! - `FillRect` → `Rectangle` with a fill style
//! - `Line` → `Line` with a stroke style of the commanded width
//! - `Text` → left-aligned mono-font text at the bounds origin (labels are
//!   at most three glyphs of a 6x10 font inside a 20x10 box, so wrapping
//!   never engages)
//!
//! # Backlight
//!
//! The physical device toggled its backlight on button presses. The
//! simulator models "light off" by mapping every command color through
//! [`colors::dimmed`] before drawing, which keeps the whole pipeline
//! untouched while visibly darkening the frame.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors;
use crate::projector::DrawCommand;
use crate::styles::{LABEL_FONT, LEFT_ALIGNED};
use embedded_graphics::mono_font::MonoTextStyle;

/// Replay one frame's command list onto the display.
///
/// `light` is the backlight state; when false every color is dimmed.
pub fn draw_frame(display: &mut SimulatorDisplay<Rgb565>, commands: &[DrawCommand], light: bool) {
    for command in commands {
        draw_command(display, command, light);
    }
}

fn draw_command(display: &mut SimulatorDisplay<Rgb565>, command: &DrawCommand, light: bool) {
    match command {
        DrawCommand::FillRect { top_left, size, color } => {
            Rectangle::new(*top_left, *size)
                .into_styled(PrimitiveStyle::with_fill(apply_light(*color, light)))
                .draw(display)
                .ok();
        }
        DrawCommand::Line { start, end, color, width } => {
            Line::new(*start, *end)
                .into_styled(PrimitiveStyle::with_stroke(apply_light(*color, light), *width))
                .draw(display)
                .ok();
        }
        DrawCommand::Text { text, bounds, color } => {
            // Mono-font text anchors at the baseline; offset by the font
            // height so the glyphs sit inside the commanded bounds
            let origin = bounds.top_left + Point::new(0, LABEL_FONT.baseline as i32);
            let style = MonoTextStyle::new(LABEL_FONT, apply_light(*color, light));
            Text::with_text_style(text.as_str(), origin, style, LEFT_ALIGNED)
                .draw(display)
                .ok();
        }
    }
}

#[inline]
fn apply_light(color: Rgb565, light: bool) -> Rgb565 {
    if light {
        color
    } else {
        colors::dimmed(color)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
