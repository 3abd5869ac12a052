//! Color constants for the attitude indicator.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to many small embedded displays and requires no
//! conversion when writing to the display buffer.
//!
//! # Backlight Dimming
//!
//! On hardware the backlight is a physical switch; the simulator
//! approximates it by mapping every color through [`dimmed`] when the
//! light is off: each RGB component is scaled down with 8-bit fixed-point
//! integer math (no float in the per-pixel path).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Plain-variant pointer and crosshair color.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Pitch ladder, labels, and bank scale.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure blue (0, 0, 31). Sky fill above the horizon line.
pub const SKY_BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0). Classic-variant bank pointer and crosshair.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Windsor tan ground color (#A55A00 equivalent). The full screen is
/// pre-filled with this before the sky rows are drawn on top.
/// RGB565: (20, 22, 0).
pub const GROUND_TAN: Rgb565 = Rgb565::new(20, 22, 0);

// =============================================================================
// Backlight Dimming
// =============================================================================

/// Brightness applied when the backlight is off, as an 8-bit fixed-point
/// fraction (64/256 = 25%).
const DIM_LEVEL: u16 = 64;

/// Scale a color toward black using 8-bit fixed-point component math.
///
/// Used by the render sink to simulate the backlight being off. Each RGB565
/// component is multiplied by [`DIM_LEVEL`] and shifted back down, so black
/// stays black and every other color keeps its hue at reduced brightness.
pub fn dimmed(color: Rgb565) -> Rgb565 {
    let raw = color.into_storage();

    let r = (raw >> 11) & 0x1F;
    let g = (raw >> 5) & 0x3F;
    let b = raw & 0x1F;

    Rgb565::new(
        ((r * DIM_LEVEL) >> 8) as u8,
        ((g * DIM_LEVEL) >> 8) as u8,
        ((b * DIM_LEVEL) >> 8) as u8,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimmed_black_stays_black() {
        assert_eq!(dimmed(BLACK), BLACK, "Black should be unaffected by dimming");
    }

    #[test]
    fn test_dimmed_reduces_components() {
        let dim_white = dimmed(WHITE);
        let raw = dim_white.into_storage();
        let r = (raw >> 11) & 0x1F;
        let g = (raw >> 5) & 0x3F;
        let b = raw & 0x1F;

        // 25% of full scale: 31 -> 7, 63 -> 15
        assert_eq!(r, 7, "Red component should scale to 25%");
        assert_eq!(g, 15, "Green component should scale to 25%");
        assert_eq!(b, 7, "Blue component should scale to 25%");
    }

    #[test]
    fn test_dimmed_preserves_zero_components() {
        // Yellow has no blue; dimming must not introduce any
        let dim_yellow = dimmed(YELLOW);
        assert_eq!(dim_yellow.into_storage() & 0x1F, 0, "Blue should stay zero");
    }
}
