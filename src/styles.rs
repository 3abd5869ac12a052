//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are const-constructible in
//! embedded-graphics 0.8, so the fixed styles live in the binary's
//! read-only data instead of being rebuilt every frame. Styles whose color
//! varies at runtime (pitch labels under dimming) are built from the
//! exposed font reference instead: `MonoTextStyle::new(LABEL_FONT, color)`.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

use crate::colors::WHITE;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Left-aligned text. Pitch labels anchor at their bounds origin.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Pitch label font (6x10 pixels), small enough to fit two glyphs and a
/// sign inside the 20x10 label bounds.
/// Usage: `MonoTextStyle::new(LABEL_FONT, dynamic_color)`
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// White readout text for the diagnostic pitch/bank overlay (`ProFont` 14pt).
pub const READOUT_STYLE_WHITE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&PROFONT_14_POINT, WHITE);
