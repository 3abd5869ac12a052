// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, i64->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // i32->f32 in the synthetic signal generator
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges

//! Attitude indicator (artificial horizon) simulator.
//!
//! Renders a 144x168 aircraft attitude display driven by 3-axis
//! accelerometer samples: blue sky over tan ground split at the banked and
//! pitched horizon, a five-degree pitch ladder with ten-degree labels, a
//! rotating bank scale, and a fixed aircraft pointer with crosshair.
//!
//! The pipeline is pure integer fixed-point end to end:
//!
//! ```text
//! raw sample -> SignalSmoother -> AttitudeEstimator -> HorizonProjector
//!            -> Vec<DrawCommand> -> render sink -> display
//! ```
//!
//! Angles live in a 0..0x10000 domain (65536 units per revolution) and the
//! trig lookups return values on a 0x10000-radius circle, so the whole
//! projection runs without floating point. The simulator shell does use
//! floats, but only to synthesize plausible accelerometer data.
//!
//! # Controls (Simulator Mode)
//!
//! | Key | Action |
//! |-----|--------|
//! | `Up` / `Down` / `Return` | Toggle backlight (any of the three device buttons) |
//! | `S` | Switch overlay variant (classic yellow / plain) |
//! | `D` | Toggle the pitch/bank readout overlay |
//! | `Escape` | Quit |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

mod app;
mod attitude;
mod colors;
mod config;
mod fixedmath;
mod projector;
mod render;
mod smoothing;
mod styles;

use std::thread;
use std::time::Instant;

use core::fmt::Write as _;

use app::AttitudeApp;
use attitude::Attitude;
use config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use fixedmath::ANGLE_RANGE;
use heapless::String;
use projector::OverlayStyle;
use render::draw_frame;
use styles::READOUT_STYLE_WHITE;

fn main() {
    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("Attitude Indicator", &output_settings);

    let mut app = AttitudeApp::new(OverlayStyle::classic());

    // Backlight state (any device button toggles it, default on)
    let mut light = true;

    // Diagnostic pitch/bank readout overlay (D key)
    let mut show_readout = false;

    // Signal generation time parameter (advances each frame)
    let mut t = 0.0f32;

    // First frame before any events arrive
    window.update(&display);

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, key presses)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Escape => return,
                        // Any of the three device buttons toggles the backlight
                        Keycode::Up | Keycode::Down | Keycode::Return => {
                            light = !light;
                        }
                        // Switch overlay variant (classic <-> plain)
                        Keycode::S => app.toggle_overlay_style(),
                        // Toggle diagnostic readout
                        Keycode::D => show_readout = !show_readout,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // One synthetic accelerometer sample per tick (the hardware
        // subscription delivered one sample per callback)
        let (x, y, z) = synthetic_sample(t);
        app.on_sample(x, y, z);

        // Sample delivery marked the frame dirty; derive and paint it
        if app.needs_redraw() {
            let att = app.attitude();
            let commands = app.render();
            draw_frame(&mut display, &commands, light);
            if show_readout {
                draw_readout(&mut display, &att);
            }
        }

        window.update(&display);

        // Advance signal time and pace the loop to the sample rate
        t += 0.05;
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

/// Gravity magnitude of the synthetic signal, raw accelerometer units.
const SYNTHETIC_GRAVITY: f32 = 1000.0;

/// Synthesize one accelerometer sample for a slow pitch/roll sweep.
///
/// Works backward from target angles: picks an oscillating pitch and bank,
/// then builds the gravity vector whose estimate would reproduce them
/// (`z = g*sin(pitch)`, horizontal magnitude `g*cos(pitch)` split between
/// `x = h*sin(bank)` and `y = -h*cos(bank)`). The two frequencies are
/// deliberately incommensurate so the motion never visibly repeats.
fn synthetic_sample(t: f32) -> (i32, i32, i32) {
    let pitch = oscillate(t, -20.0, 20.0, 0.11).to_radians();
    let bank = oscillate(t, -50.0, 50.0, 0.07).to_radians();

    let z = SYNTHETIC_GRAVITY * pitch.sin();
    let horizontal = SYNTHETIC_GRAVITY * pitch.cos();
    let x = horizontal * bank.sin();
    let y = -horizontal * bank.cos();

    (x as i32, y as i32, z as i32)
}

/// Sinusoidal sweep between min and max values.
///
/// # Parameters
/// - `t`: Time parameter (advances each frame)
/// - `min`: Minimum output value
/// - `max`: Maximum output value
/// - `freq`: Oscillation frequency (higher = faster cycles)
fn oscillate(t: f32, min: f32, max: f32, freq: f32) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// Draw the one-line diagnostic pitch/bank readout in the top-left corner.
///
/// Shell-only diagnostic; deliberately not part of the projector's command
/// list so the core pipeline stays byte-comparable across frames.
fn draw_readout(display: &mut SimulatorDisplay<Rgb565>, attitude: &Attitude) {
    let mut readout: String<24> = String::new();
    let _ = write!(
        readout,
        "P{:+} B{}",
        angle_to_degrees(attitude.pitch),
        angle_to_degrees(attitude.bank)
    );
    Text::new(&readout, Point::new(2, 12), READOUT_STYLE_WHITE)
        .draw(display)
        .ok();
}

/// Convert a fixed-point angle to whole degrees (diagnostic display only).
fn angle_to_degrees(angle: i32) -> i32 {
    angle * 360 / ANGLE_RANGE
}

// =============================================================================
// Unit Tests
// =============================================================================
