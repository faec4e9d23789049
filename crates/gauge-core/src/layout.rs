//! Display geometry shared by both panels
//!
//! Both displays are 128x64 SSD1306 panels using the same 6x10 font.
//! Text positions are alphabetic baselines.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Panel width in pixels
pub const DISPLAY_WIDTH_PX: u32 = 128;

/// Panel height in pixels
pub const DISPLAY_HEIGHT_PX: u32 = 64;

/// Font used on both panels
pub const FONT: &MonoFont<'static> = &FONT_6X10;

/// Gauge frame top-left x
pub const FRAME_X_PX: i32 = 28;

/// Gauge frame top-left y
pub const FRAME_Y_PX: i32 = 25;

/// Gauge frame width
pub const FRAME_WIDTH_PX: u32 = 72;

/// Gauge frame height
pub const FRAME_HEIGHT_PX: u32 = 39;

/// Gauge frame stroke width
pub const FRAME_STROKE_WIDTH_PX: u32 = 1;

/// Pressure baseline, measured down from the frame top
pub const PRESSURE_BASELINE_OFFSET_PX: i32 = 15;

/// Voltage baseline, measured up from the frame bottom
pub const VOLTAGE_BASELINE_INSET_PX: i32 = 8;

/// Capacity of the formatted value strings
pub const TEXT_BUFFER_LEN: usize = 20;

/// Static text on the secondary panel
pub const GREETING: &str = "Hello World";

/// Greeting baseline, at half the panel height
pub const GREETING_BASELINE_Y_PX: i32 = DISPLAY_HEIGHT_PX as i32 / 2;

/// The gauge frame rectangle on the primary panel.
pub const fn frame() -> Rectangle {
    Rectangle::new(
        Point::new(FRAME_X_PX, FRAME_Y_PX),
        Size::new(FRAME_WIDTH_PX, FRAME_HEIGHT_PX),
    )
}

/// Baseline y of the pressure line.
pub const fn pressure_baseline_y() -> i32 {
    FRAME_Y_PX + PRESSURE_BASELINE_OFFSET_PX
}

/// Baseline y of the voltage line.
pub const fn voltage_baseline_y() -> i32 {
    FRAME_Y_PX + FRAME_HEIGHT_PX as i32 - VOLTAGE_BASELINE_INSET_PX
}
