//! Two-panel rendering
//!
//! The primary panel shows the live pressure and sensor voltage centered in
//! a frame. The secondary panel always shows the same greeting. Every call
//! to [`Presenter::render`] redraws both panels from scratch.

use core::fmt::{Debug, Write};

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Primitive, PrimitiveStyle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

use crate::boot::DisplayId;
use crate::display::Surface;
use crate::error::{PresentError, describe};
use crate::layout::{
    DISPLAY_WIDTH_PX, FONT, FRAME_STROKE_WIDTH_PX, FRAME_WIDTH_PX, FRAME_X_PX, GREETING,
    GREETING_BASELINE_Y_PX, TEXT_BUFFER_LEN, frame, pressure_baseline_y, voltage_baseline_y,
};
use crate::reading::Reading;

/// Bounded buffer for one formatted value.
pub type ValueText = heapless::String<TEXT_BUFFER_LEN>;

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyle::new(FONT, BinaryColor::On)
}

/// Format the pressure magnitude. The sign is dropped on purpose so the
/// panel never shows a minus.
pub fn format_pressure(pressure_cbar: f32) -> ValueText {
    let mut text = ValueText::new();
    write!(text, "{:.2} cBar", pressure_cbar.abs()).ok();
    text
}

pub fn format_voltage(sensor_volts: f32) -> ValueText {
    let mut text = ValueText::new();
    write!(text, "{:.2} V", sensor_volts).ok();
    text
}

/// Width of `text` in pixels as the font renders it.
pub fn text_width(text: &str) -> i32 {
    text_style()
        .measure_string(text, Point::zero(), Baseline::Alphabetic)
        .bounding_box
        .size
        .width as i32
}

/// Left edge that centers `width` pixels inside `[left, left + span)`.
///
/// Division truncates toward zero, so text wider than the span starts left
/// of `left`.
pub const fn centered_x(left: i32, span: i32, width: i32) -> i32 {
    left + (span - width) / 2
}

/// Layout baselines name the first row below the glyphs, while an
/// alphabetic baseline in embedded-graphics is the glyphs' bottom row.
const BASELINE_LIFT_PX: i32 = 1;

fn draw_centered<D>(target: &mut D, text: &str, left: i32, span: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let x = centered_x(left, span, text_width(text));
    let origin = Point::new(x, y - BASELINE_LIFT_PX);
    Text::with_baseline(text, origin, text_style(), Baseline::Alphabetic).draw(target)?;
    Ok(())
}

/// Draw the framed pressure and voltage readout.
pub fn draw_gauge<D>(target: &mut D, sensor_volts: f32, pressure_cbar: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;

    frame()
        .into_styled(PrimitiveStyle::with_stroke(
            BinaryColor::On,
            FRAME_STROKE_WIDTH_PX,
        ))
        .draw(target)?;

    let span = FRAME_WIDTH_PX as i32;
    draw_centered(
        target,
        &format_pressure(pressure_cbar),
        FRAME_X_PX,
        span,
        pressure_baseline_y(),
    )?;
    draw_centered(
        target,
        &format_voltage(sensor_volts),
        FRAME_X_PX,
        span,
        voltage_baseline_y(),
    )
}

/// Draw the static greeting centered across the panel.
pub fn draw_greeting<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    draw_centered(
        target,
        GREETING,
        0,
        DISPLAY_WIDTH_PX as i32,
        GREETING_BASELINE_Y_PX,
    )
}

/// Owns both display surfaces.
pub struct Presenter<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> Presenter<P, S>
where
    P: Surface,
    P::Error: Debug,
    S: Surface,
    S::Error: Debug,
{
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    /// Redraw and flush both panels.
    ///
    /// Stops at the first failing step; the next call starts over.
    pub fn render(&mut self, reading: Reading) -> Result<(), PresentError> {
        draw_gauge(
            &mut self.primary,
            reading.sensor_volts,
            reading.pressure_cbar,
        )
        .map_err(|e| PresentError::Draw {
            display: DisplayId::Primary,
            details: describe(&e),
        })?;
        self.primary.flush().map_err(|e| PresentError::Flush {
            display: DisplayId::Primary,
            details: describe(&e),
        })?;

        draw_greeting(&mut self.secondary).map_err(|e| PresentError::Draw {
            display: DisplayId::Secondary,
            details: describe(&e),
        })?;
        self.secondary.flush().map_err(|e| PresentError::Flush {
            display: DisplayId::Secondary,
            details: describe(&e),
        })
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }
}
