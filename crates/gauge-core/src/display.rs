//! Display surface abstraction

use core::fmt::Debug;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;

/// A monochrome drawing buffer that is pushed to its panel with [`flush`].
///
/// Drawing only touches the buffer; nothing reaches the device until the
/// buffer is flushed.
///
/// [`flush`]: Surface::flush
pub trait Surface: DrawTarget<Color = BinaryColor> {
    type FlushError: Debug;

    /// Send the whole buffer to the device.
    fn flush(&mut self) -> Result<(), Self::FlushError>;
}
