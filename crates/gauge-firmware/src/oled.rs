//! SSD1306 panels as presenter surfaces

use display_interface::{DisplayError, WriteOnlyDataCommand};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use esp_hal::i2c::master::ConfigError;
use gauge_core::display::Surface;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};
use thiserror_no_std::Error;

type Buffered<DI> = Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

#[derive(Error, Debug)]
pub enum OledInitError {
    #[error("I2C bus configuration failed: {0:?}")]
    Bus(ConfigError),
    #[error("SSD1306 did not respond: {0:?}")]
    Display(DisplayError),
}

/// A 128x64 SSD1306 in buffered graphics mode.
pub struct Panel<DI> {
    display: Buffered<DI>,
}

impl<I: embedded_hal::i2c::I2c> Panel<I2CInterface<I>> {
    /// Bring up a panel at the default 0x3C address with full contrast.
    pub fn init(i2c: I) -> Result<Self, OledInitError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        display.init().map_err(OledInitError::Display)?;
        display
            .set_brightness(Brightness::BRIGHTEST)
            .map_err(OledInitError::Display)?;

        Ok(Self { display })
    }
}

impl<DI: WriteOnlyDataCommand> OriginDimensions for Panel<DI> {
    fn size(&self) -> Size {
        OriginDimensions::size(&self.display)
    }
}

impl<DI: WriteOnlyDataCommand> DrawTarget for Panel<DI> {
    type Color = BinaryColor;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display.draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::clear(&mut self.display, color)
    }
}

impl<DI: WriteOnlyDataCommand> Surface for Panel<DI> {
    type FlushError = DisplayError;

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.display.flush()
    }
}
