//! Peripheral setup for the gauge board
//!
//! Pin map:
//!
//! | Function            | Peripheral | Pins                  |
//! |---------------------|------------|-----------------------|
//! | Divider tap         | ADC1       | GPIO2                 |
//! | Primary display     | I2C0       | SDA GPIO5, SCL GPIO6  |
//! | Secondary display   | I2C1       | SDA GPIO4, SCL GPIO3  |
//! | Console             | UART0      | TX GPIO43             |
//!
//! The two displays sit on separate, independently clocked buses so they can
//! share the same I2C address.

use esp_hal::Blocking;
use esp_hal::i2c::master::{Config as I2cConfig, ConfigError, I2c};
use esp_hal::peripherals::{GPIO3, GPIO4, GPIO5, GPIO6, GPIO43, I2C0, I2C1, UART0};
use esp_hal::time::Rate;
use esp_hal::uart::{self, Uart};
use gauge_core::config::{CONSOLE_BAUD, PRIMARY_BUS_KHZ, SECONDARY_BUS_KHZ};
use log::info;
use ssd1306::prelude::I2CInterface;

use crate::oled::{OledInitError, Panel};

/// An SSD1306 on a blocking esp-hal I2C bus.
pub type OledPanel = Panel<I2CInterface<I2c<'static, Blocking>>>;

/// Create the primary display bus (400 kHz)
pub fn create_primary_bus(
    i2c0: I2C0<'static>,
    sda: GPIO5<'static>,
    scl: GPIO6<'static>,
) -> Result<I2c<'static, Blocking>, ConfigError> {
    Ok(I2c::new(
        i2c0,
        I2cConfig::default().with_frequency(Rate::from_khz(PRIMARY_BUS_KHZ)),
    )?
    .with_sda(sda)
    .with_scl(scl))
}

/// Create the secondary display bus on its own controller and clock
pub fn create_secondary_bus(
    i2c1: I2C1<'static>,
    sda: GPIO4<'static>,
    scl: GPIO3<'static>,
) -> Result<I2c<'static, Blocking>, ConfigError> {
    Ok(I2c::new(
        i2c1,
        I2cConfig::default().with_frequency(Rate::from_khz(SECONDARY_BUS_KHZ)),
    )?
    .with_sda(sda)
    .with_scl(scl))
}

/// Bring up the primary display: bus, then panel.
pub fn init_primary_panel(
    i2c0: I2C0<'static>,
    sda: GPIO5<'static>,
    scl: GPIO6<'static>,
) -> Result<OledPanel, OledInitError> {
    info!("Configuring primary display");
    let bus = create_primary_bus(i2c0, sda, scl).map_err(OledInitError::Bus)?;
    Panel::init(bus)
}

/// Bring up the secondary display: bus, then panel.
pub fn init_secondary_panel(
    i2c1: I2C1<'static>,
    sda: GPIO4<'static>,
    scl: GPIO3<'static>,
) -> Result<OledPanel, OledInitError> {
    info!("Configuring secondary display");
    let bus = create_secondary_bus(i2c1, sda, scl).map_err(OledInitError::Bus)?;
    Panel::init(bus)
}

/// Create the transmit-only console UART
pub fn create_console(
    uart0: UART0<'static>,
    tx: GPIO43<'static>,
) -> Result<Uart<'static, Blocking>, uart::ConfigError> {
    Ok(Uart::new(uart0, uart::Config::default().with_baudrate(CONSOLE_BAUD))?.with_tx(tx))
}
