//! Compile-time configuration
//!
//! Every tunable of the gauge is fixed at build time. Pin assignments are
//! board-specific and live in the firmware crate.

use crate::converter::{Calibration, Divider, TransferFunction};

/// Readings averaged per sample.
pub const SAMPLE_COUNT: u32 = 10;

/// Settle delay after each ADC reading, in milliseconds.
pub const SAMPLE_SETTLE_MS: u32 = 5;

/// Pause between two full loop iterations, in milliseconds.
pub const LOOP_PERIOD_MS: u64 = 1000;

/// Wait before the first console line so a host terminal can attach.
pub const STARTUP_SETTLE_MS: u64 = 1500;

/// Console UART baud rate.
pub const CONSOLE_BAUD: u32 = 9600;

/// Primary display bus clock.
pub const PRIMARY_BUS_KHZ: u32 = 400;

/// Secondary display bus clock. The secondary bus is clocked independently.
pub const SECONDARY_BUS_KHZ: u32 = 100;

/// Largest code of the 12-bit ADC.
pub const ADC_MAX_CODE: u16 = 4095;

/// Nominal full-scale input of the ADC at 0 dB attenuation (ESP32-S3).
/// Used to report a raw code alongside calibrated millivolts.
pub const ADC_FULL_SCALE_MV: u16 = 950;

/// Resistive divider between the sensor output and the ADC pin.
///
/// R2 is sized so the divider tops out near the ADC full-scale input.
pub const DIVIDER: Divider = Divider {
    r1_ohms: 3569.0,
    r2_ohms: 1100.0,
};

/// Reference-meter calibration. Both references at 1.0 make the factor inert.
pub const CALIBRATION: Calibration = Calibration {
    multimeter_volts: 1.0,
    expected_volts: 1.0,
};

/// Sensor transfer function: 5 cBar per volt, -22.5 cBar offset.
pub const TRANSFER: TransferFunction = TransferFunction {
    slope: 5.0,
    offset: -22.5,
};
