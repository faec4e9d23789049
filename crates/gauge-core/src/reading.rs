//! Per-iteration measurement values

/// Averaged output of one sampling burst.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Integer mean of the raw 12-bit codes.
    pub raw: u16,
    /// Mean voltage at the ADC pin, in volts.
    pub pin_volts: f32,
}

/// A complete measurement, produced fresh each loop iteration.
///
/// Nothing is carried over between iterations; every field is derived from
/// the samples of the current burst.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reading {
    /// Averaged raw ADC code (0..=4095).
    pub raw: u16,
    /// Voltage at the ADC pin, in volts.
    pub pin_volts: f32,
    /// Voltage at the sensor output before the divider, in volts.
    pub sensor_volts: f32,
    /// Pressure in centibar. May be negative.
    pub pressure_cbar: f32,
}
