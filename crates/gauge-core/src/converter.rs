//! Pin voltage to engineering units
//!
//! The sensor output passes through a resistive divider before reaching the
//! ADC pin. The converter undoes the divider, applies the reference-meter
//! calibration factor, and maps sensor volts to centibar with a fixed linear
//! transfer function. It is pure: no clamping, no range checks.

use crate::config::{CALIBRATION, DIVIDER, TRANSFER};
use crate::reading::{Reading, Sample};

/// Two-resistor voltage divider, R1 on the sensor side and R2 to ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider {
    pub r1_ohms: f32,
    pub r2_ohms: f32,
}

impl Divider {
    /// Ratio `(R1 + R2) / R2` that reconstructs the sensor voltage.
    pub fn ratio(&self) -> f32 {
        (self.r1_ohms + self.r2_ohms) / self.r2_ohms
    }
}

/// Correction derived from comparing a reference multimeter against the
/// voltage the gauge expected to see.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub multimeter_volts: f32,
    pub expected_volts: f32,
}

impl Calibration {
    pub fn factor(&self) -> f32 {
        self.multimeter_volts / self.expected_volts
    }
}

/// Linear sensor response, `pressure = slope * volts + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferFunction {
    /// Centibar per volt
    pub slope: f32,
    /// Centibar at zero volts
    pub offset: f32,
}

impl TransferFunction {
    pub fn apply(&self, volts: f32) -> f32 {
        self.slope * volts + self.offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    divider: Divider,
    calibration: Calibration,
    transfer: TransferFunction,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(DIVIDER, CALIBRATION, TRANSFER)
    }
}

impl Converter {
    pub const fn new(
        divider: Divider,
        calibration: Calibration,
        transfer: TransferFunction,
    ) -> Self {
        Self {
            divider,
            calibration,
            transfer,
        }
    }

    /// Convert a pin voltage into `(sensor_volts, pressure_cbar)`.
    pub fn convert(&self, pin_volts: f32) -> (f32, f32) {
        let sensor_volts = pin_volts * self.divider.ratio() * self.calibration.factor();
        let pressure_cbar = self.transfer.apply(sensor_volts);
        (sensor_volts, pressure_cbar)
    }

    /// Combine a sample with its converted values.
    pub fn reading(&self, sample: Sample) -> Reading {
        let (sensor_volts, pressure_cbar) = self.convert(sample.pin_volts);
        Reading {
            raw: sample.raw,
            pin_volts: sample.pin_volts,
            sensor_volts,
            pressure_cbar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_divider_ratio() {
        assert!((DIVIDER.ratio() - 4669.0 / 1100.0).abs() < EPSILON);
    }

    #[test]
    fn test_default_calibration_is_inert() {
        assert_eq!(CALIBRATION.factor(), 1.0);
    }

    #[test]
    fn test_convert_one_volt() {
        let (sensor, pressure) = Converter::default().convert(1.0);
        assert!((sensor - 4.244_545).abs() < EPSILON);
        assert!((pressure + 1.277_273).abs() < EPSILON);
    }

    #[test]
    fn test_convert_zero_volts() {
        let (sensor, pressure) = Converter::default().convert(0.0);
        assert_eq!(sensor, 0.0);
        assert_eq!(pressure, -22.5);
    }

    #[test]
    fn test_convert_is_pure() {
        let converter = Converter::default();
        assert_eq!(converter.convert(0.731), converter.convert(0.731));
    }

    #[test]
    fn test_calibration_scales_sensor_volts() {
        let calibration = Calibration {
            multimeter_volts: 1.1,
            expected_volts: 1.0,
        };
        let converter = Converter::new(DIVIDER, calibration, TRANSFER);
        let (sensor, _) = converter.convert(1.0);
        assert!((sensor - 4.244_545 * 1.1).abs() < EPSILON);
    }

    #[test]
    fn test_reading_keeps_sample_fields() {
        let reading = Converter::default().reading(Sample {
            raw: 1234,
            pin_volts: 0.5,
        });
        assert_eq!(reading.raw, 1234);
        assert_eq!(reading.pin_volts, 0.5);
        assert!((reading.sensor_volts - 2.122_273).abs() < EPSILON);
        assert!((reading.pressure_cbar + 11.888_636).abs() < EPSILON);
    }
}
