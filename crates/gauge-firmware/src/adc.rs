//! Divider input on the ESP32-S3 SAR ADC

use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcCalCurve, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO2};
use gauge_core::config::ADC_FULL_SCALE_MV;
use gauge_core::sampler::{AnalogInput, millivolts_to_raw};

type CalibratedPin = AdcPin<GPIO2<'static>, ADC1<'static>, AdcCalCurve<ADC1<'static>>>;

/// The divider tap on GPIO2 (ADC1 channel 1), at 0 dB attenuation.
///
/// Conversions go through the eFuse curve calibration and come back in
/// millivolts. esp-hal gives a pin either raw or calibrated readings, not
/// both, so the raw query maps a fresh calibrated conversion back onto the
/// nominal code range.
pub struct DividerInput {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    pin: CalibratedPin,
}

impl DividerInput {
    pub fn new(adc1: ADC1<'static>, gpio: GPIO2<'static>) -> Self {
        let mut config = AdcConfig::new();
        let pin = config.enable_pin_with_cal::<_, AdcCalCurve<ADC1<'static>>>(gpio, Attenuation::_0dB);
        let adc = Adc::new(adc1, config);

        Self { adc, pin }
    }

    /// Block until a one-shot conversion completes.
    fn convert(&mut self) -> u16 {
        loop {
            if let Ok(mv) = self.adc.read_oneshot(&mut self.pin) {
                return mv;
            }
        }
    }
}

impl AnalogInput for DividerInput {
    fn read_raw(&mut self) -> u16 {
        millivolts_to_raw(self.convert(), ADC_FULL_SCALE_MV)
    }

    fn read_millivolts(&mut self) -> u16 {
        self.convert()
    }
}
