//! ADC averaging
//!
//! The sampler takes a fixed burst of readings from one analog input and
//! reduces them to a [`Sample`]. Each reading queries the input twice, once
//! for the raw code and once for the pin millivolts.

use embedded_hal::delay::DelayNs;
use log::trace;

use crate::config::{ADC_MAX_CODE, SAMPLE_COUNT, SAMPLE_SETTLE_MS};
use crate::reading::Sample;

/// A single analog input that can report both its raw code and its voltage.
///
/// Reads are assumed to always succeed; implementations block until the
/// conversion completes.
pub trait AnalogInput {
    /// Read the raw 12-bit conversion code.
    fn read_raw(&mut self) -> u16;

    /// Read the pin voltage in millivolts.
    fn read_millivolts(&mut self) -> u16;
}

/// Map a pin voltage back onto the nominal 12-bit code range.
///
/// Voltages above `full_scale_mv` saturate at [`ADC_MAX_CODE`].
pub fn millivolts_to_raw(mv: u16, full_scale_mv: u16) -> u16 {
    if full_scale_mv == 0 {
        return 0;
    }
    let mv = mv.min(full_scale_mv) as u32;
    (mv * ADC_MAX_CODE as u32 / full_scale_mv as u32) as u16
}

/// Averages a burst of readings from an [`AnalogInput`].
pub struct Sampler<A, D> {
    input: A,
    delay: D,
}

impl<A, D> Sampler<A, D>
where
    A: AnalogInput,
    D: DelayNs,
{
    pub fn new(input: A, delay: D) -> Self {
        Self { input, delay }
    }

    /// Take [`SAMPLE_COUNT`] readings and return their means.
    ///
    /// Blocks for roughly `SAMPLE_COUNT * SAMPLE_SETTLE_MS` milliseconds.
    /// The millivolt mean is an integer mean, scaled to volts afterwards.
    pub fn sample(&mut self) -> Sample {
        let mut sum_raw: u32 = 0;
        let mut sum_mv: u32 = 0;

        for _ in 0..SAMPLE_COUNT {
            sum_raw += self.input.read_raw() as u32;
            sum_mv += self.input.read_millivolts() as u32;
            self.delay.delay_ms(SAMPLE_SETTLE_MS);
        }

        let raw = (sum_raw / SAMPLE_COUNT) as u16;
        let pin_volts = (sum_mv / SAMPLE_COUNT) as f32 / 1000.0;

        trace!("Sampled raw={} sum_mv={}", raw, sum_mv);

        Sample { raw, pin_volts }
    }

    /// Release the input and delay.
    pub fn into_inner(self) -> (A, D) {
        (self.input, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays scripted raw and millivolt values in order.
    struct ScriptedInput {
        raw: &'static [u16],
        mv: &'static [u16],
        raw_reads: usize,
        mv_reads: usize,
    }

    impl ScriptedInput {
        fn new(raw: &'static [u16], mv: &'static [u16]) -> Self {
            Self {
                raw,
                mv,
                raw_reads: 0,
                mv_reads: 0,
            }
        }
    }

    impl AnalogInput for ScriptedInput {
        fn read_raw(&mut self) -> u16 {
            let value = self.raw[self.raw_reads % self.raw.len()];
            self.raw_reads += 1;
            value
        }

        fn read_millivolts(&mut self) -> u16 {
            let value = self.mv[self.mv_reads % self.mv.len()];
            self.mv_reads += 1;
            value
        }
    }

    #[derive(Default)]
    struct CountingDelay {
        total_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    #[test]
    fn test_takes_ten_readings_with_settle_delay() {
        let mut sampler = Sampler::new(ScriptedInput::new(&[100], &[80]), CountingDelay::default());
        sampler.sample();

        let (input, delay) = sampler.into_inner();
        assert_eq!(input.raw_reads, 10);
        assert_eq!(input.mv_reads, 10);
        assert_eq!(delay.total_ns, 50_000_000);
    }

    #[test]
    fn test_raw_mean_is_integer_mean() {
        // Sum = 5 * 1000 + 5 * 1001 = 10005, integer mean 1000
        let mut sampler = Sampler::new(
            ScriptedInput::new(&[1000, 1001], &[500]),
            CountingDelay::default(),
        );
        assert_eq!(sampler.sample().raw, 1000);
    }

    #[test]
    fn test_millivolt_mean_truncates_before_scaling() {
        // Sum = 5 * 100 + 5 * 103 = 1015, integer mean 101 mV
        let mut sampler = Sampler::new(
            ScriptedInput::new(&[0], &[100, 103]),
            CountingDelay::default(),
        );
        let sample = sampler.sample();
        assert!((sample.pin_volts - 0.101).abs() < 1e-6);
    }

    #[test]
    fn test_full_scale_codes_stay_in_range() {
        let mut sampler = Sampler::new(
            ScriptedInput::new(&[4095], &[950]),
            CountingDelay::default(),
        );
        let sample = sampler.sample();
        assert_eq!(sample.raw, 4095);
        assert!((sample.pin_volts - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_mixed_codes_average_within_range() {
        let mut sampler = Sampler::new(
            ScriptedInput::new(&[0, 4095, 17, 2048, 4095], &[0]),
            CountingDelay::default(),
        );
        let sample = sampler.sample();
        assert!(sample.raw <= ADC_MAX_CODE);
        // (0 + 4095 + 17 + 2048 + 4095) * 2 / 10 = 2051
        assert_eq!(sample.raw, 2051);
    }

    #[test]
    fn test_millivolts_to_raw() {
        assert_eq!(millivolts_to_raw(0, 950), 0);
        assert_eq!(millivolts_to_raw(950, 950), 4095);
        assert_eq!(millivolts_to_raw(475, 950), 2047);
        assert_eq!(millivolts_to_raw(1000, 950), 4095);
        assert_eq!(millivolts_to_raw(500, 0), 0);
    }
}
