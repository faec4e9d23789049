//! Text console output
//!
//! The console is purely observational: boot diagnostics and one status line
//! per loop iteration. Nothing is read back, and write failures are dropped.

use core::fmt::{Arguments, Write};

use crate::boot::DisplayId;
use crate::reading::Reading;

pub struct Console<W> {
    sink: W,
}

impl<W: Write> Console<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write one line terminated with CRLF.
    pub fn line(&mut self, args: Arguments<'_>) {
        self.sink.write_fmt(args).ok();
        self.sink.write_str("\r\n").ok();
    }

    pub fn starting(&mut self) {
        self.line(format_args!("Starting..."));
    }

    pub fn display_ready(&mut self, display: DisplayId) {
        self.line(format_args!("{} OLED initialized.", display));
    }

    pub fn display_failed(&mut self, display: DisplayId) {
        self.line(format_args!("{} OLED failed to initialize.", display));
    }

    /// Status line for one reading. Unlike the panel, the pressure keeps
    /// its sign here.
    pub fn status(&mut self, reading: &Reading) {
        self.line(format_args!(
            "Raw ADC avg: {} | V_ADC: {:.3} V | V_sensor: {:.3} V | Pressure: {:.2} cBar",
            reading.raw, reading.pin_volts, reading.sensor_volts, reading.pressure_cbar
        ));
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::Converter;
    use crate::reading::Sample;

    type Sink = heapless::String<256>;

    #[test]
    fn test_status_line_format() {
        let reading = Converter::default().reading(Sample {
            raw: 1365,
            pin_volts: 1.0,
        });
        let mut console = Console::new(Sink::new());
        console.status(&reading);

        assert_eq!(
            console.sink().as_str(),
            "Raw ADC avg: 1365 | V_ADC: 1.000 V | V_sensor: 4.245 V | Pressure: -1.28 cBar\r\n"
        );
    }

    #[test]
    fn test_status_line_at_zero_volts() {
        let reading = Converter::default().reading(Sample::default());
        let mut console = Console::new(Sink::new());
        console.status(&reading);

        assert_eq!(
            console.sink().as_str(),
            "Raw ADC avg: 0 | V_ADC: 0.000 V | V_sensor: 0.000 V | Pressure: -22.50 cBar\r\n"
        );
    }

    #[test]
    fn test_boot_lines() {
        let mut console = Console::new(Sink::new());
        console.starting();
        console.display_ready(DisplayId::Primary);
        console.display_failed(DisplayId::Secondary);

        assert_eq!(
            console.into_inner().as_str(),
            "Starting...\r\nPrimary OLED initialized.\r\nSecondary OLED failed to initialize.\r\n"
        );
    }

    #[test]
    fn test_full_sink_drops_output() {
        let mut console = Console::new(heapless::String::<8>::new());
        console.starting();
        console.starting();
        // "Starting..." does not fit, only the line endings land
        assert_eq!(console.sink().as_str(), "\r\n\r\n");
    }
}
