//! One iteration of the gauge loop
//!
//! [`Gauge::cycle`] runs sample, convert, render and log in that order. The
//! caller owns the pacing between cycles.

use core::fmt::{Debug, Write};

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::console::Console;
use crate::converter::Converter;
use crate::display::Surface;
use crate::error::PresentError;
use crate::presenter::Presenter;
use crate::reading::Reading;
use crate::sampler::{AnalogInput, Sampler};

/// Everything the main loop needs, owned in one place.
pub struct Gauge<A, D, P, S, W> {
    sampler: Sampler<A, D>,
    converter: Converter,
    presenter: Presenter<P, S>,
    console: Console<W>,
}

impl<A, D, P, S, W> Gauge<A, D, P, S, W>
where
    A: AnalogInput,
    D: DelayNs,
    P: Surface,
    P::Error: Debug,
    S: Surface,
    S::Error: Debug,
    W: Write,
{
    pub fn new(
        sampler: Sampler<A, D>,
        converter: Converter,
        presenter: Presenter<P, S>,
        console: Console<W>,
    ) -> Self {
        Self {
            sampler,
            converter,
            presenter,
            console,
        }
    }

    /// Take a reading, show it on both panels and print the status line.
    ///
    /// The status line is printed even when rendering fails, and the
    /// reading is lost in that case.
    pub fn cycle(&mut self) -> Result<Reading, PresentError> {
        let reading = self.converter.reading(self.sampler.sample());
        debug!(
            "raw={} pin={}V sensor={}V pressure={}cBar",
            reading.raw, reading.pin_volts, reading.sensor_volts, reading.pressure_cbar
        );

        let rendered = self.presenter.render(reading);
        self.console.status(&reading);

        rendered.map(|()| reading)
    }

    pub fn presenter(&self) -> &Presenter<P, S> {
        &self.presenter
    }

    pub fn console(&self) -> &Console<W> {
        &self.console
    }
}
