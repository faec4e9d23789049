//! Desktop simulator for the gauge-rs dual OLED readout.
//!
//! Runs the same `gauge_core` loop as the firmware, with a synthetic analog
//! input sweeping the divider voltage. Both panels are shown side by side in
//! one SDL2 window and the console goes to stdout.
//!
//! # Key bindings
//!
//! | Key      | Action |
//! |----------|--------|
//! | Q / Esc  | Quit   |

use std::convert::Infallible;
use std::fmt;
use std::io::Write as _;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
    sdl2::Keycode,
};
use embedded_hal::delay::DelayNs;
use log::{error, info, warn};

use gauge_core::config::{ADC_FULL_SCALE_MV, LOOP_PERIOD_MS, SAMPLE_COUNT};
use gauge_core::sampler::millivolts_to_raw;
use gauge_core::layout::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};
use gauge_core::{AnalogInput, Console, Converter, FrameBuffer, Gauge, Presenter, Sampler, bring_up};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 4;

/// Horizontal gap between the two panels.
const PANEL_GAP_PX: u32 = 8;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

// ---------------------------------------------------------------------------
// Host stand-ins for the board peripherals
// ---------------------------------------------------------------------------

/// Synthetic divider tap that drifts slowly across most of the ADC range.
struct SweepInput {
    readings: u64,
}

impl SweepInput {
    fn new() -> Self {
        Self { readings: 0 }
    }

    fn millivolts(&self) -> u16 {
        // One unit of t per averaged sample
        let t = self.readings as f64 / SAMPLE_COUNT as f64;
        let mv = 475.0 + 420.0 * (t / 15.0).sin() + 8.0 * (t * 1.7).cos();
        mv.clamp(0.0, ADC_FULL_SCALE_MV as f64) as u16
    }
}

impl AnalogInput for SweepInput {
    fn read_raw(&mut self) -> u16 {
        self.readings += 1;
        millivolts_to_raw(self.millivolts(), ADC_FULL_SCALE_MV)
    }

    fn read_millivolts(&mut self) -> u16 {
        self.millivolts()
    }
}

/// Blocking delay on the host thread.
struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }
}

/// Console sink printing to stdout.
struct Stdout;

impl fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        std::io::stdout()
            .write_all(s.as_bytes())
            .map_err(|_| fmt::Error)
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting gauge-rs simulator");
    info!(
        "Panels: 2 x {}x{} (scale {}x)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: Q=Quit");

    let mut display = SimulatorDisplay::<BinaryColor>::new(Size::new(
        DISPLAY_WIDTH_PX * 2 + PANEL_GAP_PX,
        DISPLAY_HEIGHT_PX,
    ));
    let output_settings = OutputSettingsBuilder::new()
        .scale(WINDOW_SCALE)
        .theme(BinaryColorTheme::OledBlue)
        .build();
    let mut window = Window::new("Gauge Simulator", &output_settings);

    let mut console = Console::new(Stdout);
    console.starting();

    let booted = bring_up(
        &mut console,
        || Ok::<_, Infallible>(FrameBuffer::new()),
        || Ok::<_, Infallible>(FrameBuffer::new()),
    );
    let (primary, secondary) = match booted {
        Ok(panels) => panels,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    let mut gauge = Gauge::new(
        Sampler::new(SweepInput::new(), StdDelay),
        Converter::default(),
        Presenter::new(primary, secondary),
        console,
    );

    let loop_period = Duration::from_millis(LOOP_PERIOD_MS);
    let secondary_offset = Point::new((DISPLAY_WIDTH_PX + PANEL_GAP_PX) as i32, 0);

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    window.update(&display);
    let mut last_cycle: Option<Instant> = None;

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. }
                    if keycode == Keycode::Q || keycode == Keycode::Escape =>
                {
                    break 'running;
                }
                _ => {}
            }
        }

        if last_cycle.is_none_or(|t| t.elapsed() >= loop_period) {
            if let Err(e) = gauge.cycle() {
                warn!("Render failed: {}", e);
            }
            last_cycle = Some(Instant::now());

            let presenter = gauge.presenter();
            let _ = presenter.primary().draw_shown(&mut display);
            let _ = presenter
                .secondary()
                .draw_shown(&mut display.translated(secondary_offset));
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
