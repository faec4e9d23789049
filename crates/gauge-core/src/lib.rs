//! Hardware-independent core library for gauge-rs
//!
//! This crate contains the platform-agnostic logic of the divider pressure
//! gauge: ADC averaging, the divider/pressure conversion, the two-display
//! presenter, the console status line and the display bring-up sequence.
//!
//! It is `#![no_std]` so it compiles on both the ESP32-S3 firmware and on
//! desktop hosts (for the simulator and tests).

#![no_std]

pub mod app;
pub mod boot;
pub mod config;
pub mod console;
pub mod converter;
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod layout;
pub mod presenter;
pub mod reading;
pub mod sampler;

pub use app::Gauge;
pub use boot::{DisplayId, bring_up};
pub use console::Console;
pub use converter::{Calibration, Converter, Divider, TransferFunction};
pub use display::Surface;
pub use error::{BootError, PresentError};
pub use framebuffer::FrameBuffer;
pub use presenter::Presenter;
pub use reading::{Reading, Sample};
pub use sampler::{AnalogInput, Sampler};
