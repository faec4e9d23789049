//! ESP32-S3 firmware-specific modules for gauge-rs
//!
//! This crate contains the hardware-specific code that cannot compile on
//! desktop targets: ADC, I2C and UART peripheral setup and the SSD1306 panel
//! adapter that plugs into `gauge_core`'s presenter.

#![no_std]

pub mod adc;
pub mod hardware;
pub mod oled;
