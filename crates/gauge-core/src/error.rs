//! Error types for gauge-rs

use core::fmt::{Debug, Write};

use thiserror_no_std::Error;

use crate::boot::DisplayId;

/// Driver error details rendered from their `Debug` output.
pub type Details = heapless::String<64>;

/// Fatal display bring-up failures. The device halts on either.
#[derive(Error, Debug)]
pub enum BootError {
    #[error("Primary display failed to initialize: {0}")]
    PrimaryDisplay(Details),
    #[error("Secondary display failed to initialize: {0}")]
    SecondaryDisplay(Details),
}

impl BootError {
    /// The display whose initialization failed.
    pub fn display(&self) -> DisplayId {
        match self {
            Self::PrimaryDisplay(_) => DisplayId::Primary,
            Self::SecondaryDisplay(_) => DisplayId::Secondary,
        }
    }
}

/// Per-iteration rendering failures. Logged, never retried.
#[derive(Error, Debug)]
pub enum PresentError {
    #[error("{display} display draw failed: {details}")]
    Draw { display: DisplayId, details: Details },
    #[error("{display} display flush failed: {details}")]
    Flush { display: DisplayId, details: Details },
}

/// Render a driver error into a bounded string. Overlong output is cut short.
pub fn describe<E: Debug>(err: &E) -> Details {
    let mut details = Details::new();
    write!(details, "{:?}", err).ok();
    details
}
