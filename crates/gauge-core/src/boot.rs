//! Display bring-up
//!
//! The displays come up in a fixed order: primary, then secondary. Either
//! one failing is fatal. When the primary fails the secondary is never
//! touched, and nothing is printed after the failure line.

use core::fmt::{self, Debug, Display, Write};

use log::{error, info};

use crate::console::Console;
use crate::error::{BootError, describe};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayId {
    /// Live pressure readout
    Primary,
    /// Static greeting
    Secondary,
}

impl Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("Primary"),
            Self::Secondary => f.write_str("Secondary"),
        }
    }
}

/// Initialize both displays in order, reporting each outcome on the console.
///
/// Returns the two initialized devices, or the first failure. The caller is
/// expected to halt on error.
pub fn bring_up<W, P, S, EP, ES>(
    console: &mut Console<W>,
    init_primary: impl FnOnce() -> Result<P, EP>,
    init_secondary: impl FnOnce() -> Result<S, ES>,
) -> Result<(P, S), BootError>
where
    W: Write,
    EP: Debug,
    ES: Debug,
{
    let primary = match init_primary() {
        Ok(display) => display,
        Err(e) => {
            error!("Primary display init failed: {:?}", e);
            console.display_failed(DisplayId::Primary);
            return Err(BootError::PrimaryDisplay(describe(&e)));
        }
    };
    info!("Primary display ready");
    console.display_ready(DisplayId::Primary);

    let secondary = match init_secondary() {
        Ok(display) => display,
        Err(e) => {
            error!("Secondary display init failed: {:?}", e);
            console.display_failed(DisplayId::Secondary);
            return Err(BootError::SecondaryDisplay(describe(&e)));
        }
    };
    info!("Secondary display ready");
    console.display_ready(DisplayId::Secondary);

    Ok((primary, secondary))
}
