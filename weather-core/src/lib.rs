//! Weather Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits, Pure Functions und den Update-Dispatcher.

#![no_std]

// Muss vor den anderen Modulen stehen (Makros)
#[macro_use]
mod fmt;

pub mod apa102;
pub mod board;
pub mod bmp280;
pub mod dispatcher;
pub mod logic;
pub mod palette;
pub mod pipeline;
pub mod segment;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use board::{Board, UnsupportedBoard};
pub use dispatcher::{STARTUP_FRAME, UpdateDispatcher, prime_strip};
pub use logic::{PRESSURE_RANGE, PressureRange, map_pressure_to_frame};
pub use palette::{RAINBOW_PALETTE, hsv_to_rgb, rainbow_palette};
pub use pipeline::{dispatch_until_shutdown, poll_sensor, release_sensor};
pub use traits::{DeviceError, DisplayWriter, EnvironmentSensor, LedStripWriter};
pub use types::{Color, OFF, STRIP_LEN, SensorReading, StripFrame};
