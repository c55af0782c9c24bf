//! Platform-neutral core of the scroll stage.
//!
//! Everything in this crate is pure state and math: no DOM, no timers, no
//! platform APIs. The web frontend feeds it scroll deltas and frame times
//! and applies the derived [`VisualState`] values to whatever rendering
//! target exists.

pub mod background;
pub mod broadcast;
pub mod config;
pub mod constants;
pub mod progress;
pub mod window;

pub use background::*;
pub use broadcast::*;
pub use config::*;
pub use constants::*;
pub use progress::*;
pub use window::*;
