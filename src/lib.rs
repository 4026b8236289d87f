//! # lunar
//!
//! Apparent position and phase of the Moon for a terrestrial observer, from
//! low-precision closed-form approximations.
//!
//! ```text
//! ObserverContext ─► julian_date ─┬─► local_sidereal_time ─┐
//!                                 ├─► moon_equatorial_position ─► equatorial_to_horizontal ─► azimuth / altitude
//!                                 └─► phase_state ─► phase / illumination
//! ```
//!
//! The entry point is [`MoonTracker`](crate::moon_tracker::MoonTracker); every stage is
//! also available as a free function in its own module.

pub mod config;
pub mod constants;
pub mod conversion;
pub mod horizontal;
pub mod lunar_errors;
pub mod lunar_position;
pub mod moon_tracker;
pub mod observer_context;
pub mod phase;
pub mod time;

pub use lunar_errors::LunarError;
pub use moon_tracker::{MoonReport, MoonTracker};
pub use observer_context::ObserverContext;
