//! # MoonTracker: observer context and Moon queries
//!
//! This module defines [`MoonTracker`](crate::moon_tracker::MoonTracker), the façade that
//! holds one [`ObserverContext`] and answers the four Moon queries against it:
//!
//! 1. [`azimuth`](crate::moon_tracker::MoonTracker::azimuth): degrees from south, west positive, `(-180, 180]`.
//! 2. [`height`](crate::moon_tracker::MoonTracker::height): geometric altitude, `[-90, 90]`.
//! 3. [`phase`](crate::moon_tracker::MoonTracker::phase): elapsed synodic month ×100, `[0, 100)`.
//! 4. [`illumination`](crate::moon_tracker::MoonTracker::illumination): triangular estimate, `[0, 50]`.
//!
//! The usage pattern is *set once, query many times*: the context is replaced with
//! [`set_context`](crate::moon_tracker::MoonTracker::set_context) and every query recomputes
//! from it. Nothing else is cached, so repeated queries on an unchanged context return
//! bit-identical values.
//!
//! ## Typical usage
//!
//! ```rust
//! use lunar::moon_tracker::MoonTracker;
//!
//! let mut tracker = MoonTracker::default();
//! tracker.set_context(48.8566, 2.3522, 2024, 3, 25, 21, 30, 0);
//!
//! let az = tracker.azimuth();
//! let alt = tracker.height();
//! assert!((-180.0..=180.0).contains(&az));
//! assert!((-90.0..=90.0).contains(&alt));
//!
//! let report = tracker.report();
//! println!("{}, {:.1}% of the cycle", report.phase_name, report.phase.phase_fraction);
//! ```
//!
//! ## Concurrency
//!
//! [`MoonTracker`] holds no interior mutability. Sharing one between threads is the
//! caller's business (e.g. `Mutex<MoonTracker>`); all queries take `&self`.
//!
//! ## See also
//! ------------
//! * [`ObserverContext`] – The stored location and UTC timestamp.
//! * [`moon_horizontal_position`] – Free-function form of the azimuth/altitude pipeline.
//! * [`phase_state`] – Free-function form of the phase/illumination estimate.
//! * [`LunarConfig`] – TOML configuration producing a context.

use serde::Serialize;

use crate::config::LunarConfig;
use crate::constants::{Degree, JulianDate};
use crate::horizontal::{equatorial_to_horizontal, moon_horizontal_position, HorizontalPosition};
use crate::lunar_errors::LunarError;
use crate::lunar_position::{moon_equatorial_position, EquatorialPosition};
use crate::observer_context::ObserverContext;
use crate::phase::{lunar_age_days, phase_state, MoonPhaseName, PhaseState};
use crate::time::local_sidereal_time;

/// Full set of derived quantities for one context, in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonReport {
    pub context: ObserverContext,
    pub julian_date: JulianDate,
    /// Local sidereal time in `[0, 360)` degrees.
    pub local_sidereal_time: Degree,
    pub equatorial: EquatorialPosition,
    pub horizontal: HorizontalPosition,
    pub phase: PhaseState,
    pub phase_name: MoonPhaseName,
    /// Days since the last model new moon.
    pub age_days: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoonTracker {
    context: ObserverContext,
}

impl MoonTracker {
    /// Construct a tracker around an existing context.
    pub fn new(context: ObserverContext) -> Self {
        MoonTracker { context }
    }

    /// Construct a tracker from a loaded configuration.
    ///
    /// Return
    /// ----------
    /// * A tracker, or a [`LunarError`] if the configured timestamp or angles are invalid.
    pub fn from_config(config: &LunarConfig) -> Result<Self, LunarError> {
        Ok(MoonTracker::new(config.observer_context()?))
    }

    /// Replace the observer location and UTC timestamp.
    ///
    /// Values are stored as given, without range checks.
    #[allow(clippy::too_many_arguments)]
    pub fn set_context(
        &mut self,
        latitude: Degree,
        longitude: Degree,
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) {
        self.context
            .set(latitude, longitude, year, month, day, hour, minute, second);
    }

    pub fn context(&self) -> &ObserverContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ObserverContext {
        &mut self.context
    }

    /// Moon azimuth in degrees: from south, west positive, in `(-180, 180]`.
    pub fn azimuth(&self) -> Degree {
        moon_horizontal_position(&self.context).azimuth
    }

    /// Moon altitude above the horizon in degrees, without refraction.
    pub fn height(&self) -> Degree {
        moon_horizontal_position(&self.context).altitude
    }

    /// Elapsed fraction of the synodic month ×100, in `[0, 100)`.
    pub fn phase(&self) -> f64 {
        phase_state(self.context.julian_date()).phase_fraction
    }

    /// Triangular illumination estimate, in `[0, 50]`.
    pub fn illumination(&self) -> f64 {
        phase_state(self.context.julian_date()).illumination_fraction
    }

    pub fn phase_name(&self) -> MoonPhaseName {
        MoonPhaseName::from_phase_fraction(self.phase())
    }

    /// Compute every quantity of the pipeline at once.
    pub fn report(&self) -> MoonReport {
        let jd = self.context.julian_date();
        let lst = local_sidereal_time(jd, self.context.longitude);
        let equatorial = moon_equatorial_position(jd);
        let horizontal = equatorial_to_horizontal(&equatorial, lst, self.context.latitude);
        let phase = phase_state(jd);

        let report = MoonReport {
            context: self.context,
            julian_date: jd,
            local_sidereal_time: lst,
            equatorial,
            horizontal,
            phase,
            phase_name: MoonPhaseName::from_phase_fraction(phase.phase_fraction),
            age_days: lunar_age_days(jd),
        };
        log::debug!(
            "moon report for {}: az={:.3} alt={:.3} phase={:.2} ({})",
            self.context,
            horizontal.azimuth,
            horizontal.altitude,
            phase.phase_fraction,
            report.phase_name
        );
        report
    }
}

#[cfg(test)]
mod moon_tracker_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_context_queries() {
        let tracker = MoonTracker::default();
        assert_eq!(*tracker.context(), ObserverContext::default());
        assert_relative_eq!(tracker.height(), -24.267719780029008, epsilon = 1e-6);
        assert_relative_eq!(tracker.azimuth(), -95.15217057828545, epsilon = 1e-6);
        assert_relative_eq!(tracker.phase(), 98.30680663731798, epsilon = 1e-9);
        assert_relative_eq!(tracker.illumination(), 1.693193362682024, epsilon = 1e-9);
        assert_eq!(tracker.phase_name(), MoonPhaseName::New);
    }

    #[test]
    fn test_set_context_changes_answers() {
        let mut tracker = MoonTracker::default();
        let before = tracker.azimuth();
        tracker.set_context(0.0, 0.0, 2000, 1, 1, 12, 0, 0);
        assert_ne!(tracker.azimuth(), before);
        assert_relative_eq!(tracker.azimuth(), 95.41086787407747, epsilon = 1e-7);
        assert_eq!(tracker.phase(), 0.0);
    }

    #[test]
    fn test_report_matches_individual_queries() {
        let mut tracker = MoonTracker::default();
        tracker.set_context(48.8566, 2.3522, 2024, 3, 25, 7, 0, 0);
        let report = tracker.report();

        assert_eq!(report.horizontal.azimuth, tracker.azimuth());
        assert_eq!(report.horizontal.altitude, tracker.height());
        assert_eq!(report.phase.phase_fraction, tracker.phase());
        assert_eq!(report.phase.illumination_fraction, tracker.illumination());
        assert_relative_eq!(report.julian_date, 2460394.7916666665, epsilon = 1e-9);
        assert_relative_eq!(report.age_days, 20.32166666651028, epsilon = 1e-6);
        assert_eq!(report.phase_name, MoonPhaseName::LastQuarter);
    }

    #[test]
    fn test_context_mut() {
        let mut tracker = MoonTracker::default();
        tracker.context_mut().latitude = -33.9;
        assert_eq!(tracker.context().latitude, -33.9);
    }
}
