//! # Phase & illumination from lunar age
//!
//! The phase model only depends on the Julian Date. The fraction of the current
//! synodic month elapsed since a reference new moon at J2000.0 is
//!
//! ```text
//! n = ((JD − 2451545.0) / 29.53) mod 1          n ∈ [0, 1)
//! ```
//!
//! from which
//!
//! ```text
//! phase        = 100·n                         0 new, 50 full, 100 ≡ 0 new again
//! illumination = | 50 − | 100·n − 50 | |       0 at new moon, 50 at full moon
//! ```
//!
//! The illumination is a triangular wave on a **0–50 scale**: it rises linearly from
//! new to full and falls back linearly. It is a stand-in for the `(1 − cos)/2` curve
//! and is not numerically interchangeable with it.
//!
//! `phase` values 100 and 0 denote the same instant; the implementation never returns
//! 100 because `n` is reduced into `[0, 1)`.

use serde::Serialize;

use crate::constants::{JulianDate, J2000_JD, SYNODIC_MONTH};

/// Phase and illumination at one instant, both on a percentage-like scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseState {
    /// Elapsed fraction of the synodic month ×100, in `[0, 100)`.
    pub phase_fraction: f64,
    /// Triangular illumination estimate in `[0, 50]`.
    pub illumination_fraction: f64,
}

/// Traditional eight-way naming of the lunar phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoonPhaseName {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhaseName {
    /// Classify a phase fraction (0–100 scale).
    ///
    /// Each name covers a 12.5-wide bucket centred on its nominal value
    /// (New on 0, FirstQuarter on 25, Full on 50, LastQuarter on 75); the value is
    /// wrapped into `[0, 100)` first.
    pub fn from_phase_fraction(phase_fraction: f64) -> Self {
        let mut p = phase_fraction % 100.0;
        if p < 0.0 {
            p += 100.0;
        }
        let bucket = ((p + 6.25) / 12.5).floor() as i64 % 8;
        match bucket {
            0 => MoonPhaseName::New,
            1 => MoonPhaseName::WaxingCrescent,
            2 => MoonPhaseName::FirstQuarter,
            3 => MoonPhaseName::WaxingGibbous,
            4 => MoonPhaseName::Full,
            5 => MoonPhaseName::WaningGibbous,
            6 => MoonPhaseName::LastQuarter,
            _ => MoonPhaseName::WaningCrescent,
        }
    }
}

impl std::fmt::Display for MoonPhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MoonPhaseName::New => "new moon",
            MoonPhaseName::WaxingCrescent => "waxing crescent",
            MoonPhaseName::FirstQuarter => "first quarter",
            MoonPhaseName::WaxingGibbous => "waxing gibbous",
            MoonPhaseName::Full => "full moon",
            MoonPhaseName::WaningGibbous => "waning gibbous",
            MoonPhaseName::LastQuarter => "last quarter",
            MoonPhaseName::WaningCrescent => "waning crescent",
        };
        f.write_str(name)
    }
}

/// Elapsed fraction `n ∈ [0, 1)` of the current synodic month.
pub fn lunar_age_fraction(jd: JulianDate) -> f64 {
    let mut n = ((jd - J2000_JD) / SYNODIC_MONTH) % 1.0;
    if n < 0.0 {
        n += 1.0;
    }
    if n >= 1.0 {
        n -= 1.0;
    }
    n
}

/// Days elapsed since the last (model) new moon.
pub fn lunar_age_days(jd: JulianDate) -> f64 {
    lunar_age_fraction(jd) * SYNODIC_MONTH
}

/// Phase fraction (0–100) and triangular illumination (0–50) at `jd`.
pub fn phase_state(jd: JulianDate) -> PhaseState {
    let n = lunar_age_fraction(jd);
    let mut percent = n * 100.0;
    // n just below 1 can round up to exactly 100
    if percent >= 100.0 {
        percent -= 100.0;
    }
    PhaseState {
        phase_fraction: percent,
        illumination_fraction: (50.0 - (percent - 50.0).abs()).abs(),
    }
}
