//! # Constants and type definitions for `lunar`
//!
//! This module centralizes the **astronomical constants**, **conversion factors**, and
//! **unit type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Reference epochs (J2000.0 as a Julian Date, MJD offset)
//! - Mean lunar rates used by the low-precision Moon model
//! - Unit conversions (degrees ↔ radians)
//! - Core type aliases used across the crate
//!
//! All angular constants are expressed in **degrees**; radians only appear at the
//! point of trigonometric evaluation.

// -------------------------------------------------------------------------------------------------
// Epochs and time
// -------------------------------------------------------------------------------------------------

/// Julian Date of J2000.0 (2000-01-01 12:00:00)
pub const J2000_JD: f64 = 2_451_545.0;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2_400_000.5;

/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Mean synodic month (new moon to new moon) in days, as used by the age-based phase model
pub const SYNODIC_MONTH: f64 = 29.53;

// -------------------------------------------------------------------------------------------------
// Angles and unit conversions
// -------------------------------------------------------------------------------------------------

/// Full turn in degrees
pub const FULL_CIRCLE: f64 = 360.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Fixed obliquity of the ecliptic used by the simplified Moon model
pub const OBLIQUITY: Degree = 23.44;

// -------------------------------------------------------------------------------------------------
// Sidereal time polynomial (degrees)
// -------------------------------------------------------------------------------------------------

/// GMST at J2000.0
pub const GMST_J2000: Degree = 280.460_618_37;

/// Mean sidereal rotation per day
pub const GMST_RATE: Degree = 360.985_647_366_29;

/// Quadratic coefficient in centuries
pub const GMST_T2: Degree = 0.000_387_933;

/// Divisor of the cubic term in centuries
pub const GMST_T3_DIVISOR: f64 = 38_710_000.0;

// -------------------------------------------------------------------------------------------------
// Lunar mean elements: value at J2000.0 and daily rate (degrees, degrees/day)
// -------------------------------------------------------------------------------------------------

/// Mean longitude L0 at J2000.0
pub const MOON_MEAN_LONGITUDE: Degree = 218.316;
/// Daily motion of L0
pub const MOON_MEAN_LONGITUDE_RATE: Degree = 13.176_396;

/// Mean anomaly M at J2000.0
pub const MOON_MEAN_ANOMALY: Degree = 134.963;
/// Daily motion of M
pub const MOON_MEAN_ANOMALY_RATE: Degree = 13.064_993;

/// Argument of latitude F at J2000.0
pub const MOON_ARG_LATITUDE: Degree = 93.272;
/// Daily motion of F
pub const MOON_ARG_LATITUDE_RATE: Degree = 13.229_350;

/// Amplitude of the equation of the centre in longitude
pub const MOON_EQ_CENTER: Degree = 6.289;

/// Amplitude of the ecliptic latitude term
pub const MOON_LATITUDE_AMPLITUDE: Degree = 5.128;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Julian Date (days)
pub type JulianDate = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
