//! # Equatorial → horizontal transform
//!
//! Converts right ascension/declination into azimuth/altitude for an observer,
//! through the local hour angle `H = LST − α`:
//!
//! ```text
//! h = asin( sin φ·sin δ + cos φ·cos δ·cos H )
//! A = atan2( sin H, cos H·sin φ − tan δ·cos φ )
//! ```
//!
//! ## Azimuth convention
//!
//! `A` is measured from the **south** meridian, positive toward the **west**, and is
//! reported in `(-180, 180]`:
//!
//! ```text
//!   0  south      +90  west      ±180  north      −90  east
//! ```
//!
//! Add 180° to get the usual north-based, east-positive compass bearing.
//!
//! No refraction correction is applied; the altitude is geometric.

use nalgebra::Vector3;
use serde::Serialize;

use crate::constants::{Degree, RADEG};
use crate::conversion::{clamped_asin_deg, normalize_degrees, normalize_signed_degrees};
use crate::lunar_position::{moon_equatorial_position, EquatorialPosition};
use crate::observer_context::ObserverContext;
use crate::time::local_sidereal_time;

/// Topocentric horizontal coordinates, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalPosition {
    /// Azimuth from south, west positive, in `(-180, 180]`.
    pub azimuth: Degree,
    /// Geometric altitude above the horizon, in `[-90, 90]`.
    pub altitude: Degree,
}

impl HorizontalPosition {
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }

    /// Unit direction vector in the local East-North-Up frame.
    ///
    /// Return
    /// ----------
    /// * `(east, north, up)` with unit norm.
    pub fn to_enu_vector(&self) -> Vector3<f64> {
        let (sin_az, cos_az) = (self.azimuth * RADEG).sin_cos();
        let (sin_alt, cos_alt) = (self.altitude * RADEG).sin_cos();
        // azimuth is south-based and west-positive
        Vector3::new(-sin_az * cos_alt, -cos_az * cos_alt, sin_alt)
    }
}

/// Local hour angle `LST − α`, reduced into `[0, 360)`.
pub fn hour_angle(local_sidereal_time: Degree, right_ascension: Degree) -> Degree {
    normalize_degrees(local_sidereal_time - right_ascension)
}

/// Horizontal coordinates of an equatorial position seen from `latitude` at `lst`.
///
/// Arguments
/// -----------------
/// * `equatorial`: right ascension and declination (degrees).
/// * `lst`: local sidereal time (degrees).
/// * `latitude`: observer latitude (degrees, north positive).
pub fn equatorial_to_horizontal(
    equatorial: &EquatorialPosition,
    lst: Degree,
    latitude: Degree,
) -> HorizontalPosition {
    let h = hour_angle(lst, equatorial.right_ascension) * RADEG;
    let phi = latitude * RADEG;
    let delta = equatorial.declination * RADEG;

    let altitude = clamped_asin_deg(phi.sin() * delta.sin() + phi.cos() * delta.cos() * h.cos());
    let azimuth = h
        .sin()
        .atan2(h.cos() * phi.sin() - delta.tan() * phi.cos())
        .to_degrees();

    log::trace!(
        "ha={} lat={latitude} dec={} -> az={azimuth} alt={altitude}",
        h.to_degrees(),
        equatorial.declination
    );

    HorizontalPosition {
        azimuth: normalize_signed_degrees(azimuth),
        altitude,
    }
}

/// Azimuth and altitude of the Moon for the observer and instant in `ctx`.
pub fn moon_horizontal_position(ctx: &ObserverContext) -> HorizontalPosition {
    let jd = ctx.julian_date();
    let lst = local_sidereal_time(jd, ctx.longitude);
    let equatorial = moon_equatorial_position(jd);
    equatorial_to_horizontal(&equatorial, lst, ctx.latitude)
}
