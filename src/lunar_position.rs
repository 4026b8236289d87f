//! # Low-precision lunar position
//!
//! Geocentric position of the Moon from a single periodic term in longitude and one in
//! latitude. The three mean elements are linear in days since J2000.0:
//!
//! ```text
//! L0 = 218.316 + 13.176396·d     (mean longitude)
//! M  = 134.963 + 13.064993·d     (mean anomaly)
//! F  =  93.272 + 13.229350·d     (argument of latitude)
//!
//! λ = L0 + 6.289·sin M
//! β = 5.128·sin F
//! ```
//!
//! and the ecliptic position is rotated to the equator with a fixed obliquity
//! ε = 23.44°:
//!
//! ```text
//! α = atan2(sin λ·cos ε, cos λ)
//! δ = asin(sin β·cos ε)
//! ```
//!
//! The right ascension formula leaves out the contribution of β. Together with the
//! single-term series this puts the result a few degrees from a real ephemeris.

use serde::Serialize;

use crate::constants::{
    Degree, JulianDate, J2000_JD, MOON_ARG_LATITUDE, MOON_ARG_LATITUDE_RATE, MOON_EQ_CENTER,
    MOON_LATITUDE_AMPLITUDE, MOON_MEAN_ANOMALY, MOON_MEAN_ANOMALY_RATE, MOON_MEAN_LONGITUDE,
    MOON_MEAN_LONGITUDE_RATE, OBLIQUITY, RADEG,
};
use crate::conversion::{clamped_asin_deg, normalize_degrees};

/// Geocentric ecliptic coordinates of the Moon, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipticPosition {
    /// Ecliptic longitude λ. Not reduced: `L0 + 6.289·sin M` may slightly exceed 360.
    pub longitude: Degree,
    /// Ecliptic latitude β, within ±5.128.
    pub latitude: Degree,
}

/// Geocentric equatorial coordinates, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquatorialPosition {
    /// Right ascension in `[0, 360)`.
    pub right_ascension: Degree,
    /// Declination in `[-90, 90]`.
    pub declination: Degree,
}

/// Mean elements `(L0, M, F)` at `jd`, each reduced into `[0, 360)`.
fn mean_elements(jd: JulianDate) -> (Degree, Degree, Degree) {
    let d = jd - J2000_JD;
    (
        normalize_degrees(MOON_MEAN_LONGITUDE + MOON_MEAN_LONGITUDE_RATE * d),
        normalize_degrees(MOON_MEAN_ANOMALY + MOON_MEAN_ANOMALY_RATE * d),
        normalize_degrees(MOON_ARG_LATITUDE + MOON_ARG_LATITUDE_RATE * d),
    )
}

/// Ecliptic longitude and latitude of the Moon at `jd`.
pub fn moon_ecliptic_position(jd: JulianDate) -> EclipticPosition {
    let (l0, m, f) = mean_elements(jd);
    EclipticPosition {
        longitude: l0 + MOON_EQ_CENTER * (m * RADEG).sin(),
        latitude: MOON_LATITUDE_AMPLITUDE * (f * RADEG).sin(),
    }
}

/// Rotate ecliptic coordinates to the equator with the fixed obliquity.
///
/// Only λ enters the right ascension; β only enters the declination.
pub fn ecliptic_to_equatorial(ecliptic: &EclipticPosition) -> EquatorialPosition {
    let lambda = ecliptic.longitude * RADEG;
    let beta = ecliptic.latitude * RADEG;
    let cos_eps = (OBLIQUITY * RADEG).cos();

    let ra = (lambda.sin() * cos_eps).atan2(lambda.cos()).to_degrees();
    let dec = clamped_asin_deg(beta.sin() * cos_eps);

    EquatorialPosition {
        right_ascension: normalize_degrees(ra),
        declination: dec,
    }
}

/// Right ascension and declination of the Moon at `jd`.
pub fn moon_equatorial_position(jd: JulianDate) -> EquatorialPosition {
    let ecliptic = moon_ecliptic_position(jd);
    let equatorial = ecliptic_to_equatorial(&ecliptic);
    log::trace!(
        "jd={jd} lambda={} beta={} -> ra={} dec={}",
        ecliptic.longitude,
        ecliptic.latitude,
        equatorial.right_ascension,
        equatorial.declination
    );
    equatorial
}
