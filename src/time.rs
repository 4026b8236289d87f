use hifitime::Epoch;
use std::str::FromStr;

use crate::constants::{
    Degree, JulianDate, DAYS_PER_CENTURY, GMST_J2000, GMST_RATE, GMST_T2, GMST_T3_DIVISOR,
    J2000_JD, JDTOMJD, MJD,
};
use crate::conversion::normalize_degrees;
use crate::lunar_errors::LunarError;

/// Transformation from a Gregorian calendar timestamp (UTC) to Julian Date (JD)
///
/// January and February are counted as months 13 and 14 of the previous year, a
/// century term corrects for the Gregorian leap-year rule, and the time of day is
/// added as a fraction of a day.
///
/// Arguments
/// ---------
/// * `year`, `month`, `day`: proleptic Gregorian date
/// * `hour`, `minute`, `second`: UTC time of day
///
/// Return
/// ------
/// * the Julian Date. No range checking is performed: out-of-calendar fields
///   (month 14, day 40, ...) still produce a number.
pub fn julian_date(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
) -> JulianDate {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    // floor() rather than integer division so that negative years round toward -inf
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    let day_fraction = (hour as f64 + minute as f64 / 60.0 + second as f64 / 3600.0) / 24.0;

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
        + day_fraction
}

/// Julian centuries elapsed since J2000.0
pub fn julian_centuries_since_j2000(jd: JulianDate) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in degrees.
///
/// Uses the cubic polynomial in Julian centuries `T` since J2000.0:
///
/// ```text
/// GMST = 280.46061837 + 360.98564736629·(JD − 2451545) + 0.000387933·T² − T³/38710000
/// ```
///
/// # Returns
/// * GMST angle in degrees, normalized to `[0, 360)`.
pub fn greenwich_mean_sidereal_time(jd: JulianDate) -> Degree {
    normalize_degrees(raw_gmst(jd))
}

fn raw_gmst(jd: JulianDate) -> Degree {
    let t = julian_centuries_since_j2000(jd);
    GMST_J2000 + GMST_RATE * (jd - J2000_JD) + t * t * (GMST_T2 - t / GMST_T3_DIVISOR)
}

/// Local Sidereal Time for an observer at `longitude` (degrees, east positive).
///
/// The longitude is added to the unreduced GMST and the sum is reduced once, so the
/// result is always in `[0, 360)`.
pub fn local_sidereal_time(jd: JulianDate, longitude: Degree) -> Degree {
    let lst = normalize_degrees(raw_gmst(jd) + longitude);
    log::trace!("jd={jd} longitude={longitude} -> lst={lst}");
    lst
}

/// Transformation from julian date (JD) in modified julian date (MJD)
pub fn jd_to_mjd(jd: JulianDate) -> MJD {
    jd - JDTOMJD
}

/// Transformation from modified julian date (MJD) in julian date (JD)
pub fn mjd_to_jd(mjd: MJD) -> JulianDate {
    mjd + JDTOMJD
}

/// Parse a UTC timestamp such as `2024-03-25T07:00:00` into a hifitime [`Epoch`].
///
/// Strings without an explicit time scale are read as UTC.
///
/// Return
/// ------
/// * the parsed epoch, or [`LunarError::InvalidTimestamp`] carrying the hifitime message.
pub fn parse_utc(date: &str) -> Result<Epoch, LunarError> {
    Epoch::from_str(date.trim())
        .map_err(|err| LunarError::InvalidTimestamp(format!("{date}: {err}")))
}
