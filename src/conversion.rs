//! Angle reduction and parsing helpers.
//!
//! Every wrap performed by the pipeline goes through [`normalize_degrees`] or
//! [`normalize_signed_degrees`]. The `%` operator on `f64` keeps the sign of the
//! dividend, so the negative branch is corrected explicitly instead of relying on
//! the operator's sign behaviour.

use crate::constants::{Degree, FULL_CIRCLE};
use crate::lunar_errors::LunarError;

/// Reduce an angle into `[0, 360)`.
///
/// Arguments
/// ---------
/// * `angle`: an angle in degrees, any magnitude or sign.
///
/// Return
/// ------
/// * The equivalent angle in `[0, 360)`. Non-finite input is returned unchanged.
pub fn normalize_degrees(angle: Degree) -> Degree {
    let mut reduced = angle % FULL_CIRCLE;
    if reduced < 0.0 {
        reduced += FULL_CIRCLE;
    }
    // tiny negative remainders round up to exactly 360 after the correction
    if reduced >= FULL_CIRCLE {
        reduced -= FULL_CIRCLE;
    }
    reduced
}

/// Reduce an angle into `(-180, 180]`.
pub fn normalize_signed_degrees(angle: Degree) -> Degree {
    let reduced = normalize_degrees(angle);
    if reduced > FULL_CIRCLE / 2.0 {
        reduced - FULL_CIRCLE
    } else {
        reduced
    }
}

/// Arc sine in degrees with the argument saturated to `[-1, 1]`.
///
/// Rounding at the poles can push `sin φ·sin δ + cos φ·cos δ·cos H` slightly past one;
/// clamping keeps the result at ±90° instead of producing `NaN`.
pub fn clamped_asin_deg(x: f64) -> Degree {
    x.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Parse a sexagesimal angle string to degrees
///
/// Arguments
/// ---------
/// * `angle`: a string in the format `±DD MM SS.SS` (sign optional)
///
/// Returns
/// -------
/// * The angle in decimal degrees, or [`LunarError::InvalidAngle`] if the input
///   does not have exactly three numeric fields.
pub fn parse_dms_to_deg(angle: &str) -> Result<Degree, LunarError> {
    let invalid = || LunarError::InvalidAngle(angle.to_string());

    let parts: Vec<&str> = angle.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let sign = if parts[0].starts_with('-') { -1.0 } else { 1.0 };
    let d: f64 = parts[0]
        .trim_start_matches(&['-', '+'][..])
        .parse()
        .map_err(|_| invalid())?;
    let m: f64 = parts[1].parse().map_err(|_| invalid())?;
    let s: f64 = parts[2].parse().map_err(|_| invalid())?;

    Ok(sign * (d + m / 60.0 + s / 3600.0))
}

#[cfg(test)]
mod conversion_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
        assert_relative_eq!(normalize_degrees(-0.5), 359.5, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_degrees_tiny_negative() {
        let r = normalize_degrees(-1e-15);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn test_normalize_signed_degrees() {
        assert_eq!(normalize_signed_degrees(180.0), 180.0);
        assert_eq!(normalize_signed_degrees(-180.0), 180.0);
        assert_eq!(normalize_signed_degrees(270.0), -90.0);
        assert_eq!(normalize_signed_degrees(-45.0), -45.0);
        assert_eq!(normalize_signed_degrees(540.0), 180.0);
    }

    #[test]
    fn test_clamped_asin_saturates() {
        assert_eq!(clamped_asin_deg(1.0 + 1e-12), 90.0);
        assert_eq!(clamped_asin_deg(-1.5), -90.0);
        assert_relative_eq!(clamped_asin_deg(0.5), 30.0, epsilon = 1e-12);
        assert!(!clamped_asin_deg(1e9).is_nan());
    }

    #[test]
    fn test_parse_dms_to_deg() {
        assert_relative_eq!(
            parse_dms_to_deg("-00 30 14.2").unwrap(),
            -0.5039444444444444,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            parse_dms_to_deg("+13 55 42.7").unwrap(),
            13.928527777777777,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            parse_dms_to_deg("48 51 24").unwrap(),
            48.85666666666667,
            epsilon = 1e-12
        );
        assert_eq!(
            parse_dms_to_deg("89 15"),
            Err(LunarError::InvalidAngle("89 15".into()))
        );
        assert!(parse_dms_to_deg("89 15 50.2.3").is_err());
        assert!(parse_dms_to_deg("north 15 50").is_err());
    }
}
