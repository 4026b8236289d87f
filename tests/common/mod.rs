use approx::assert_relative_eq;
use lunar::horizontal::HorizontalPosition;
use lunar::ObserverContext;

/// A handful of sites spread over both hemispheres and both sides of Greenwich.
pub fn sample_sites() -> Vec<(&'static str, f64, f64)> {
    vec![
        ("Greenwich equator", 0.0, 0.0),
        ("Paris", 48.8566, 2.3522),
        ("Sydney", -33.8688, 151.2093),
        ("Honolulu", 21.3069, -157.8583),
        ("Svalbard", 78.2232, 15.6267),
        ("South Pole", -90.0, 0.0),
    ]
}

pub fn context_at(site: (&str, f64, f64), timestamp: (i32, i32, i32, i32, i32, i32)) -> ObserverContext {
    let (_, lat, lon) = site;
    let (year, month, day, hour, minute, second) = timestamp;
    ObserverContext::new(lat, lon, year, month, day, hour, minute, second)
}

pub fn assert_horizontal_close(
    actual: &HorizontalPosition,
    expected: &HorizontalPosition,
    epsilon: f64,
) {
    assert_relative_eq!(actual.azimuth, expected.azimuth, epsilon = epsilon);
    assert_relative_eq!(actual.altitude, expected.altitude, epsilon = epsilon);
}
