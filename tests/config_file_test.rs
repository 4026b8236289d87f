use std::io::Write;

use approx::assert_relative_eq;
use lunar::config::LunarConfig;
use lunar::{LunarError, MoonTracker};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_tracker_from_config_file() {
    let file = write_config(
        r#"
        [observer]
        latitude = 48.8566
        longitude = 2.3522
        name = "Paris"

        [time]
        utc = "1987-04-10T19:21:00"
        "#,
    );

    let config = LunarConfig::from_file(file.path()).unwrap();
    let tracker = MoonTracker::from_config(&config).unwrap();

    assert_eq!(tracker.context().year, 1987);
    assert_relative_eq!(tracker.height(), 36.49171825144894, epsilon = 1e-6);
    assert_relative_eq!(tracker.azimuth(), -38.84649288803553, epsilon = 1e-6);
    assert_relative_eq!(tracker.phase(), 57.725194716923056, epsilon = 1e-7);
    assert_relative_eq!(tracker.illumination(), 42.274805283076944, epsilon = 1e-7);
}

#[test]
fn test_sexagesimal_site_without_time() {
    let file = write_config(
        r#"
        [observer]
        latitude = "+00 00 00.0"
        longitude = "+00 00 00.0"
        "#,
    );

    let tracker = MoonTracker::from_config(&LunarConfig::from_file(file.path()).unwrap()).unwrap();
    assert_relative_eq!(tracker.height(), -24.267719780029008, epsilon = 1e-6);
    assert_relative_eq!(tracker.azimuth(), -95.15217057828545, epsilon = 1e-6);
    assert_relative_eq!(tracker.phase(), 98.30680663731798, epsilon = 1e-7);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = LunarConfig::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(LunarError::ConfigRead(_))));
}

#[test]
fn test_malformed_file() {
    let file = write_config("[observer\nlatitude = 1.0\n");
    let result = LunarConfig::from_file(file.path());
    assert!(matches!(result, Err(LunarError::ConfigParse(_))));
}
