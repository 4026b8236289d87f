//! Observer configuration file support.
//!
//! A configuration names the observer site and, optionally, the UTC instant to
//! evaluate:
//!
//! ```toml
//! [observer]
//! latitude = 48.8566            # decimal degrees, or "+48 51 23.8"
//! longitude = "02 21 07.9"
//! name = "Paris"
//!
//! [time]
//! utc = "2024-03-25T21:30:00"   # omitted: 2000-01-01T00:00:00
//! ```
//!
//! Out-of-range angles are logged and kept as they are.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::Degree;
use crate::conversion::parse_dms_to_deg;
use crate::lunar_errors::LunarError;
use crate::observer_context::ObserverContext;
use crate::time::parse_utc;

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LunarConfig {
    pub observer: ObserverSettings,
    #[serde(default)]
    pub time: TimeSettings,
}

/// Observer site settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverSettings {
    pub latitude: AngleSetting,
    pub longitude: AngleSetting,
    #[serde(default)]
    pub name: Option<String>,
}

/// An angle written either as decimal degrees or as a `±DD MM SS.S` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AngleSetting {
    Degrees(f64),
    Sexagesimal(String),
}

impl AngleSetting {
    pub fn to_degrees(&self) -> Result<Degree, LunarError> {
        match self {
            AngleSetting::Degrees(deg) => Ok(*deg),
            AngleSetting::Sexagesimal(s) => parse_dms_to_deg(s),
        }
    }
}

/// Evaluation instant settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSettings {
    /// UTC timestamp parsed by hifitime, e.g. `2024-03-25T21:30:00`.
    #[serde(default)]
    pub utc: Option<String>,
}

impl LunarConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, LunarError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(LunarConfig)` if successful
    /// * `Err(LunarError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LunarError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "loaded observer configuration from {}",
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Resolve the configured site and instant into an [`ObserverContext`].
    ///
    /// A missing `[time]` section or `utc` key yields the default epoch
    /// 2000-01-01T00:00:00.
    pub fn observer_context(&self) -> Result<ObserverContext, LunarError> {
        let latitude = self.observer.latitude.to_degrees()?;
        let longitude = self.observer.longitude.to_degrees()?;

        if !(-90.0..=90.0).contains(&latitude) {
            log::warn!("configured latitude {latitude} is outside [-90, 90]");
        }
        if !(-180.0..=180.0).contains(&longitude) {
            log::warn!("configured longitude {longitude} is outside [-180, 180]");
        }

        match &self.time.utc {
            Some(utc) => {
                let epoch = parse_utc(utc)?;
                Ok(ObserverContext::from_epoch(latitude, longitude, &epoch))
            }
            None => Ok(ObserverContext {
                latitude,
                longitude,
                ..ObserverContext::default()
            }),
        }
    }
}
