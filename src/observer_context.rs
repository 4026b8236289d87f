//! # Observer/time context
//!
//! [`ObserverContext`] is the single input of the whole pipeline: where the observer
//! stands and which UTC instant is being asked about. It is a small `Copy` value
//! owned by the caller; every computation takes it by reference and recomputes the
//! Julian Date from its calendar fields.
//!
//! No validation is performed. Latitudes beyond ±90°, month 14 or second 75 are
//! stored as given and flow through the arithmetic unchanged.
//!
//! ## Conversions
//!
//! - [`ObserverContext::from_epoch`] breaks a hifitime [`Epoch`] into UTC Gregorian
//!   fields (sub-second part truncated).
//! - [`ObserverContext::to_epoch`] goes the other way and fails with
//!   [`LunarError::CalendarOutOfRange`] when the fields are not a real calendar date.

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, JulianDate};
use crate::lunar_errors::LunarError;
use crate::time::julian_date;

/// Observer location and UTC timestamp.
///
/// Units
/// -----
/// * `latitude`: degrees, north positive.
/// * `longitude`: degrees, east positive.
/// * calendar fields: proleptic Gregorian, UTC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub latitude: Degree,
    pub longitude: Degree,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl Default for ObserverContext {
    /// 2000-01-01T00:00:00 UTC at latitude 0, longitude 0.
    fn default() -> Self {
        ObserverContext {
            latitude: 0.0,
            longitude: 0.0,
            year: 2000,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

impl ObserverContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        latitude: Degree,
        longitude: Degree,
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> Self {
        ObserverContext {
            latitude,
            longitude,
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Overwrite every field at once.
    #[allow(clippy::too_many_arguments)]
    pub fn set(
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
        *self = ObserverContext::new(latitude, longitude, year, month, day, hour, minute, second);
        log::trace!("observer context set to {self:?}");
    }

    /// Build a context from a hifitime epoch, read in UTC.
    ///
    /// Nanoseconds are dropped: the context has whole-second resolution.
    pub fn from_epoch(latitude: Degree, longitude: Degree, epoch: &Epoch) -> Self {
        let (year, month, day, hour, minute, second, _nanos) = epoch.to_gregorian_utc();
        ObserverContext::new(
            latitude,
            longitude,
            year,
            month as i32,
            day as i32,
            hour as i32,
            minute as i32,
            second as i32,
        )
    }

    /// Convert the calendar fields back to a hifitime epoch in UTC.
    ///
    /// Return
    /// ------
    /// * the epoch, or [`LunarError::CalendarOutOfRange`] if a field does not fit the
    ///   Gregorian calendar.
    pub fn to_epoch(&self) -> Result<Epoch, LunarError> {
        let out_of_range = || LunarError::CalendarOutOfRange(self.timestamp_string());
        let field = |v: i32| u8::try_from(v).map_err(|_| out_of_range());

        Epoch::maybe_from_gregorian_utc(
            self.year,
            field(self.month)?,
            field(self.day)?,
            field(self.hour)?,
            field(self.minute)?,
            field(self.second)?,
            0,
        )
        .map_err(|_| out_of_range())
    }

    /// Julian Date of the stored timestamp.
    pub fn julian_date(&self) -> JulianDate {
        julian_date(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    fn timestamp_string(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl std::fmt::Display for ObserverContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} UTC at lat {:.4}°, lon {:.4}°",
            self.timestamp_string(),
            self.latitude,
            self.longitude
        )
    }
}
