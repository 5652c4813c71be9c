use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::model::ModelError;

/// the zone trip start times are written in. each start is placed using the
/// offset in force on its own date, so a trip set may span a daylight saving
/// change. written as `local`, an IANA name such as `Australia/Melbourne`, or
/// a fixed offset such as `+10:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TripTimeZone {
    /// the host's zone
    #[default]
    Local,
    Named(Tz),
    Fixed(FixedOffset),
}

impl TripTimeZone {
    /// the instant of a local start time. a time repeated when clocks go back
    /// resolves to its earlier instant. a time skipped when clocks go forward
    /// has no instant.
    pub fn localize(&self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            TripTimeZone::Local => Local
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
            TripTimeZone::Named(tz) => tz
                .from_local_datetime(naive)
                .earliest()
                .map(|dt| dt.fixed_offset()),
            TripTimeZone::Fixed(offset) => offset.from_local_datetime(naive).single(),
        }
    }
}

impl FromStr for TripTimeZone {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(TripTimeZone::Local);
        }
        if let Ok(offset) = FixedOffset::from_str(trimmed) {
            return Ok(TripTimeZone::Fixed(offset));
        }
        Tz::from_str(trimmed)
            .map(TripTimeZone::Named)
            .map_err(|_| ModelError::InvalidTimeZone(s.to_string()))
    }
}

impl TryFrom<String> for TripTimeZone {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TripTimeZone::from_str(&value)
    }
}

impl From<TripTimeZone> for String {
    fn from(value: TripTimeZone) -> Self {
        value.to_string()
    }
}

impl Display for TripTimeZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripTimeZone::Local => write!(f, "local"),
            TripTimeZone::Named(tz) => write!(f, "{}", tz.name()),
            TripTimeZone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}
