use std::{fmt::Display, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::model::ModelError;

/// the requested start of a trip. trip sets are sometimes collected as
/// times-of-day only, to be combined with a base date when routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TripStart {
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

impl TripStart {
    pub const DATETIME_FORMATS: [&'static str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    pub const TIME_FORMAT: &'static str = "%H:%M:%S";

    /// the time-of-day component of this start
    pub fn time(&self) -> NaiveTime {
        match self {
            TripStart::DateTime(dt) => dt.time(),
            TripStart::Time(t) => *t,
        }
    }

    /// the full start datetime, if this start carries a date
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        match self {
            TripStart::DateTime(dt) => Some(*dt),
            TripStart::Time(_) => None,
        }
    }

    /// combines a time-only start with the given date. starts that already
    /// carry a date are returned unchanged.
    pub fn with_date(&self, date: NaiveDate) -> NaiveDateTime {
        match self {
            TripStart::DateTime(dt) => *dt,
            TripStart::Time(t) => date.and_time(*t),
        }
    }
}

impl FromStr for TripStart {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        for fmt in Self::DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
                return Ok(TripStart::DateTime(dt));
            }
        }
        NaiveTime::parse_from_str(trimmed, Self::TIME_FORMAT)
            .map(TripStart::Time)
            .map_err(|_| ModelError::InvalidTripStart(s.to_string()))
    }
}

impl TryFrom<String> for TripStart {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TripStart::from_str(&value)
    }
}

impl From<TripStart> for String {
    fn from(value: TripStart) -> Self {
        value.to_string()
    }
}

impl Display for TripStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripStart::DateTime(dt) => write!(f, "{}", dt.format(Self::DATETIME_FORMATS[0])),
            TripStart::Time(t) => write!(f, "{}", t.format(Self::TIME_FORMAT)),
        }
    }
}
