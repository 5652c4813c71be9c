use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::RoutedTrip;

/// a departure window: a set of days of the week and a time-of-day range,
/// start inclusive and end exclusive. e.g. weekday evenings are
/// `{ days: [Mon..Fri], start: 18:30:00, end: 23:59:59 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureTimeCategory {
    pub days: Vec<Weekday>,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl DepartureTimeCategory {
    pub fn contains(&self, departure: &DateTime<FixedOffset>) -> bool {
        let time = departure.time();
        self.days.contains(&departure.weekday()) && self.start <= time && time < self.end
    }

    /// the trips whose requested start falls in this category
    pub fn select<'a>(&self, trips: &[RoutedTrip<'a>]) -> Vec<RoutedTrip<'a>> {
        trips
            .iter()
            .filter(|t| self.contains(&t.requested_start))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::DepartureTimeCategory;
    use chrono::{DateTime, NaiveTime, Weekday};

    #[test]
    fn test_contains() {
        let morning = DepartureTimeCategory {
            days: vec![Weekday::Mon, Weekday::Tue],
            start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        };
        // Monday 2013-05-06 at 08:00 and 09:00 UTC
        let at_eight = DateTime::parse_from_rfc3339("2013-05-06T08:00:00+00:00").unwrap();
        let at_nine = DateTime::parse_from_rfc3339("2013-05-06T09:00:00+00:00").unwrap();
        let saturday = DateTime::parse_from_rfc3339("2013-05-11T08:30:00+00:00").unwrap();
        assert!(morning.contains(&at_eight));
        assert!(!morning.contains(&at_nine));
        assert!(!morning.contains(&saturday));
    }

    #[test]
    fn test_deserialize_day_names() {
        let json = r#"{"days": ["Sat", "Sun"], "start": "10:00:00", "end": "16:00:00"}"#;
        let category: DepartureTimeCategory = serde_json::from_str(json).unwrap();
        assert_eq!(category.days, vec![Weekday::Sat, Weekday::Sun]);
    }
}
