use std::{cmp::Ordering, collections::BTreeMap};

use chrono::NaiveDate;

use super::{Trip, TripStart};
use crate::model::ModelError;

/// the set of trips for a batch, keyed by trip id. trips are visited in
/// natural id order, so runs of digits compare by value: "2" before "10".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripCatalog {
    trips: BTreeMap<String, Trip>,
    order: Vec<String>,
}

impl TripCatalog {
    pub fn new(trips: Vec<Trip>) -> Result<TripCatalog, ModelError> {
        let mut by_id = BTreeMap::new();
        for trip in trips {
            let id = trip.id().to_string();
            if by_id.insert(id.clone(), trip).is_some() {
                return Err(ModelError::DuplicateTripId(id));
            }
        }
        Ok(TripCatalog::from_map(by_id))
    }

    fn from_map(trips: BTreeMap<String, Trip>) -> TripCatalog {
        let mut order: Vec<String> = trips.keys().cloned().collect();
        order.sort_by(|a, b| natural_cmp(a, b));
        TripCatalog { trips, order }
    }

    pub fn get(&self, trip_id: &str) -> Option<&Trip> {
        self.trips.get(trip_id)
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// trips in natural id order
    pub fn iter(&self) -> impl Iterator<Item = &Trip> {
        self.order.iter().filter_map(|id| self.trips.get(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// builds a catalog where every trip carries a full start datetime. time-only
    /// starts are combined with `base_date`; without one, they are an error.
    pub fn resolve_starts(&self, base_date: Option<NaiveDate>) -> Result<TripCatalog, ModelError> {
        let trips = self
            .trips
            .iter()
            .map(|(id, trip)| match (trip.start(), base_date) {
                (TripStart::DateTime(_), _) => Ok((id.clone(), trip.clone())),
                (TripStart::Time(_), Some(date)) => Ok((id.clone(), trip.with_start_date(date))),
                (TripStart::Time(_), None) => Err(ModelError::UnresolvedTripStart(id.clone())),
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(TripCatalog {
            trips,
            order: self.order.clone(),
        })
    }
}

/// compares ids run by run. digit runs compare by numeric value, other runs
/// as text. ids equal under that rule, like "7" and "07", fall back to plain
/// string order.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a;
    let mut right = b;
    loop {
        match (left.is_empty(), right.is_empty()) {
            (true, true) => return a.cmp(b),
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        let (l_run, l_rest) = split_run(left);
        let (r_run, r_rest) = split_run(right);
        let l_digits = l_run.starts_with(|c: char| c.is_ascii_digit());
        let r_digits = r_run.starts_with(|c: char| c.is_ascii_digit());
        let ordering = if l_digits && r_digits {
            let l_num = l_run.trim_start_matches('0');
            let r_num = r_run.trim_start_matches('0');
            l_num.len().cmp(&r_num.len()).then_with(|| l_num.cmp(r_num))
        } else {
            l_run.cmp(r_run)
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
        left = l_rest;
        right = r_rest;
    }
}

/// the leading run of all-digit or all-non-digit characters, and the rest
fn split_run(s: &str) -> (&str, &str) {
    let digits = s.starts_with(|c: char| c.is_ascii_digit());
    let end = s
        .find(|c: char| c.is_ascii_digit() != digits)
        .unwrap_or(s.len());
    s.split_at(end)
}

#[cfg(test)]
mod test {
    use super::{natural_cmp, TripCatalog};
    use crate::model::trip::{Trip, TripStart};
    use chrono::{NaiveDate, NaiveTime};
    use geo::Point;

    fn trip(id: &str) -> Trip {
        Trip::new(
            id,
            Point::new(0.0, 0.0),
            Point::new(0.1, 0.1),
            TripStart::Time(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            "A",
            "B",
        )
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        assert!(TripCatalog::new(vec![trip("1"), trip("1")]).is_err());
    }

    #[test]
    fn test_iterates_in_id_order() {
        let catalog = TripCatalog::new(vec![trip("c"), trip("a"), trip("b")]).unwrap();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_numeric_ids_in_natural_order() {
        let catalog = TripCatalog::new(vec![trip("10"), trip("2"), trip("1"), trip("trip-10"), trip("trip-9")]).unwrap();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids, vec!["1", "2", "10", "trip-9", "trip-10"]);
        let visited: Vec<&str> = catalog.iter().map(|t| t.id()).collect();
        assert_eq!(visited, ids);
    }

    #[test]
    fn test_natural_cmp() {
        use std::cmp::Ordering;
        assert_eq!(natural_cmp("9", "10"), Ordering::Less);
        assert_eq!(natural_cmp("a2b", "a10a"), Ordering::Less);
        assert_eq!(natural_cmp("07", "7"), Ordering::Less);
        assert_eq!(natural_cmp("x", "x1"), Ordering::Less);
        assert_eq!(natural_cmp("b", "a"), Ordering::Greater);
    }

    #[test]
    fn test_resolve_starts() {
        let catalog = TripCatalog::new(vec![trip("a"), trip("b")]).unwrap();
        assert!(catalog.resolve_starts(None).is_err());
        let date = NaiveDate::from_ymd_opt(2013, 5, 6).unwrap();
        let resolved = catalog.resolve_starts(Some(date)).unwrap();
        assert!(resolved.iter().all(|t| t.start().datetime().is_some()));
        assert_eq!(resolved.ids().collect::<Vec<_>>(), catalog.ids().collect::<Vec<_>>());
        // the original catalog is untouched
        assert!(catalog.iter().all(|t| t.start().datetime().is_none()));
    }
}
