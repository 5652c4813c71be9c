use std::collections::BTreeSet;

use super::{AggregateError, RoutedTrip};

/// the trips with the given ids, in the order requested. every id must be present.
pub fn select_trip_ids<'a>(
    trips: &[RoutedTrip<'a>],
    trip_ids: &[String],
) -> Result<Vec<RoutedTrip<'a>>, AggregateError> {
    trip_ids
        .iter()
        .map(|id| {
            trips
                .iter()
                .find(|t| t.id() == id.as_str())
                .cloned()
                .ok_or_else(|| AggregateError::UnknownTripId(id.clone()))
        })
        .collect()
}

/// the trips without the given ids. ids not present are reported and ignored.
pub fn exclude_trip_ids<'a>(trips: &[RoutedTrip<'a>], trip_ids: &[String]) -> Vec<RoutedTrip<'a>> {
    let excluded: BTreeSet<&str> = trip_ids.iter().map(String::as_str).collect();
    let present: BTreeSet<&str> = trips.iter().map(|t| t.id()).collect();
    for missing in excluded.difference(&present) {
        log::warn!("trip id '{missing}' was requested for exclusion but is not in the trip results");
    }
    trips
        .iter()
        .filter(|t| !excluded.contains(t.id()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aggregate::test_fixtures::{itinerary, leg, routed, trip};

    #[test]
    fn test_subsets() {
        let trips = [trip("a", "X", "Y"), trip("b", "X", "Y")];
        let itin = itinerary(&[leg("BUS", 0, 10, 1000.0)], 0, 0.0, 0);
        let routed: Vec<_> = trips.iter().map(|t| routed(t, &itin)).collect();

        let selected = select_trip_ids(&routed, &[String::from("b")]).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id(), "b");
        assert!(select_trip_ids(&routed, &[String::from("zz")]).is_err());

        let remaining = exclude_trip_ids(&routed, &[String::from("a"), String::from("zz")]);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id(), "b");
    }
}
