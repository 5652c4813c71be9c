use std::collections::BTreeMap;

use otpa_core::model::{itinerary::Itinerary, GraphSpec};

use super::{BatchStatus, TripOutcome, TripState};

/// everything known about a batch of trips on one graph: the outcome of each
/// trip that was attempted, the state of every trip, and the batch status.
#[derive(Debug, Clone)]
pub struct TripResultSet {
    graph: GraphSpec,
    outcomes: BTreeMap<String, TripOutcome>,
    states: BTreeMap<String, TripState>,
    status: BatchStatus,
}

impl TripResultSet {
    /// a running batch with every trip pending
    pub fn new<'a, I>(graph: &GraphSpec, trip_ids: I) -> TripResultSet
    where
        I: IntoIterator<Item = &'a str>,
    {
        TripResultSet {
            graph: graph.clone(),
            outcomes: BTreeMap::new(),
            states: trip_ids
                .into_iter()
                .map(|id| (id.to_string(), TripState::Pending))
                .collect(),
            status: BatchStatus::Running,
        }
    }

    pub fn graph(&self) -> &GraphSpec {
        &self.graph
    }

    pub fn status(&self) -> BatchStatus {
        self.status
    }

    pub fn state(&self, trip_id: &str) -> Option<TripState> {
        self.states.get(trip_id).copied()
    }

    pub fn outcome(&self, trip_id: &str) -> Option<&TripOutcome> {
        self.outcomes.get(trip_id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// routed itineraries by trip id, in id order
    pub fn itineraries(&self) -> impl Iterator<Item = (&str, &Itinerary)> {
        self.outcomes
            .iter()
            .filter_map(|(id, outcome)| outcome.itinerary().map(|it| (id.as_str(), it)))
    }

    pub fn n_routed(&self) -> usize {
        self.itineraries().count()
    }

    /// number of trips in each state
    pub fn state_counts(&self) -> BTreeMap<TripState, usize> {
        let mut counts = BTreeMap::new();
        for state in self.states.values() {
            *counts.entry(*state).or_insert(0) += 1;
        }
        counts
    }

    pub(crate) fn set_state(&mut self, trip_id: &str, state: TripState) {
        self.states.insert(trip_id.to_string(), state);
    }

    /// stores the outcome of a trip and moves it to the matching terminal state
    pub(crate) fn record(&mut self, trip_id: &str, outcome: TripOutcome) {
        self.set_state(trip_id, outcome.state());
        self.outcomes.insert(trip_id.to_string(), outcome);
    }

    /// a trip skipped in favor of earlier output. a readable saved itinerary
    /// is kept so the trip still counts in aggregation.
    pub(crate) fn record_resumed(&mut self, trip_id: &str, saved: Option<Itinerary>) {
        self.set_state(trip_id, TripState::Resumed);
        if let Some(itinerary) = saved {
            self.outcomes
                .insert(trip_id.to_string(), TripOutcome::Routed(itinerary));
        }
    }

    pub(crate) fn finish(&mut self, status: BatchStatus) {
        self.status = status;
    }
}
