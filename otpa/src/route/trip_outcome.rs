use otpa_core::model::itinerary::Itinerary;

use super::TripState;

/// the result of routing a single trip. only `Routed` carries an itinerary.
#[derive(Debug, Clone)]
pub enum TripOutcome {
    Routed(Itinerary),
    /// the server could not plan the trip
    PlanningFailed { message: String },
    /// the response could not be understood
    Malformed { reason: String },
    FailedAfterRetries { attempts: usize },
}

impl TripOutcome {
    pub fn itinerary(&self) -> Option<&Itinerary> {
        match self {
            TripOutcome::Routed(itinerary) => Some(itinerary),
            _ => None,
        }
    }

    /// the terminal state a trip with this outcome ends in
    pub fn state(&self) -> TripState {
        match self {
            TripOutcome::Routed(_) => TripState::Routed,
            TripOutcome::PlanningFailed { .. } | TripOutcome::Malformed { .. } => TripState::NoItinerary,
            TripOutcome::FailedAfterRetries { .. } => TripState::FailedAfterRetries,
        }
    }
}
