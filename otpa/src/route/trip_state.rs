use std::fmt::Display;

/// where a trip is in a batch run on one graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TripState {
    /// not yet reached, or left behind by an aborted batch
    Pending,
    Routing,
    Routed,
    /// the server answered without a usable itinerary
    NoItinerary,
    FailedAfterRetries,
    /// skipped because output from an earlier run exists
    Resumed,
}

impl TripState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TripState::Pending | TripState::Routing)
    }
}

impl Display for TripState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TripState::Pending => "pending",
            TripState::Routing => "routing",
            TripState::Routed => "routed",
            TripState::NoItinerary => "no itinerary",
            TripState::FailedAfterRetries => "failed after retries",
            TripState::Resumed => "resumed",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Running,
    Completed,
    /// stopped at the failure ceiling. results so far are kept.
    Aborted,
}
