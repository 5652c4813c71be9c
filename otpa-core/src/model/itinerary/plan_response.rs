use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Itinerary;
use crate::model::ModelError;

/// body of an OTP `/plan` response. a missing plan means the server could not
/// plan the trip, with the reason in `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(default)]
    pub plan: Option<Plan>,
    #[serde(default)]
    pub error: Option<PlannerError>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub itineraries: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerError {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
}

/// what a plan response amounts to for a single trip
#[derive(Debug, Clone)]
pub enum PlanResult {
    Itinerary(Itinerary),
    PlanningFailed(String),
    Malformed(String),
}

impl PlanResponse {
    pub fn from_slice(body: &[u8]) -> Result<PlanResponse, ModelError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// classifies the response by its first itinerary
    pub fn into_first_itinerary(self) -> PlanResult {
        match self.plan {
            None => {
                let msg = self
                    .error
                    .and_then(|e| e.msg)
                    .unwrap_or_else(|| String::from("no plan returned"));
                PlanResult::PlanningFailed(msg)
            }
            Some(plan) => match plan.itineraries.into_iter().next() {
                None => PlanResult::Malformed(String::from("plan contained no itineraries")),
                Some(value) => match Itinerary::try_from(value) {
                    Ok(itinerary) => PlanResult::Itinerary(itinerary),
                    Err(e) => PlanResult::Malformed(e.to_string()),
                },
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::{PlanResponse, PlanResult};
    use crate::model::itinerary::TravelMode;

    #[test]
    fn test_planning_failure_carries_message() {
        let body = br#"{"plan": null, "error": {"id": 404, "msg": "Trip is not possible."}}"#;
        let response = PlanResponse::from_slice(body).expect("should decode");
        match response.into_first_itinerary() {
            PlanResult::PlanningFailed(msg) => assert_eq!(msg, "Trip is not possible."),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_bad_itinerary_is_malformed() {
        let body = br#"{"plan": {"itineraries": [{"legs": "nope"}]}}"#;
        let response = PlanResponse::from_slice(body).expect("should decode");
        assert!(matches!(response.into_first_itinerary(), PlanResult::Malformed(_)));
    }

    #[test]
    fn test_unlisted_leg_mode_still_routes() {
        let body = br#"{"plan": {"itineraries": [{
            "startTime": 1367827200000, "endTime": 1367827800000,
            "walkTime": 0, "transitTime": 0, "waitingTime": 0,
            "walkDistance": 0.0, "transfers": 0,
            "legs": [{"mode": "BICYCLE_RENT", "startTime": 1367827200000,
                      "endTime": 1367827800000, "distance": 2500.0, "duration": 600000}]
        }]}}"#;
        let response = PlanResponse::from_slice(body).expect("should decode");
        match response.into_first_itinerary() {
            PlanResult::Itinerary(itinerary) => {
                let mode = TravelMode::Other(String::from("BICYCLE_RENT"));
                assert_eq!(itinerary.distance_by_mode()[&mode], 2500.0);
                assert_eq!(itinerary.first_non_walk_mode(), Some(mode));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_is_decode_error() {
        assert!(PlanResponse::from_slice(b"<html>").is_err());
    }
}
