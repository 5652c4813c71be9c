mod itinerary;
mod itinerary_record;
mod leg;
mod plan_response;
mod travel_mode;

pub use itinerary::Itinerary;
pub use itinerary_record::ItineraryRecord;
pub use leg::Leg;
pub use plan_response::{PlanResponse, PlanResult, Plan, PlannerError};
pub use travel_mode::TravelMode;
