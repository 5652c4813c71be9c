pub mod graph_spec;
pub mod itinerary;
mod model_error;
pub mod routing_parameters;
pub mod trip;

pub use graph_spec::GraphSpec;
pub use model_error::ModelError;
pub use routing_parameters::{ParameterValue, RoutingParameters};
