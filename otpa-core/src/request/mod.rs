//! builds OTP request URLs from routing parameters and trip or location details.
//! nothing in this module performs I/O.
mod bounding_box;
mod otp_endpoint;
mod otp_query;
mod otp_request;

pub use bounding_box::BoundingBox;
pub use otp_endpoint::{OtpEndpoint, OtpService};
pub use otp_query::OtpQuery;
pub use otp_request::{
    build_plan_url, build_raster_isochrone_url, build_request_url, build_vector_isochrone_url,
    build_web_planner_url, OtpRequest,
};
