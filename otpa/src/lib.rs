pub mod app;
pub mod cache;
pub mod client;
pub mod config;
pub mod isochrone;
mod otpa_error;
pub mod report;
pub mod route;
pub mod util;

pub use otpa_error::OtpaError;
