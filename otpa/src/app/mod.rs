pub mod compare;
pub mod isochrones;
mod otpa_cli;
pub mod plan;
pub mod report;
pub mod route;

pub use otpa_cli::{OtpaCliArguments, OtpaOperation};
