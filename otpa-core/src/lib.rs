pub mod aggregate;
pub mod model;
pub mod request;
pub mod util;
