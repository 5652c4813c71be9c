//! CSV reports, printed summaries and the graph comparison shapefile.
mod comparison_shapefile;
mod csv_reports;
mod summary;

#[cfg(test)]
mod test_fixtures;

pub use comparison_shapefile::{write_comparison_shapefile, GraphItineraries, WGS84_PRJ};
pub use csv_reports::{write_od_csv, write_route_csv, OD_HEADERS, ROUTE_HEADERS};
pub use summary::{departure_category_summary, mode_summary, overall_summary};
