use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::OtpaError;

/// command line tool for batch routing, isochrone downloads and reporting
/// against an OpenTripPlanner server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct OtpaCliArguments {
    /// select the operation to run
    #[command(subcommand)]
    pub op: OtpaOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum OtpaOperation {
    /// routes every trip in the configured trip set on each configured graph,
    /// saving one itinerary file per trip
    Route {
        /// route run configuration file (.toml or .json)
        #[arg(short, long)]
        config: String,
        /// skip trips with itineraries saved by an earlier run
        #[arg(long)]
        resume: bool,
        /// do not save itineraries as they are routed
        #[arg(long)]
        no_save: bool,
        /// delay between retries of a failed request, e.g. 10s, 1m
        #[arg(long, value_parser = parse_duration)]
        retry_delay: Option<Duration>,
        /// timeout for each request, e.g. 30s
        #[arg(long, value_parser = parse_duration)]
        timeout: Option<Duration>,
    },
    /// routes a single trip on each configured graph and prints its statistics
    Plan {
        #[arg(short, long)]
        config: String,
        /// origin as LON,LAT
        #[arg(long, allow_hyphen_values = true)]
        origin: String,
        /// destination as LON,LAT
        #[arg(long, allow_hyphen_values = true)]
        destination: String,
        /// YYYY-MM-DDTHH:MM:SS, or HH:MM:SS on the configured base date
        #[arg(long)]
        departure: String,
    },
    /// downloads isochrone rasters (and vectors, if configured) for each
    /// location, time and graph
    Isochrones {
        /// isochrone run configuration file (.toml or .json)
        #[arg(short, long)]
        config: String,
        /// download again even when files exist
        #[arg(long)]
        force: bool,
    },
    /// continues isochrone runs from their saved metadata files
    IsochronesResume {
        /// isochrone run metadata files
        #[arg(required = true)]
        metadata: Vec<String>,
        /// OTP API path, when the server does not use the default
        #[arg(long)]
        api_path: Option<String>,
        #[arg(long)]
        force: bool,
    },
    /// prints summaries of saved itineraries and writes CSV reports
    Report {
        #[arg(short, long)]
        config: String,
        /// report on this graph only
        #[arg(long)]
        graph: Option<String>,
        /// per-route statistics CSV output
        #[arg(long)]
        route_csv: Option<String>,
        /// per origin/destination zone statistics CSV output
        #[arg(long)]
        od_csv: Option<String>,
        /// file of trip ids, one per line, left out of the reports
        #[arg(long)]
        exclude_ids: Option<String>,
        /// file of trip ids, one per line, to report on exclusively
        #[arg(long)]
        select_ids: Option<String>,
    },
    /// writes a shapefile comparing trip times between two graphs
    Compare {
        #[arg(short, long)]
        config: String,
        /// name of the first graph
        #[arg(long)]
        first: String,
        /// name of the second graph
        #[arg(long)]
        second: String,
        /// output shapefile path
        #[arg(short, long)]
        output: String,
    },
}

impl OtpaOperation {
    pub fn run(&self) -> Result<(), OtpaError> {
        match self {
            OtpaOperation::Route {
                config,
                resume,
                no_save,
                retry_delay,
                timeout,
            } => crate::app::route::run_route(config, *resume, *no_save, *retry_delay, *timeout),
            OtpaOperation::Plan {
                config,
                origin,
                destination,
                departure,
            } => crate::app::plan::run_plan(config, origin, destination, departure),
            OtpaOperation::Isochrones { config, force } => {
                crate::app::isochrones::run_isochrones(config, *force)
            }
            OtpaOperation::IsochronesResume {
                metadata,
                api_path,
                force,
            } => crate::app::isochrones::run_isochrones_resume(metadata, api_path.as_deref(), *force),
            OtpaOperation::Report {
                config,
                graph,
                route_csv,
                od_csv,
                exclude_ids,
                select_ids,
            } => crate::app::report::run_report(
                config,
                graph.as_deref(),
                &crate::app::report::ReportOutputs {
                    route_csv: route_csv.as_deref(),
                    od_csv: od_csv.as_deref(),
                    exclude_ids: exclude_ids.as_deref(),
                    select_ids: select_ids.as_deref(),
                },
            ),
            OtpaOperation::Compare {
                config,
                first,
                second,
                output,
            } => crate::app::compare::run_compare(config, first, second, output),
        }
    }
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s).map_err(|e| format!("Invalid duration: {}", e))
}
