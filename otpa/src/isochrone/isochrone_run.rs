use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, NaiveTime};
use otpa_core::{model::GraphSpec, request::OtpEndpoint};

use super::{nearby_departures, nearby_minute_offsets, IsochroneSetSpecification};
use crate::cache::RunMetadata;

/// one isochrone download pass: an isochrone set against a single router,
/// written to one directory
#[derive(Debug, Clone, PartialEq)]
pub struct IsochroneRun {
    pub endpoint: OtpEndpoint,
    pub router_id: Option<String>,
    pub output_directory: PathBuf,
    pub suffix: Option<String>,
    pub spec: IsochroneSetSpecification,
}

impl IsochroneRun {
    /// rebuilds a run from saved metadata. output goes to the metadata's directory.
    pub fn from_metadata(metadata: RunMetadata, directory: &Path, api_path: Option<&str>) -> IsochroneRun {
        let mut endpoint = OtpEndpoint::new(&metadata.server_url);
        if let Some(api_path) = api_path {
            endpoint.api_path = api_path.to_string();
        }
        IsochroneRun {
            endpoint,
            router_id: metadata.otp_router_id,
            output_directory: directory.to_path_buf(),
            suffix: metadata.save_suffix,
            spec: metadata.iso_set_specification,
        }
    }

    pub fn metadata(&self, run_time: NaiveDateTime) -> RunMetadata {
        RunMetadata {
            run_time,
            server_url: self.endpoint.server_url.clone(),
            otp_router_id: self.router_id.clone(),
            save_suffix: self.suffix.clone(),
            iso_set_specification: self.spec.clone(),
        }
    }

    /// minute offsets to download around each configured time
    pub fn minute_offsets(&self) -> Vec<f64> {
        if self.spec.save_nearby_times {
            nearby_minute_offsets(self.spec.nearby_minutes, self.spec.num_each_side)
        } else {
            vec![0.0]
        }
    }

    /// every raster departure for one configured time
    pub fn raster_departures(&self, time: &NaiveTime) -> Vec<NaiveDateTime> {
        nearby_departures(self.spec.date, *time, &self.minute_offsets())
    }

    /// number of raster requests this run makes
    pub fn n_rasters(&self) -> usize {
        self.spec.locations.len() * self.spec.times.len() * self.minute_offsets().len()
    }
}

/// one run per graph, each in its own subdirectory of `base_directory` with
/// the graph's router and suffix. with no graphs, a single run in
/// `base_directory` against the default router.
pub fn expand_graphs(
    base_directory: &Path,
    endpoint: &OtpEndpoint,
    graphs: &[GraphSpec],
    spec: &IsochroneSetSpecification,
) -> Vec<IsochroneRun> {
    if graphs.is_empty() {
        return vec![IsochroneRun {
            endpoint: endpoint.clone(),
            router_id: None,
            output_directory: base_directory.to_path_buf(),
            suffix: None,
            spec: spec.clone(),
        }];
    }
    graphs
        .iter()
        .map(|graph| IsochroneRun {
            endpoint: endpoint.clone(),
            router_id: Some(graph.router_id.clone()),
            output_directory: base_directory.join(graph.output_subdirectory()),
            suffix: graph.suffix.clone(),
            spec: spec.clone(),
        })
        .collect()
}
