use otpa_core::{model::GraphSpec, request::OtpEndpoint};
use serde::{Deserialize, Serialize};

use super::{read_configuration_file, BatchConfiguration};
use crate::{
    isochrone::{IsochroneSetSpecification, LocationSource},
    OtpaError,
};

/// defines an isochrone download run over one or more graphs
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct IsochroneRunConfiguration {
    pub server_url: String,
    #[serde(default)]
    pub api_path: Option<String>,
    pub output_directory: String,
    /// when empty, a single run is made against the server's default router
    #[serde(default)]
    pub graphs: Vec<GraphSpec>,
    #[serde(default)]
    pub batch: BatchConfiguration,
    /// file to read locations from, replacing any listed in `isochrones`
    #[serde(default)]
    pub location_source: Option<LocationSource>,
    pub isochrones: IsochroneSetSpecification,
}

impl IsochroneRunConfiguration {
    pub fn endpoint(&self) -> OtpEndpoint {
        let mut endpoint = OtpEndpoint::new(&self.server_url);
        if let Some(api_path) = &self.api_path {
            endpoint.api_path = api_path.clone();
        }
        endpoint
    }

    /// the isochrone set with locations loaded from the location source, if any
    pub fn isochrone_set(&self) -> Result<IsochroneSetSpecification, OtpaError> {
        match &self.location_source {
            None => Ok(self.isochrones.clone()),
            Some(source) => {
                let locations = source.build()?;
                Ok(IsochroneSetSpecification {
                    locations,
                    ..self.isochrones.clone()
                })
            }
        }
    }
}

impl TryFrom<&String> for IsochroneRunConfiguration {
    type Error = OtpaError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        read_configuration_file(f)
    }
}
