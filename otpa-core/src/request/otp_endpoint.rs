use serde::{Deserialize, Serialize};

/// location of the OTP web services on a server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEndpoint {
    /// scheme, host and port, e.g. `http://localhost:8080`
    pub server_url: String,
    #[serde(default = "OtpEndpoint::default_api_path")]
    pub api_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpService {
    Plan,
    Wms,
    Iso,
}

impl OtpService {
    pub fn path(&self) -> &'static str {
        match self {
            OtpService::Plan => "/plan",
            OtpService::Wms => "/wms",
            OtpService::Iso => "/iso",
        }
    }
}

impl OtpEndpoint {
    pub const DEFAULT_API_PATH: &'static str = "/opentripplanner-api-webapp/ws";

    pub fn new(server_url: &str) -> OtpEndpoint {
        OtpEndpoint {
            server_url: server_url.to_string(),
            api_path: Self::default_api_path(),
        }
    }

    fn default_api_path() -> String {
        String::from(Self::DEFAULT_API_PATH)
    }

    pub fn service_url(&self, service: OtpService) -> String {
        format!(
            "{}{}{}",
            self.server_url.trim_end_matches('/'),
            self.api_path,
            service.path()
        )
    }
}
