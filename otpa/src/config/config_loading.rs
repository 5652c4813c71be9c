use serde::de::DeserializeOwned;

use crate::OtpaError;

/// reads a TOML or JSON configuration file, chosen by file extension
pub fn read_configuration_file<T: DeserializeOwned>(f: &String) -> Result<T, OtpaError> {
    if f.ends_with(".toml") {
        let s = std::fs::read_to_string(f)
            .map_err(|e| OtpaError::ConfigurationError(format!("failure reading {f}: {e}")))?;
        toml::from_str(&s)
            .map_err(|e| OtpaError::ConfigurationError(format!("failure decoding {f}: {e}")))
    } else if f.ends_with(".json") {
        let s = std::fs::read_to_string(f)
            .map_err(|e| OtpaError::ConfigurationError(format!("failure reading {f}: {e}")))?;
        serde_json::from_str(&s)
            .map_err(|e| OtpaError::ConfigurationError(format!("failure decoding {f}: {e}")))
    } else {
        Err(OtpaError::ConfigurationError(format!(
            "unsupported file type: {f}"
        )))
    }
}
