use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// OTP query parameters passed through verbatim into request URLs, in the
/// order they were configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutingParameters(IndexMap<String, ParameterValue>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterValue::Flag(b) => write!(f, "{b}"),
            ParameterValue::Integer(i) => write!(f, "{i}"),
            ParameterValue::Float(x) => write!(f, "{x}"),
            ParameterValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl RoutingParameters {
    pub fn new() -> RoutingParameters {
        RoutingParameters::default()
    }

    pub fn with(mut self, name: &str, value: ParameterValue) -> RoutingParameters {
        self.0.insert(name.to_string(), value);
        self
    }

    pub fn insert(&mut self, name: &str, value: ParameterValue) -> Option<ParameterValue> {
        self.0.insert(name.to_string(), value)
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParameterValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Text(value.to_string())
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Integer(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Float(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Flag(value)
    }
}

#[cfg(test)]
mod test {
    use super::{ParameterValue, RoutingParameters};

    #[test]
    fn test_keeps_configured_order() {
        let json = r#"{"mode": "TRANSIT,WALK", "walkSpeed": 1.33, "maxTransfers": 4, "arriveBy": false}"#;
        let params: RoutingParameters = serde_json::from_str(json).expect("should decode");
        let names: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["mode", "walkSpeed", "maxTransfers", "arriveBy"]);
        assert_eq!(params.get("maxTransfers"), Some(&ParameterValue::Integer(4)));
        assert_eq!(params.get("arriveBy").map(|v| v.to_string()), Some(String::from("false")));
    }
}
