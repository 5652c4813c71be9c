use serde::{Deserialize, Serialize};

/// an OTP router (graph and timetable) to run a batch against. results for a
/// graph are written to their own subdirectory, and isochrone files carry
/// the graph's suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// short name used in reports and as the default subdirectory
    pub name: String,
    /// the `routerId` sent to the server
    pub router_id: String,
    #[serde(default)]
    pub subdirectory: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

impl GraphSpec {
    pub fn new(name: &str, router_id: &str) -> GraphSpec {
        GraphSpec {
            name: name.to_string(),
            router_id: router_id.to_string(),
            subdirectory: None,
            suffix: None,
        }
    }

    /// output subdirectory for this graph, defaulting to its name
    pub fn output_subdirectory(&self) -> &str {
        self.subdirectory.as_deref().unwrap_or(&self.name)
    }
}
