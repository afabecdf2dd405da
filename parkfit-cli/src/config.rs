use parkfit::util::SearchConfig;
use serde::{Deserialize, Serialize};

/// Configuration of the request handler
///
/// Missing fields take their value from [`ParkFitConfig::default`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ParkFitConfig {
    /// Configuration of the search
    pub search_config: SearchConfig,
    /// Pretty-print the JSON response body
    pub pretty_output: bool,
}

impl Default for ParkFitConfig {
    fn default() -> Self {
        Self {
            search_config: SearchConfig { parallel: true },
            pretty_output: false,
        }
    }
}
