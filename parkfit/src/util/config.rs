use serde::{Deserialize, Serialize};

/// Configuration of the search
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Search the locations in parallel. The results are identical to a sequential run.
    #[serde(default)]
    pub parallel: bool,
}
