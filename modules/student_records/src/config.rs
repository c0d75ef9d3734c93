//! Configuration for student records module

use serde::{Deserialize, Serialize};

/// Student records configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Whether the module is served at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// URL prefix of the student routes
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            base_path: default_base_path(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_base_path() -> String {
    "/api/v1".to_owned()
}
