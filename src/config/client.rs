use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// ClientConfig controls the pre-configured API client:
/// - base_url: every request path is joined onto this URL.
/// - timeout_ms: total per-request deadline; on expiry the request fails.
/// - token_file: where the bearer token lives. Written by an external
///   collaborator, read before each request. `None` means requests are
///   sent unsigned.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub token_file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://jsonplaceholder.typicode.com/".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            token_file: None,
        }
    }
}
