use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A wrapper for the store configuration, selecting the backend that
/// holds the global loading and session state.
#[derive(Deserialize, Serialize, Debug, Default, JsonSchema)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
}

/// The existing store backends. We differentiate them via a "type" tag in the YAML.
#[derive(Deserialize, Serialize, Debug, Default, JsonSchema)]
#[serde(tag = "type")]
pub enum StoreBackend {
    #[serde(rename = "memory")]
    #[default]
    Memory,
    // Add more variants here as needed, like:
    // #[serde(rename = "awesome")]
    // AwesomeStore(AwesomeStoreConfig),
}
