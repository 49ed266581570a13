use figment::providers::{Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::client::ClientConfig;
use super::logging::LoggingConfig;
use super::store::StoreConfig;

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0, containing the bind address, API client,
/// store backend, and logging settings.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct ConfigV1 {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ConfigV1 {
    fn default() -> Self {
        ConfigV1 {
            bind_address: default_bind_address(),
            client: ClientConfig::default(),
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Load config from a YAML file named "config.yaml" in the current directory.
pub fn load_config() -> ConfigV1 {
    let figment = Figment::new().merge(Yaml::file("./config.yaml"));
    let config = match figment.extract::<Config>() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };
    match config {
        Config::ConfigV1(c) => c,
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal config carrying only the version tag must extract with
    /// every section falling back to its default.
    #[test]
    fn test_minimal_config_uses_defaults() {
        let figment = Figment::new().merge(Yaml::string("version: \"1.0.0\""));
        let Config::ConfigV1(config) = figment.extract::<Config>().expect("config should parse");

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(
            config.client.base_url,
            "https://jsonplaceholder.typicode.com/"
        );
        assert_eq!(config.client.timeout_ms, 10_000);
        assert!(config.client.token_file.is_none());
    }

    /// An unknown version tag must be rejected.
    #[test]
    fn test_unknown_version_is_rejected() {
        let figment = Figment::new().merge(Yaml::string("version: \"9.9.9\""));
        assert!(figment.extract::<Config>().is_err());
    }
}
