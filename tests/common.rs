use std::sync::Arc;

use appshell::client::{ApiClient, StaticTokenSource};
use appshell::config::{Config, ConfigV1};
use appshell::routes::create_router;
use appshell::state::AppState;
use appshell::store::{create_store, Store};
use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use figment::{
    providers::{Format, Yaml},
    Figment,
};

pub const TEST_CONFIG: &str = r#"
version: "1.0.0"
bind_address: 127.0.0.1:8081
logging:
  level: "debug"
  format: "json"
client:
  base_url: "https://jsonplaceholder.typicode.com/"
  timeout_ms: 10000
store:
  backend:
    type: "memory"
"#;

pub fn load_test_config() -> ConfigV1 {
    let config: Config = Figment::new()
        .merge(Yaml::string(TEST_CONFIG))
        .extract()
        .expect("Failed to parse test config YAML");

    match config {
        Config::ConfigV1(cfg) => cfg,
    }
}

pub fn build_app(config: ConfigV1) -> (Router, Arc<dyn Store>) {
    let config = Arc::new(config);
    let store = create_store(&config.store);
    let api = Arc::new(
        ApiClient::new(&config.client, Arc::new(StaticTokenSource::none()))
            .expect("client should build"),
    );

    let state = AppState {
        config,
        store: store.clone(),
        api,
    };

    (create_router(state), store)
}

pub fn build_request(path: &str, method: Method) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}
