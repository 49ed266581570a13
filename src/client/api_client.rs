use std::sync::Arc;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use tracing::debug;

use super::token_source::TokenSource;
use crate::config::ClientConfig;

/// The shared HTTP client for the upstream REST API.
///
/// Built once with a fixed base URL and a fixed total-request timeout.
/// Every outbound request is signed with `Authorization: Bearer <token>`
/// using the token source injected at construction; when the source
/// yields no token the header is omitted entirely.
///
/// Failures (connection errors, non-UTF8 bodies, the timeout expiring)
/// propagate to the caller as `reqwest::Error` untouched. There is no
/// retry policy and no response interceptor.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
}

impl ApiClient {
    /// Builds the client from its config and a token source.
    pub fn new(
        config: &ClientConfig,
        tokens: Arc<dyn TokenSource>,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Joins a request path onto the configured base URL.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Reads the token source once and signs the request, immediately
    /// before it is dispatched.
    async fn sign(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.token().await {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => {
                debug!("No bearer token available; sending request unsigned.");
                request
            }
        }
    }

    pub async fn get(&self, path: &str) -> Result<Response, reqwest::Error> {
        self.sign(self.http.get(self.url(path))).await.send().await
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, reqwest::Error> {
        self.sign(self.http.post(self.url(path)).json(body))
            .await
            .send()
            .await
    }

    pub async fn put<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, reqwest::Error> {
        self.sign(self.http.put(self.url(path)).json(body))
            .await
            .send()
            .await
    }

    pub async fn delete(&self, path: &str) -> Result<Response, reqwest::Error> {
        self.sign(self.http.delete(self.url(path)))
            .await
            .send()
            .await
    }
}
