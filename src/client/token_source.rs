use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

/// A TokenSource yields the bearer token that signs outbound requests.
///
/// The API client takes one of these at construction instead of reaching
/// into ambient storage, so request signing is testable in isolation.
/// `None` means "no token": the request goes out unsigned.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Option<String>;
}

/// Reads the bearer token from a file on every call.
///
/// The file is the persistent token storage written by an external
/// collaborator; it is read once per outbound request, immediately
/// before the request is dispatched. A missing or empty file means
/// no token.
pub struct FileTokenSource {
    path: PathBuf,
}

impl FileTokenSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileTokenSource { path: path.into() }
    }
}

#[async_trait]
impl TokenSource for FileTokenSource {
    async fn token(&self) -> Option<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    debug!("Token file '{}' is empty.", self.path.display());
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(e) => {
                debug!("Token file '{}' not readable: {}", self.path.display(), e);
                None
            }
        }
    }
}

/// A fixed token value. Useful for tests and for embedders that manage
/// the token themselves.
pub struct StaticTokenSource {
    token: Option<String>,
}

impl StaticTokenSource {
    pub fn new(token: impl Into<String>) -> Self {
        StaticTokenSource {
            token: Some(token.into()),
        }
    }

    /// A source that never yields a token.
    pub fn none() -> Self {
        StaticTokenSource { token: None }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn token(&self) -> Option<String> {
        self.token.clone()
    }
}
