pub mod api_client;
pub mod token_source;

// Re-export the primary client items so code outside can do
// "use crate::client::{ApiClient, TokenSource};"
pub use api_client::ApiClient;
pub use token_source::{FileTokenSource, StaticTokenSource, TokenSource};
