use serde::{Deserialize, Serialize};

use super::user::User;

/// The authenticated session held by the global store.
///
/// Both fields are absent by default and cleared together by `logout`.
/// The token here is UI session state; it is a separate copy from the
/// token file that signs outbound API requests.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}
