use serde::{Deserialize, Serialize};

/// The `User` struct represents the signed-in user record kept in the
/// global store.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
}

impl User {
    /// Construct a new User record.
    pub fn new(id: u64, username: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}
