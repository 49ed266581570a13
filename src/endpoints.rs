//! Static registry of upstream REST endpoint URLs.
//!
//! Pure string construction over a fixed base: nothing here performs a
//! request or validates an identifier. Callers pass the produced URL to
//! the API client.

use std::fmt::Display;

/// Base for every registered endpoint. Distinct from the API client's
/// base URL.
pub const BASE_URL: &str = "https://api.example.com";

pub mod auth {
    use super::BASE_URL;

    pub fn login() -> String {
        format!("{}/auth/login", BASE_URL)
    }

    pub fn register() -> String {
        format!("{}/auth/register", BASE_URL)
    }

    pub fn profile() -> String {
        format!("{}/auth/profile", BASE_URL)
    }
}

pub mod users {
    use super::{Display, BASE_URL};

    pub fn get_all() -> String {
        format!("{}/users", BASE_URL)
    }

    pub fn get_by_id(id: impl Display) -> String {
        format!("{}/users/{}", BASE_URL, id)
    }

    pub fn create() -> String {
        format!("{}/users", BASE_URL)
    }

    pub fn update(id: impl Display) -> String {
        format!("{}/users/{}", BASE_URL, id)
    }

    pub fn delete(id: impl Display) -> String {
        format!("{}/users/{}", BASE_URL, id)
    }
}

pub mod customers {
    use super::{Display, BASE_URL};

    pub fn get_all() -> String {
        format!("{}/customers", BASE_URL)
    }

    pub fn get_by_id(id: impl Display) -> String {
        format!("{}/customers/{}", BASE_URL, id)
    }
}
