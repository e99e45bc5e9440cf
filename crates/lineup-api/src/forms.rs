//! Form and query payloads
//!
//! Field names match the HTML forms exactly. Text fields default to an
//! empty string so absent and blank submissions are validated the same
//! way by the handlers; serde never rejects a form outright.

use serde::Deserialize;

/// POST /register
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /login
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /queue
#[derive(Debug, Deserialize)]
pub struct NewTableForm {
    #[serde(default)]
    pub table_name: String,
}

/// POST /make/{table_id}
#[derive(Debug, Deserialize)]
pub struct NewEntryForm {
    #[serde(default)]
    pub name: String,
}

/// GET /search query string
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub searching_table: String,
}
