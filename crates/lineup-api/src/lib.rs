//! HTTP surface for Lineup.
//!
//! Request handlers, the authentication extractors, form payloads,
//! HTML view rendering and route registration. Everything here is
//! request/response glue: domain rules live in `lineup-store` and
//! `lineup-auth`.

pub mod error;
pub mod extract;
pub mod forms;
pub mod handlers;
pub mod routes;
pub mod views;

pub use error::ApiError;
pub use extract::{CurrentUser, RequireLogin};
