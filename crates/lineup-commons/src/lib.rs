//! Shared types for the Lineup workspace.
//!
//! Every crate in the workspace speaks in terms of the identifiers and
//! models defined here: typed integer ids (`UserId`, `TableId`,
//! `EntryId`) and the three persisted entities (`User`, `QueueTable`,
//! `QueueEntry`). Keeping them in one dependency-light crate lets the
//! store, auth, and API layers share vocabulary without depending on
//! each other.

pub mod ids;
pub mod models;

pub use ids::{EntryId, TableId, UserId};
pub use models::{NewUser, QueueEntry, QueueTable, User};
