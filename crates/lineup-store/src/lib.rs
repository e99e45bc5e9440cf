//! SQLite persistence for Lineup.
//!
//! Two stores over one database handle: [`UserStore`] for accounts and
//! [`QueueStore`] for queue tables and their entries. The connection is
//! synchronous `rusqlite` behind a mutex; async callers reach it through
//! `tokio::task::spawn_blocking`.

pub mod db;
pub mod error;
mod migrations;
pub mod queues;
pub mod users;

pub use db::Database;
pub use error::StoreError;
pub use queues::{QueueStore, TableOrder};
pub use users::UserStore;
