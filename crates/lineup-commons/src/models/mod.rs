//! Domain models
//!
//! The three persisted entities plus the registration payload. Rows are
//! immutable once written except for queue tables, which can be deleted
//! together with their entries.

mod queue_entry;
mod queue_table;
mod user;

pub use queue_entry::QueueEntry;
pub use queue_table::QueueTable;
pub use user::{NewUser, User};
