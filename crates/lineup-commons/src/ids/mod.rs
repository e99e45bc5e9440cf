//! Typed identifiers
//!
//! Newtypes over the SQLite rowid so a table id can never be passed
//! where a user id is expected.

mod entry_id;
mod table_id;
mod user_id;

pub use entry_id::EntryId;
pub use table_id::TableId;
pub use user_id::UserId;
