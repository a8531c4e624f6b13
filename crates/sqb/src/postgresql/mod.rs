//! PostgreSQL statements.
//!
//! Each statement composes the shared clauses with the PostgreSQL extras:
//! FULL joins, INTERSECT / EXCEPT unions, row-level locking, `ON CONFLICT`,
//! `MERGE ... WHEN [NOT] MATCHED` and `ONLY` targets.
//!
//! # Usage
//!
//! ```ignore
//! use sqb::postgresql;
//! use sqb::prelude::*;
//!
//! let mut st = postgresql::select()
//!     .from_as("users", "u")
//!     .left_join_as("orders", "o", "o.user_id = u.id")
//!     .r#where(("u.status", "=", "active"))
//!     .for_update();
//!
//! let mut upsert = postgresql::insert_into("users")
//!     .values(map! { "id" => 1, "name" => "alice" })
//!     .on_conflict("id")
//!     .do_update("name", exp("EXCLUDED.name"))
//!     .returning("*");
//! ```

mod conflict;
mod delete;
mod insert;
mod matching;
mod merge;
mod select;
mod update;
mod values;

pub use conflict::ConflictClause;
pub use delete::DeleteStmt;
pub use insert::InsertStmt;
pub use matching::MatchClause;
pub use merge::MergeStmt;
pub use select::SelectStmt;
pub use update::UpdateStmt;
pub use values::ValuesStmt;

use crate::value::Value;

/// Create an empty SELECT statement.
pub fn select() -> SelectStmt {
    SelectStmt::new()
}

/// Create an INSERT statement targeting `table`.
pub fn insert_into(table: impl Into<Value>) -> InsertStmt {
    InsertStmt::new().into(table)
}

/// Create an UPDATE statement for `table`.
pub fn update(table: impl Into<Value>) -> UpdateStmt {
    UpdateStmt::new().table(table)
}

/// Create a DELETE statement for `table`.
pub fn delete_from(table: impl Into<Value>) -> DeleteStmt {
    DeleteStmt::new().from(table)
}

/// Create a MERGE statement targeting `table`.
pub fn merge_into(table: impl Into<Value>) -> MergeStmt {
    MergeStmt::new().into(table)
}

/// Create a standalone VALUES statement.
pub fn values(values: impl Into<Value>) -> ValuesStmt {
    ValuesStmt::new().values(values)
}

#[cfg(test)]
mod tests;
