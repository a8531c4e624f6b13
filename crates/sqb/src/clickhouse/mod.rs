//! ClickHouse statements.
//!
//! The SELECT statement adds column transformers, `PREWHERE`, `QUALIFY`,
//! `SAMPLE`, `LIMIT ... BY`, `FINAL` and the ClickHouse join kinds
//! (`ARRAY`, `SEMI`, `ANTI`, `ANY`, `ASOF`, `PASTE`). The INSERT statement
//! supports `SETTINGS`, `FORMAT VALUES` and `FROM INFILE`.
//!
//! ```ignore
//! use sqb::clickhouse;
//!
//! let mut st = clickhouse::select()
//!     .select("s")
//!     .from("array_test")
//!     .array_join("arr")
//!     .settings("max_threads = 8");
//! assert_eq!(st.to_sql(), "SELECT s FROM array_test ARRAY JOIN arr SETTINGS max_threads = 8");
//! ```

mod clause;
mod insert;
mod select;

pub use clause::{
    ApplyClause, ExceptClause, FormatClause, IntersectClause, IntoOutfileClause, PrewhereClause,
    QualifyClause, ReplaceClause, SampleClause, SettingsClause,
};
pub use insert::InsertStmt;
pub use select::SelectStmt;

use crate::value::Value;

/// Create an empty SELECT statement.
pub fn select() -> SelectStmt {
    SelectStmt::new()
}

/// Create an INSERT statement targeting `table`.
pub fn insert_into(table: impl Into<Value>) -> InsertStmt {
    InsertStmt::new().into(table)
}
