//! The boundary to an actual database driver.
//!
//! Statements only render `(sql, params)`; a [`StatementExecutor`] injected
//! at construction runs them. Errors returned by the executor reach the
//! caller untouched.

use crate::error::SqbResult;
use crate::param::{Param, Params};

/// A fetched row: column name to value.
pub type Row = serde_json::Map<String, Param>;

/// Runs rendered SQL with named parameters (`:p1` in the text, `p1` in the map).
pub trait StatementExecutor: Send + Sync {
    /// Execute a command and return the number of affected rows.
    fn exec(&self, sql: &str, params: &Params) -> SqbResult<u64>;

    /// Execute an INSERT and return the generated id (or value) of `sequence`.
    fn insert(&self, sql: &str, params: &Params, sequence: &str) -> SqbResult<Param>;

    /// Fetch all rows.
    fn rows(&self, sql: &str, params: &Params) -> SqbResult<Vec<Row>>;

    /// Fetch the first row.
    fn row(&self, sql: &str, params: &Params) -> SqbResult<Row>;

    /// Fetch the first column of every row.
    fn column(&self, sql: &str, params: &Params) -> SqbResult<Vec<Param>>;

    /// Fetch the first column of the first row.
    fn one(&self, sql: &str, params: &Params) -> SqbResult<Param>;

    /// Like [`exec`](Self::exec), panicking on error.
    fn must_exec(&self, sql: &str, params: &Params) -> u64 {
        self.exec(sql, params).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`insert`](Self::insert), panicking on error.
    fn must_insert(&self, sql: &str, params: &Params, sequence: &str) -> Param {
        self.insert(sql, params, sequence)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`rows`](Self::rows), panicking on error.
    fn must_rows(&self, sql: &str, params: &Params) -> Vec<Row> {
        self.rows(sql, params).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`row`](Self::row), panicking on error.
    fn must_row(&self, sql: &str, params: &Params) -> Row {
        self.row(sql, params).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`column`](Self::column), panicking on error.
    fn must_column(&self, sql: &str, params: &Params) -> Vec<Param> {
        self.column(sql, params).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Like [`one`](Self::one), panicking on error.
    fn must_one(&self, sql: &str, params: &Params) -> Param {
        self.one(sql, params).unwrap_or_else(|err| panic!("{err}"))
    }
}
