use std::collections::BTreeMap;

use crate::error::{SqbError, SqbResult};
use crate::executor::Row;
use crate::param::{Param, Params, param_text};
use crate::statement::Statement;

use super::log_call;

/// Row-returning execution plus keyed post-processing of the fetched rows.
///
/// The keyed helpers check the requested columns against the first row
/// only; an empty result set yields an empty collection.
pub trait DataFetching: Statement {
    /// Fetch all rows.
    fn rows(&mut self) -> SqbResult<Vec<Row>> {
        let executor = self.executor()?;
        self.build();
        log_call("rows", self.base());
        executor.rows(self.base().sql(), self.base().params())
    }

    /// Fetch the first row.
    fn row(&mut self) -> SqbResult<Row> {
        let executor = self.executor()?;
        self.build();
        log_call("row", self.base());
        executor.row(self.base().sql(), self.base().params())
    }

    /// Fetch the first column of every row.
    fn column(&mut self) -> SqbResult<Vec<Param>> {
        let executor = self.executor()?;
        self.build();
        log_call("column", self.base());
        executor.column(self.base().sql(), self.base().params())
    }

    /// Fetch the first column of the first row.
    fn one(&mut self) -> SqbResult<Param> {
        let executor = self.executor()?;
        self.build();
        log_call("one", self.base());
        executor.one(self.base().sql(), self.base().params())
    }

    /// Map the text of column `key` to the value of column `value`.
    fn pairs(&mut self, key: &str, value: &str) -> SqbResult<Params> {
        let rows = self.rows()?;
        let mut result = Params::new();
        if let Some(first) = rows.first() {
            ensure_key(first, key)?;
            ensure_key(first, value)?;
        }
        for mut row in rows {
            let name = row_key(&row, key);
            result.insert(name, row.remove(value).unwrap_or(Param::Null));
        }
        Ok(result)
    }

    /// Index rows by the text of column `key`, optionally dropping that
    /// column from each row.
    fn rows_by_key(&mut self, key: &str, remove_key: bool) -> SqbResult<BTreeMap<String, Row>> {
        let rows = self.rows()?;
        if let Some(first) = rows.first() {
            ensure_key(first, key)?;
        }
        let mut result = BTreeMap::new();
        for mut row in rows {
            let name = row_key(&row, key);
            if remove_key {
                row.remove(key);
            }
            result.insert(name, row);
        }
        Ok(result)
    }

    /// Group rows by the text of column `key`, optionally dropping that
    /// column from each row.
    fn rows_by_group(&mut self, key: &str, remove_key: bool) -> SqbResult<BTreeMap<String, Vec<Row>>> {
        let rows = self.rows()?;
        if let Some(first) = rows.first() {
            ensure_key(first, key)?;
        }
        let mut result: BTreeMap<String, Vec<Row>> = BTreeMap::new();
        for mut row in rows {
            let name = row_key(&row, key);
            if remove_key {
                row.remove(key);
            }
            result.entry(name).or_default().push(row);
        }
        Ok(result)
    }

    fn must_rows(&mut self) -> Vec<Row> {
        self.rows().unwrap_or_else(|err| panic!("{err}"))
    }

    fn must_row(&mut self) -> Row {
        self.row().unwrap_or_else(|err| panic!("{err}"))
    }

    fn must_column(&mut self) -> Vec<Param> {
        self.column().unwrap_or_else(|err| panic!("{err}"))
    }

    fn must_one(&mut self) -> Param {
        self.one().unwrap_or_else(|err| panic!("{err}"))
    }

    fn must_pairs(&mut self, key: &str, value: &str) -> Params {
        self.pairs(key, value).unwrap_or_else(|err| panic!("{err}"))
    }

    fn must_rows_by_key(&mut self, key: &str, remove_key: bool) -> BTreeMap<String, Row> {
        self.rows_by_key(key, remove_key)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    fn must_rows_by_group(&mut self, key: &str, remove_key: bool) -> BTreeMap<String, Vec<Row>> {
        self.rows_by_group(key, remove_key)
            .unwrap_or_else(|err| panic!("{err}"))
    }
}

fn ensure_key(row: &Row, key: &str) -> SqbResult<()> {
    if row.contains_key(key) {
        Ok(())
    } else {
        Err(SqbError::key_not_found(key))
    }
}

fn row_key(row: &Row, key: &str) -> String {
    row.get(key).map(param_text).unwrap_or_default()
}
