//! In-memory executor serving a fixed three-row table, windowed by the
//! `LIMIT` / `OFFSET` found in the SQL text.

use std::sync::{Arc, Mutex};

use regex::Regex;
use serde_json::json;

use crate::error::{SqbError, SqbResult};
use crate::executor::{Row, StatementExecutor};
use crate::param::{Param, Params};

#[derive(Debug, Default)]
pub(crate) struct MockExecutor {
    queries: Mutex<Vec<String>>,
}

impl MockExecutor {
    pub(crate) fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every SQL text received so far, oldest first.
    pub(crate) fn queries(&self) -> Vec<String> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }

    pub(crate) fn last_query(&self) -> Option<String> {
        self.queries().pop()
    }

    fn table() -> Vec<Row> {
        let rows = json!([
            {"c1": "v1", "c2": "v2", "c3": "a"},
            {"c1": "v3", "c2": "v4", "c3": "b"},
            {"c1": "v5", "c2": "v6", "c3": "b"},
        ]);
        match rows {
            Param::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Param::Object(row) => Some(row),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn window(&self, sql: &str) -> Vec<Row> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(sql.to_string());
        }
        let (mut limit, mut offset) = (3usize, 0usize);
        let re = Regex::new(r"(LIMIT|OFFSET) (\d+)").unwrap();
        for caps in re.captures_iter(sql) {
            let n: usize = caps[2].parse().unwrap();
            match &caps[1] {
                "LIMIT" => limit = n,
                _ => offset = n,
            }
        }
        if offset > 2 {
            return Vec::new();
        }
        let top = (offset + limit).min(3);
        Self::table()[offset..top].to_vec()
    }
}

impl StatementExecutor for MockExecutor {
    fn exec(&self, sql: &str, _params: &Params) -> SqbResult<u64> {
        Ok(self.window(sql).len() as u64)
    }

    fn insert(&self, sql: &str, _params: &Params, _sequence: &str) -> SqbResult<Param> {
        self.window(sql);
        Ok(json!(1))
    }

    fn rows(&self, sql: &str, _params: &Params) -> SqbResult<Vec<Row>> {
        Ok(self.window(sql))
    }

    fn row(&self, sql: &str, _params: &Params) -> SqbResult<Row> {
        self.window(sql)
            .into_iter()
            .next()
            .ok_or_else(|| SqbError::executor("no rows in result set"))
    }

    fn column(&self, sql: &str, _params: &Params) -> SqbResult<Vec<Param>> {
        Ok(self
            .window(sql)
            .into_iter()
            .map(|mut row| row.remove("c1").unwrap_or(Param::Null))
            .collect())
    }

    fn one(&self, sql: &str, _params: &Params) -> SqbResult<Param> {
        let mut row = self.row(sql, &Params::new())?;
        if sql.contains("COUNT(") {
            return Ok(json!(3));
        }
        Ok(row.remove("c1").unwrap_or(Param::Null))
    }
}

/// Executor failing every call.
#[derive(Debug, Default)]
pub(crate) struct FailingExecutor;

impl StatementExecutor for FailingExecutor {
    fn exec(&self, _sql: &str, _params: &Params) -> SqbResult<u64> {
        Err(SqbError::executor("connection refused"))
    }

    fn insert(&self, _sql: &str, _params: &Params, _sequence: &str) -> SqbResult<Param> {
        Err(SqbError::executor("connection refused"))
    }

    fn rows(&self, _sql: &str, _params: &Params) -> SqbResult<Vec<Row>> {
        Err(SqbError::executor("connection refused"))
    }

    fn row(&self, _sql: &str, _params: &Params) -> SqbResult<Row> {
        Err(SqbError::executor("connection refused"))
    }

    fn column(&self, _sql: &str, _params: &Params) -> SqbResult<Vec<Param>> {
        Err(SqbError::executor("connection refused"))
    }

    fn one(&self, _sql: &str, _params: &Params) -> SqbResult<Param> {
        Err(SqbError::executor("connection refused"))
    }
}
