use crate::error::SqbResult;
use crate::executor::Row;

use super::DataFetching;

/// A statement whose OFFSET / LIMIT can be set to a page window.
pub trait Paginate: DataFetching {
    /// Set `LIMIT size OFFSET page * size` in place. The offset saturates
    /// at `i64::MAX`.
    fn set_page(&mut self, page: i64, size: i64);
}

/// Row-by-row iterator that re-queries one page at a time.
///
/// Iteration ends after a page shorter than the page size, or after the
/// first error, which is yielded once. With a non-positive size only one
/// query is run.
pub struct Pages<'a, S: Paginate> {
    statement: &'a mut S,
    size: i64,
    page: i64,
    rows: std::vec::IntoIter<Row>,
    last_count: Option<usize>,
    done: bool,
}

impl<'a, S: Paginate> Pages<'a, S> {
    pub fn new(statement: &'a mut S, size: i64, page: i64) -> Self {
        Self {
            statement,
            size,
            page,
            rows: Vec::new().into_iter(),
            last_count: None,
            done: false,
        }
    }
}

impl<S: Paginate> Iterator for Pages<'_, S> {
    type Item = SqbResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            if let Some(row) = self.rows.next() {
                return Some(Ok(row));
            }
            if let Some(count) = self.last_count {
                if count == 0 || self.size <= 0 || (count as i64) < self.size {
                    self.done = true;
                    return None;
                }
            }
            self.statement.set_page(self.page, self.size);
            self.page += 1;
            match self.statement.rows() {
                Ok(rows) => {
                    self.last_count = Some(rows.len());
                    self.rows = rows.into_iter();
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

/// Page-by-page iterator yielding whole row batches.
///
/// Stops after a batch shorter than the page size, an empty batch, or the
/// first error. With a non-positive size only one query is run.
pub struct Batches<'a, S: Paginate> {
    statement: &'a mut S,
    size: i64,
    page: i64,
    done: bool,
}

impl<'a, S: Paginate> Batches<'a, S> {
    pub fn new(statement: &'a mut S, size: i64, page: i64) -> Self {
        Self {
            statement,
            size,
            page,
            done: false,
        }
    }
}

impl<S: Paginate> Iterator for Batches<'_, S> {
    type Item = SqbResult<Vec<Row>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.statement.set_page(self.page, self.size);
        match self.statement.rows() {
            Ok(rows) => {
                if rows.is_empty() {
                    self.done = true;
                    return None;
                }
                if self.size <= 0 || (rows.len() as i64) < self.size {
                    self.done = true;
                }
                self.page += 1;
                Some(Ok(rows))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Select-only fetching helpers over the `select_clause`, `limit_clause`,
/// `offset_clause`, `order_clause` and `group_clause` fields.
///
/// The temporary clause swaps are always undone, and the statement is left
/// dirty so the next build reflects the restored clauses.
macro_rules! select_fetching_methods {
    () => {
        // ==================== FETCHING ====================

        /// Set `LIMIT size OFFSET page * size`.
        pub fn paginate(mut self, page: i64, size: i64) -> Self {
            $crate::Paginate::set_page(&mut self, page, size);
            self
        }

        /// Fetch one column, temporarily replacing the select list.
        /// An empty name fetches the first selected column.
        pub fn column_of(&mut self, column: &str) -> $crate::SqbResult<Vec<$crate::Param>> {
            if column.is_empty() {
                return $crate::DataFetching::column(self);
            }
            let previous = std::mem::take(&mut self.select_clause);
            self.select_clause.append(column, $crate::Value::Null);
            self.base.dirty();
            let result = $crate::DataFetching::column(self);
            self.select_clause = previous;
            self.base.dirty();
            result
        }

        /// Fetch one value, temporarily replacing the select list.
        /// An empty name fetches the first selected column.
        pub fn one_of(&mut self, column: &str) -> $crate::SqbResult<$crate::Param> {
            if column.is_empty() {
                return $crate::DataFetching::one(self);
            }
            let previous = std::mem::take(&mut self.select_clause);
            self.select_clause.append(column, $crate::Value::Null);
            self.base.dirty();
            let result = $crate::DataFetching::one(self);
            self.select_clause = previous;
            self.base.dirty();
            result
        }

        /// `COUNT(column)` ignoring LIMIT, OFFSET, ORDER BY and GROUP BY.
        pub fn count(&mut self, column: &str) -> $crate::SqbResult<i64> {
            let limit = std::mem::take(&mut self.limit_clause);
            let offset = std::mem::take(&mut self.offset_clause);
            let order = std::mem::take(&mut self.order_clause);
            let group = std::mem::take(&mut self.group_clause);
            self.base.dirty();
            let result = self.count_with_non_conditional_clauses(column);
            self.limit_clause = limit;
            self.offset_clause = offset;
            self.order_clause = order;
            self.group_clause = group;
            self.base.dirty();
            result
        }

        /// `COUNT(column)` with every clause left in place.
        pub fn count_with_non_conditional_clauses(&mut self, column: &str) -> $crate::SqbResult<i64> {
            let count = self.one_of(&format!("COUNT({column})"))?;
            $crate::to_int64(&count)
        }

        pub fn must_column_of(&mut self, column: &str) -> Vec<$crate::Param> {
            self.column_of(column).unwrap_or_else(|err| panic!("{err}"))
        }

        pub fn must_one_of(&mut self, column: &str) -> $crate::Param {
            self.one_of(column).unwrap_or_else(|err| panic!("{err}"))
        }

        pub fn must_count(&mut self, column: &str) -> i64 {
            self.count(column).unwrap_or_else(|err| panic!("{err}"))
        }

        pub fn must_count_with_non_conditional_clauses(&mut self, column: &str) -> i64 {
            self.count_with_non_conditional_clauses(column)
                .unwrap_or_else(|err| panic!("{err}"))
        }

        /// Iterate rows page by page, starting at `page`.
        pub fn pages(&mut self, size: i64, page: i64) -> $crate::Pages<'_, Self> {
            $crate::Pages::new(self, size, page)
        }

        /// Iterate row batches of `size`, starting at `page`.
        pub fn batches(&mut self, size: i64, page: i64) -> $crate::Batches<'_, Self> {
            $crate::Batches::new(self, size, page)
        }
    };
}

pub(crate) use select_fetching_methods;
