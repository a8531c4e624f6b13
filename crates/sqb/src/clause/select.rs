use crate::expression::DirectListExpression;
use crate::value::Value;

use super::Builder;

/// `SELECT [DISTINCT ]columns`; renders `SELECT *` when no column was added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectClause {
    exp: DirectListExpression,
    distinct: bool,
    all: bool,
}

impl SelectClause {
    pub fn append(&mut self, column: impl Into<Value>, alias: impl Into<Value>) {
        self.exp.append(column, alias);
    }

    pub fn set_distinct(&mut self) {
        self.distinct = true;
    }

    pub fn set_all(&mut self) {
        self.all = true;
    }

    pub fn is_empty(&self) -> bool {
        self.exp.is_empty()
    }

    pub fn clean(&mut self) {
        *self = Self::default();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        if self.exp.is_empty() {
            if self.all {
                builder.add_sql("SELECT ALL");
            } else if self.distinct {
                builder.add_sql("SELECT DISTINCT *");
            } else {
                builder.add_sql("SELECT *");
            }
            return;
        }
        let keyword = if self.distinct {
            "SELECT DISTINCT "
        } else {
            "SELECT "
        };
        builder.add_clause(keyword, self.exp.sql(), "", self.exp.params());
    }
}

macro_rules! select_methods {
    () => {
        // ==================== SELECT ====================

        /// Add a column (or a list / pairs / sub-query of columns).
        pub fn select(self, column: impl Into<$crate::Value>) -> Self {
            self.select_as(column, $crate::Value::Null)
        }

        /// Add a column with an alias: `column alias`.
        pub fn select_as(mut self, column: impl Into<$crate::Value>, alias: impl Into<$crate::Value>) -> Self {
            self.select_clause.append(column, alias);
            self.base.dirty();
            self
        }

        /// Render `SELECT DISTINCT`.
        pub fn distinct(mut self) -> Self {
            self.select_clause.set_distinct();
            self.base.dirty();
            self
        }

        /// Render `SELECT ALL` when no column was added.
        pub fn all(mut self) -> Self {
            self.select_clause.set_all();
            self.base.dirty();
            self
        }

        pub fn clean_select(mut self) -> Self {
            self.select_clause.clean();
            self.base.dirty();
            self
        }
    };
}

pub(crate) use select_methods;
