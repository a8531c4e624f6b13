use crate::expression::DirectListExpression;
use crate::value::Value;

use super::Builder;

/// ` LIMIT n[ BY columns][ WITH TIES]`; a negative limit renders nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct LimitClause {
    limit: i64,
    with_ties: bool,
    by: DirectListExpression,
}

impl Default for LimitClause {
    fn default() -> Self {
        Self {
            limit: -1,
            with_ties: false,
            by: DirectListExpression::default(),
        }
    }
}

impl LimitClause {
    pub fn set(&mut self, limit: i64) {
        self.limit = limit;
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn set_with_ties(&mut self) {
        self.with_ties = true;
    }

    pub fn append_by(&mut self, column: impl Into<Value>, alias: impl Into<Value>) {
        self.by.append(column, alias);
    }

    pub fn clean(&mut self) {
        *self = Self::default();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        if self.limit < 0 {
            return;
        }
        builder.add_sql(&format!(" LIMIT {}", self.limit));
        if self.by.is_not_empty() {
            builder.add_clause(" BY ", self.by.sql(), "", self.by.params());
        }
        if self.with_ties {
            builder.add_sql(" WITH TIES");
        }
    }
}

/// ` OFFSET n`; a negative offset renders nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetClause {
    offset: i64,
}

impl Default for OffsetClause {
    fn default() -> Self {
        Self { offset: -1 }
    }
}

impl OffsetClause {
    pub fn set(&mut self, offset: i64) {
        self.offset = offset;
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn clean(&mut self) {
        *self = Self::default();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        if self.offset >= 0 {
            builder.add_sql(&format!(" OFFSET {}", self.offset));
        }
    }
}

macro_rules! limit_methods {
    () => {
        /// Set `LIMIT n`; a negative value removes it.
        pub fn limit(mut self, limit: i64) -> Self {
            self.limit_clause.set(limit);
            self.base.dirty();
            self
        }

        pub fn clean_limit(mut self) -> Self {
            self.limit_clause.clean();
            self.base.dirty();
            self
        }
    };
}

macro_rules! offset_methods {
    () => {
        /// Set `OFFSET n`; a negative value removes it.
        pub fn offset(mut self, offset: i64) -> Self {
            self.offset_clause.set(offset);
            self.base.dirty();
            self
        }

        pub fn clean_offset(mut self) -> Self {
            self.offset_clause.clean();
            self.base.dirty();
            self
        }
    };
}

pub(crate) use limit_methods;
pub(crate) use offset_methods;
