use crate::expression::WithExpression;
use crate::value::Value;

use super::Builder;

/// Leading `WITH ... ` list of common table expressions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WithClause {
    exp: WithExpression,
}

impl WithClause {
    pub fn append(&mut self, recursive: bool, query: impl Into<Value>, alias: impl Into<Value>) {
        self.exp.append(recursive, query, alias);
    }

    pub fn is_empty(&self) -> bool {
        self.exp.is_empty()
    }

    pub fn clean(&mut self) {
        self.exp.clean();
    }

    /// Renders `WITH <entries> ` with a trailing space, so the main
    /// statement keyword can follow directly.
    pub fn build(&self, builder: &mut impl Builder) {
        if self.exp.is_not_empty() {
            builder.add_clause("WITH ", self.exp.sql(), " ", self.exp.params());
        }
    }
}

macro_rules! with_methods {
    () => {
        /// Add a common table expression: `alias AS (query)`.
        ///
        /// Pass [`Value::Null`](crate::Value::Null) as alias to add
        /// pre-formed text such as `"cte AS (...)"`.
        pub fn with(mut self, query: impl Into<$crate::Value>, alias: impl Into<$crate::Value>) -> Self {
            self.with_clause.append(false, query, alias);
            self.base.dirty();
            self
        }

        /// Add a `RECURSIVE` common table expression.
        pub fn with_recursive(
            mut self,
            query: impl Into<$crate::Value>,
            alias: impl Into<$crate::Value>,
        ) -> Self {
            self.with_clause.append(true, query, alias);
            self.base.dirty();
            self
        }

        pub fn clean_with(mut self) -> Self {
            self.with_clause.clean();
            self.base.dirty();
            self
        }
    };
}

pub(crate) use with_methods;
