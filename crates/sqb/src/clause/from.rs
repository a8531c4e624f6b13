use crate::expression::ColumnListExpression;
use crate::value::Value;

use super::Builder;

/// ` FROM tables[ FINAL]`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FromClause {
    exp: ColumnListExpression,
    is_final: bool,
}

impl FromClause {
    pub fn append(&mut self, table: impl Into<Value>, alias: impl Into<Value>) {
        self.exp.append(table, alias);
    }

    pub fn set_final(&mut self) {
        self.is_final = true;
    }

    pub fn is_empty(&self) -> bool {
        self.exp.is_empty()
    }

    pub fn clean(&mut self) {
        *self = Self::default();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        if self.exp.is_not_empty() {
            let suffix = if self.is_final { " FINAL" } else { "" };
            builder.add_clause(" FROM ", self.exp.sql(), suffix, self.exp.params());
        }
    }
}

macro_rules! from_methods {
    ($method:ident, $method_as:ident, $clean:ident) => {
        /// Add a table (or list / pairs / sub-query of tables).
        pub fn $method(self, table: impl Into<$crate::Value>) -> Self {
            self.$method_as(table, $crate::Value::Null)
        }

        /// Add a table with an alias: `table alias`.
        pub fn $method_as(mut self, table: impl Into<$crate::Value>, alias: impl Into<$crate::Value>) -> Self {
            self.from_clause.append(table, alias);
            self.base.dirty();
            self
        }

        pub fn $clean(mut self) -> Self {
            self.from_clause.clean();
            self.base.dirty();
            self
        }
    };
}

pub(crate) use from_methods;
