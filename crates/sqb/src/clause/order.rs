use crate::expression::ReversedListExpression;
use crate::value::Value;

use super::Builder;

/// ` ORDER BY column [direction], ...`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderClause {
    exp: ReversedListExpression,
}

impl OrderClause {
    pub fn append(&mut self, column: impl Into<Value>, order: impl Into<Value>) {
        self.exp.append(column, order);
    }

    pub fn is_empty(&self) -> bool {
        self.exp.is_empty()
    }

    pub fn clean(&mut self) {
        self.exp.clean();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        if self.exp.is_not_empty() {
            builder.add_clause(" ORDER BY ", self.exp.sql(), "", self.exp.params());
        }
    }
}

macro_rules! order_methods {
    () => {
        /// Add an ORDER BY column (or list / pairs of `column => direction`).
        pub fn order_by(self, column: impl Into<$crate::Value>) -> Self {
            self.order_by_dir(column, $crate::Value::Null)
        }

        /// Add an ORDER BY column with a direction: `column DESC`.
        pub fn order_by_dir(mut self, column: impl Into<$crate::Value>, order: impl Into<$crate::Value>) -> Self {
            self.order_clause.append(column, order);
            self.base.dirty();
            self
        }

        pub fn clean_order(mut self) -> Self {
            self.order_clause.clean();
            self.base.dirty();
            self
        }
    };
}

pub(crate) use order_methods;
