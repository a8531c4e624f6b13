use crate::expression::ReversedListExpression;
use crate::value::Value;

use super::Builder;

/// ` GROUP BY columns` or ` GROUP BY ROLLUP(columns)`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupClause {
    exp: ReversedListExpression,
    rollup: bool,
}

impl GroupClause {
    pub fn append(&mut self, column: impl Into<Value>, order: impl Into<Value>) {
        self.exp.append(column, order);
    }

    pub fn set_rollup(&mut self) {
        self.rollup = true;
    }

    pub fn is_empty(&self) -> bool {
        self.exp.is_empty()
    }

    pub fn clean(&mut self) {
        *self = Self::default();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        if self.exp.is_empty() {
            return;
        }
        if self.rollup {
            builder.add_clause(" GROUP BY ROLLUP(", self.exp.sql(), ")", self.exp.params());
        } else {
            builder.add_clause(" GROUP BY ", self.exp.sql(), "", self.exp.params());
        }
    }
}

macro_rules! group_methods {
    () => {
        /// Add a GROUP BY column (or list / pairs of columns).
        pub fn group_by(self, column: impl Into<$crate::Value>) -> Self {
            self.group_by_dir(column, $crate::Value::Null)
        }

        /// Add a GROUP BY column followed by a direction: `column DESC`.
        pub fn group_by_dir(mut self, column: impl Into<$crate::Value>, order: impl Into<$crate::Value>) -> Self {
            self.group_clause.append(column, order);
            self.base.dirty();
            self
        }

        /// Wrap the GROUP BY list in `ROLLUP(...)`.
        pub fn rollup(mut self) -> Self {
            self.group_clause.set_rollup();
            self.base.dirty();
            self
        }

        pub fn clean_group(mut self) -> Self {
            self.group_clause.clean();
            self.base.dirty();
            self
        }
    };
}

pub(crate) use group_methods;
