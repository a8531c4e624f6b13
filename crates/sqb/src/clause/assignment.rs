use crate::expression::AssignmentExpression;
use crate::value::Value;

use super::Builder;

/// ` SET col = value, ...`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssignmentClause {
    exp: AssignmentExpression,
}

impl AssignmentClause {
    pub fn append(&mut self, assignment: impl Into<Value>) {
        self.exp.append(assignment);
    }

    pub fn append_value(&mut self, column: impl Into<Value>, value: impl Into<Value>) {
        self.exp.append_value(column, value);
    }

    pub fn is_empty(&self) -> bool {
        self.exp.is_empty()
    }

    pub fn clean(&mut self) {
        self.exp.clean();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        if self.exp.is_not_empty() {
            builder.add_clause(" SET ", self.exp.sql(), "", self.exp.params());
        }
    }
}

macro_rules! assignment_methods {
    () => {
        /// Add `column = value`. Scalars are bound, raw fragments and
        /// sub-queries are inlined, `Value::Null` is the literal `NULL`.
        pub fn assign(mut self, column: impl Into<$crate::Value>, value: impl Into<$crate::Value>) -> Self {
            self.assignment_clause.append_value(column, value);
            self.base.dirty();
            self
        }

        /// Add pre-formed assignments: raw text, a list of them, or
        /// `column => value` pairs.
        pub fn set(mut self, assignments: impl Into<$crate::Value>) -> Self {
            self.assignment_clause.append(assignments);
            self.base.dirty();
            self
        }

        pub fn clean_assignment(mut self) -> Self {
            self.assignment_clause.clean();
            self.base.dirty();
            self
        }
    };
}

pub(crate) use assignment_methods;
