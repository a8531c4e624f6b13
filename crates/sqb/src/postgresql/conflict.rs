use crate::clause::Builder;
use crate::expression::{
    AssignmentExpression, ColumnListExpression, ConditionalExpression, Connector, IntoPredicate,
    Predicate,
};
use crate::value::Value;

/// Which predicate a bare `where` call extends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum PredicateTarget {
    #[default]
    Index,
    Assignment,
}

/// ` ON CONFLICT[ (cols)][ WHERE pred][ ON CONSTRAINT c] DO NOTHING | DO UPDATE SET ...[ WHERE pred]`
///
/// Conditions added right after the conflict target narrow the arbiter
/// index; conditions added after an assignment filter the update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConflictClause {
    enabled: bool,
    index_column: ColumnListExpression,
    index_predicate: ConditionalExpression,
    constraint: String,
    assignment: AssignmentExpression,
    assignment_predicate: ConditionalExpression,
    target: PredicateTarget,
}

impl ConflictClause {
    /// Enable the clause and add an index column; `Value::Null` adds none.
    pub fn append_index(&mut self, column: Value) {
        self.enabled = true;
        if !column.is_null() {
            self.index_column.append(column, Value::Null);
        }
        self.target = PredicateTarget::Index;
    }

    pub fn append_index_predicate(&mut self, predicate: impl IntoPredicate) {
        self.enabled = true;
        merge_predicate(&mut self.index_predicate, predicate.into_predicate());
        self.target = PredicateTarget::Index;
    }

    pub fn set_constraint(&mut self, constraint: &str) {
        self.enabled = true;
        self.constraint = constraint.to_string();
    }

    /// Drop every assignment, so the clause renders `DO NOTHING`.
    pub fn do_nothing(&mut self) {
        self.enabled = true;
        self.assignment.clean();
        self.assignment_predicate.clean();
    }

    pub fn append_assignment(&mut self, assignment: Value) {
        self.enabled = true;
        self.assignment.append(assignment);
        self.target = PredicateTarget::Assignment;
    }

    pub fn append_assignment_value(&mut self, column: Value, value: Value) {
        self.enabled = true;
        self.assignment.append_value(column, value);
        self.target = PredicateTarget::Assignment;
    }

    pub fn append_assignment_predicate(&mut self, predicate: impl IntoPredicate) {
        merge_predicate(&mut self.assignment_predicate, predicate.into_predicate());
        self.target = PredicateTarget::Assignment;
    }

    /// Extend whichever predicate the last call targeted.
    pub fn append_predicate(&mut self, predicate: impl IntoPredicate, connector: Connector) {
        self.enabled = true;
        match self.target {
            PredicateTarget::Index => self.index_predicate.append(predicate, connector),
            PredicateTarget::Assignment => self.assignment_predicate.append(predicate, connector),
        };
    }

    pub fn is_empty(&self) -> bool {
        !self.enabled
    }

    pub fn clean(&mut self) {
        *self = Self::default();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        if !self.enabled {
            return;
        }
        builder.add_sql(" ON CONFLICT");
        if self.index_column.is_not_empty() {
            builder.add_clause(" (", self.index_column.sql(), ")", self.index_column.params());
        }
        if self.index_predicate.is_not_empty() {
            builder.add_clause(
                " WHERE ",
                self.index_predicate.sql(),
                "",
                self.index_predicate.params(),
            );
        }
        if !self.constraint.is_empty() {
            builder.add_sql(" ON CONSTRAINT ");
            builder.add_sql(&self.constraint);
        }
        if self.assignment.is_empty() {
            builder.add_sql(" DO NOTHING");
            return;
        }
        builder.add_clause(
            " DO UPDATE SET ",
            self.assignment.sql(),
            "",
            self.assignment.params(),
        );
        if self.assignment_predicate.is_not_empty() {
            builder.add_clause(
                " WHERE ",
                self.assignment_predicate.sql(),
                "",
                self.assignment_predicate.params(),
            );
        }
    }
}

/// A condition group given to an empty predicate is adopted as-is, without
/// the parentheses it would get when nested.
fn merge_predicate(target: &mut ConditionalExpression, predicate: Predicate) {
    match predicate {
        Predicate::Single(Value::Condition(group)) if target.is_empty() => *target = group,
        other => {
            target.append(other, Connector::And);
        }
    }
}
