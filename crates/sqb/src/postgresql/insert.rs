use crate::clause::{
    ColumnsClause, InsertClause, ReturningClause, ValueListClause, WithClause, list_methods,
    value_list_methods, with_methods,
};
use crate::error::SqbResult;
use crate::execution::{DataFetching, log_call};
use crate::expression::{Connector, IntoPredicate};
use crate::param::Param;
use crate::statement::{BaseStatement, Statement, impl_statement};
use crate::value::Value;

use super::ConflictClause;

/// PostgreSQL `INSERT`.
///
/// Without values or a source query the statement inserts `DEFAULT VALUES`.
#[derive(Clone, Debug, Default)]
pub struct InsertStmt {
    base: BaseStatement,
    with_clause: WithClause,
    insert_clause: InsertClause,
    columns_clause: ColumnsClause,
    value_list_clause: ValueListClause,
    conflict_clause: ConflictClause,
    returning_clause: ReturningClause,
}

impl_statement!(InsertStmt);

impl InsertStmt {
    with_methods!();

    /// Set the target table.
    pub fn into(self, table: impl Into<Value>) -> Self {
        self.into_as(table, Value::Null)
    }

    /// Set the target table with an alias, e.g. `"AS t"` or `"t"`.
    pub fn into_as(mut self, table: impl Into<Value>, alias: impl Into<Value>) -> Self {
        self.insert_clause.append(table, alias);
        self.base.dirty();
        self
    }

    pub fn clean_insert(mut self) -> Self {
        self.insert_clause.clean();
        self.base.dirty();
        self
    }

    list_methods!(columns_clause, "column", columns, columns_as, clean_columns);
    value_list_methods!();

    // ==================== ON CONFLICT ====================

    /// Add a conflict target column (or list of columns).
    /// `Value::Null` renders a bare `ON CONFLICT`.
    pub fn on_conflict(mut self, index_column: impl Into<Value>) -> Self {
        self.conflict_clause.append_index(index_column.into());
        self.base.dirty();
        self
    }

    /// Add a conflict target column with an index predicate.
    pub fn on_conflict_where(
        mut self,
        index_column: impl Into<Value>,
        predicate: impl IntoPredicate,
    ) -> Self {
        self.conflict_clause.append_index(index_column.into());
        self.conflict_clause.append_index_predicate(predicate);
        self.base.dirty();
        self
    }

    /// `ON CONFLICT[ (index_column)] DO NOTHING`
    pub fn on_conflict_do_nothing(self, index_column: impl Into<Value>) -> Self {
        self.on_conflict(index_column).do_nothing()
    }

    /// `ON CONFLICT (index_column) DO UPDATE SET column = value`
    pub fn on_conflict_do_update(
        self,
        index_column: impl Into<Value>,
        column: impl Into<Value>,
        value: impl Into<Value>,
    ) -> Self {
        self.on_conflict(index_column).do_update(column, value)
    }

    pub fn on_constraint(mut self, constraint: &str) -> Self {
        self.conflict_clause.set_constraint(constraint);
        self.base.dirty();
        self
    }

    pub fn do_nothing(mut self) -> Self {
        self.conflict_clause.do_nothing();
        self.base.dirty();
        self
    }

    /// Add `column = value` to `DO UPDATE SET`.
    pub fn do_update(mut self, column: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.conflict_clause
            .append_assignment_value(column.into(), value.into());
        self.base.dirty();
        self
    }

    /// Add pre-formed assignments (text, a list, or pairs) to `DO UPDATE SET`.
    pub fn do_update_set(mut self, assignments: impl Into<Value>) -> Self {
        self.conflict_clause.append_assignment(assignments.into());
        self.base.dirty();
        self
    }

    /// Add `column = value` to `DO UPDATE SET` and filter the update with
    /// `predicate`.
    pub fn do_update_where(
        mut self,
        column: impl Into<Value>,
        value: impl Into<Value>,
        predicate: impl IntoPredicate,
    ) -> Self {
        let value = value.into();
        if value.is_null() {
            self.conflict_clause.append_assignment(column.into());
        } else {
            self.conflict_clause
                .append_assignment_value(column.into(), value);
        }
        self.conflict_clause.append_assignment_predicate(predicate);
        self.base.dirty();
        self
    }

    /// Extend the predicate of the last conflict call with AND.
    pub fn r#where(mut self, predicate: impl IntoPredicate) -> Self {
        self.conflict_clause.append_predicate(predicate, Connector::And);
        self.base.dirty();
        self
    }

    pub fn and_where(self, predicate: impl IntoPredicate) -> Self {
        self.r#where(predicate)
    }

    /// Extend the predicate of the last conflict call with OR.
    pub fn or_where(mut self, predicate: impl IntoPredicate) -> Self {
        self.conflict_clause.append_predicate(predicate, Connector::Or);
        self.base.dirty();
        self
    }

    pub fn clean_conflict(mut self) -> Self {
        self.conflict_clause.clean();
        self.base.dirty();
        self
    }

    list_methods!(returning_clause, "RETURNING", returning, returning_as, clean_returning);

    // ==================== EXECUTION ====================

    /// Run the insert and return the value generated for `sequence`.
    pub fn exec(&mut self, sequence: &str) -> SqbResult<Param> {
        let executor = self.executor()?;
        self.build();
        log_call("insert", &self.base);
        executor.insert(self.base.sql(), self.base.params(), sequence)
    }

    pub fn must_exec(&mut self, sequence: &str) -> Param {
        self.exec(sequence).unwrap_or_else(|err| panic!("{err}"))
    }

    fn render_clauses(&mut self) {
        self.with_clause.build(&mut self.base);
        self.insert_clause.build(&mut self.base);
        self.columns_clause.build(&mut self.base);
        self.value_list_clause.build_postgresql(&mut self.base);
        self.conflict_clause.build(&mut self.base);
        self.returning_clause.build(&mut self.base);
    }
}

impl DataFetching for InsertStmt {}
