use crate::clause::{
    AssignmentClause, FromClause, ReturningClause, UpdateClause, WhereClause, WithClause,
    assignment_methods, from_methods, list_methods, where_methods, with_methods,
};
use crate::execution::{DataFetching, StatementExecution};
use crate::statement::{BaseStatement, impl_statement};
use crate::value::Value;

/// PostgreSQL `UPDATE`.
#[derive(Clone, Debug, Default)]
pub struct UpdateStmt {
    base: BaseStatement,
    with_clause: WithClause,
    update_clause: UpdateClause,
    assignment_clause: AssignmentClause,
    from_clause: FromClause,
    where_clause: WhereClause,
    returning_clause: ReturningClause,
}

impl_statement!(UpdateStmt);

impl UpdateStmt {
    with_methods!();

    /// Set the table to update.
    pub fn table(self, table: impl Into<Value>) -> Self {
        self.table_as(table, Value::Null)
    }

    pub fn table_as(mut self, table: impl Into<Value>, alias: impl Into<Value>) -> Self {
        self.update_clause.append(table, alias);
        self.base.dirty();
        self
    }

    /// `UPDATE ONLY table`: skip descendant tables.
    pub fn only_table(self, table: impl Into<Value>) -> Self {
        self.only_table_as(table, Value::Null)
    }

    pub fn only_table_as(mut self, table: impl Into<Value>, alias: impl Into<Value>) -> Self {
        self.update_clause.set_only();
        self.table_as(table, alias)
    }

    pub fn clean_update(mut self) -> Self {
        self.update_clause.clean();
        self.base.dirty();
        self
    }

    assignment_methods!();
    from_methods!(from, from_as, clean_from);
    where_methods!();
    list_methods!(returning_clause, "RETURNING", returning, returning_as, clean_returning);

    fn render_clauses(&mut self) {
        self.with_clause.build(&mut self.base);
        self.update_clause.build(&mut self.base);
        self.assignment_clause.build(&mut self.base);
        self.from_clause.build(&mut self.base);
        self.where_clause.build(&mut self.base);
        self.returning_clause.build(&mut self.base);
    }
}

impl DataFetching for UpdateStmt {}

impl StatementExecution for UpdateStmt {}
