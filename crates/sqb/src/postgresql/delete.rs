use crate::clause::{
    DeleteClause, ReturningClause, UsingClause, WhereClause, WithClause, list_methods,
    where_methods, with_methods,
};
use crate::execution::{DataFetching, StatementExecution};
use crate::statement::{BaseStatement, impl_statement};
use crate::value::Value;

/// PostgreSQL `DELETE`.
#[derive(Clone, Debug, Default)]
pub struct DeleteStmt {
    base: BaseStatement,
    with_clause: WithClause,
    delete_clause: DeleteClause,
    using_clause: UsingClause,
    where_clause: WhereClause,
    returning_clause: ReturningClause,
}

impl_statement!(DeleteStmt);

impl DeleteStmt {
    with_methods!();

    /// Set the table to delete from.
    pub fn from(self, table: impl Into<Value>) -> Self {
        self.from_as(table, Value::Null)
    }

    pub fn from_as(mut self, table: impl Into<Value>, alias: impl Into<Value>) -> Self {
        self.delete_clause.append(table, alias);
        self.base.dirty();
        self
    }

    /// `DELETE FROM ONLY table`: skip descendant tables.
    pub fn from_only(self, table: impl Into<Value>) -> Self {
        self.from_only_as(table, Value::Null)
    }

    pub fn from_only_as(mut self, table: impl Into<Value>, alias: impl Into<Value>) -> Self {
        self.delete_clause.set_only();
        self.from_as(table, alias)
    }

    pub fn clean_delete(mut self) -> Self {
        self.delete_clause.clean();
        self.base.dirty();
        self
    }

    list_methods!(using_clause, "USING", using, using_as, clean_using);
    where_methods!();
    list_methods!(returning_clause, "RETURNING", returning, returning_as, clean_returning);

    fn render_clauses(&mut self) {
        self.with_clause.build(&mut self.base);
        self.delete_clause.build(&mut self.base);
        self.using_clause.build(&mut self.base);
        self.where_clause.build(&mut self.base);
        self.returning_clause.build(&mut self.base);
    }
}

impl DataFetching for DeleteStmt {}

impl StatementExecution for DeleteStmt {}
