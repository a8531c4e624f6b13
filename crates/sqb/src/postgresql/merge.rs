use crate::clause::{
    MergeClause, OnClause, ReturningClause, UsingClause, WithClause, condition_methods,
    list_methods, with_methods,
};
use crate::execution::{DataFetching, StatementExecution};
use crate::expression::{ConditionalExpression, IntoPredicate};
use crate::statement::{BaseStatement, Statement, impl_statement};
use crate::value::Value;

use super::{InsertStmt, MatchClause, UpdateStmt};

/// PostgreSQL `MERGE`.
///
/// ```ignore
/// let st = MergeStmt::new()
///     .into_as("target", "t")
///     .using_as("source", "s")
///     .on("t.id = s.id")
///     .when_not_matched()
///     .then_insert(InsertStmt::new().values(map! { "id" => exp("s.id") }))
///     .when_matched_and("s.deleted")
///     .then_delete();
/// ```
#[derive(Clone, Debug, Default)]
pub struct MergeStmt {
    base: BaseStatement,
    with_clause: WithClause,
    merge_clause: MergeClause,
    using_clause: UsingClause,
    on_clause: OnClause,
    match_clause: MatchClause,
    returning_clause: ReturningClause,
}

impl_statement!(MergeStmt);

impl MergeStmt {
    with_methods!();

    /// Set the target table.
    pub fn into(self, table: impl Into<Value>) -> Self {
        self.into_as(table, Value::Null)
    }

    pub fn into_as(mut self, table: impl Into<Value>, alias: impl Into<Value>) -> Self {
        self.merge_clause.append(table, alias);
        self.base.dirty();
        self
    }

    pub fn clean_merge(mut self) -> Self {
        self.merge_clause.clean();
        self.base.dirty();
        self
    }

    list_methods!(using_clause, "USING", using, using_as, clean_using);
    condition_methods!(on_clause, "ON", on, and_on, or_on, clean_on);

    // ==================== WHEN [NOT] MATCHED ====================

    fn when(mut self, matched: bool, condition: ConditionalExpression) -> Self {
        self.match_clause.when(matched, condition);
        self.base.dirty();
        self
    }

    pub fn when_matched(self) -> Self {
        self.when(true, ConditionalExpression::new())
    }

    pub fn when_matched_and(self, predicate: impl IntoPredicate) -> Self {
        self.when(true, ConditionalExpression::from_predicate(predicate))
    }

    pub fn when_not_matched(self) -> Self {
        self.when(false, ConditionalExpression::new())
    }

    pub fn when_not_matched_and(self, predicate: impl IntoPredicate) -> Self {
        self.when(false, ConditionalExpression::from_predicate(predicate))
    }

    pub fn when_matched_then_delete(self) -> Self {
        self.when_matched().then_delete()
    }

    pub fn when_matched_then_do_nothing(self) -> Self {
        self.when_matched().then_do_nothing()
    }

    pub fn when_not_matched_then_do_nothing(self) -> Self {
        self.when_not_matched().then_do_nothing()
    }

    /// Set the action of the last `WHEN` item to `DELETE`.
    pub fn then_delete(mut self) -> Self {
        self.match_clause.set_keyword("DELETE");
        self.base.dirty();
        self
    }

    /// Set the action of the last `WHEN` item to `DO NOTHING`.
    pub fn then_do_nothing(mut self) -> Self {
        self.match_clause.set_keyword("DO NOTHING");
        self.base.dirty();
        self
    }

    /// Set the action of the last `WHEN` item to an insert without a target
    /// table: `INSERT (cols) VALUES (...)`.
    pub fn then_insert(mut self, insert: InsertStmt) -> Self {
        self.match_clause.set_statement(insert.into_query());
        self.base.dirty();
        self
    }

    /// Set the action of the last `WHEN` item to an update without a target
    /// table: `UPDATE SET ...`.
    pub fn then_update(mut self, update: UpdateStmt) -> Self {
        self.match_clause.set_statement(update.into_query());
        self.base.dirty();
        self
    }

    pub fn clean_match(mut self) -> Self {
        self.match_clause.clean();
        self.base.dirty();
        self
    }

    list_methods!(returning_clause, "RETURNING", returning, returning_as, clean_returning);

    fn render_clauses(&mut self) {
        self.with_clause.build(&mut self.base);
        self.merge_clause.build(&mut self.base);
        self.using_clause.build(&mut self.base);
        self.on_clause.build(&mut self.base);
        self.match_clause.build(&mut self.base);
        self.returning_clause.build(&mut self.base);
    }
}

impl DataFetching for MergeStmt {}

impl StatementExecution for MergeStmt {}
