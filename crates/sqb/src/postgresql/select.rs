use crate::clause::{
    FromClause, GroupClause, HavingClause, JoinClause, LimitClause, LockingClause,
    OffsetClause, OrderClause, SelectClause, UnionClause, WhereClause, WithClause,
};
use crate::clause::{
    from_methods, group_methods, having_methods, join_methods, limit_methods, locking_methods,
    offset_methods, order_methods, select_methods, union_methods, where_methods, with_methods,
};
use crate::execution::{DataFetching, Paginate, select_fetching_methods};
use crate::statement::{BaseStatement, impl_statement};

/// PostgreSQL `SELECT`.
///
/// Once a union method is called the statement renders only the union
/// chain followed by ORDER BY, LIMIT and OFFSET.
#[derive(Clone, Debug, Default)]
pub struct SelectStmt {
    base: BaseStatement,
    union_clause: UnionClause,
    with_clause: WithClause,
    select_clause: SelectClause,
    from_clause: FromClause,
    join_clause: JoinClause,
    where_clause: WhereClause,
    group_clause: GroupClause,
    having_clause: HavingClause,
    order_clause: OrderClause,
    limit_clause: LimitClause,
    offset_clause: OffsetClause,
    locking_clause: LockingClause,
}

impl_statement!(SelectStmt);

impl SelectStmt {
    with_methods!();
    select_methods!();
    from_methods!(from, from_as, clean_from);
    join_methods!();
    join_methods! {
        full_join, full_join_as => "FULL JOIN";
        full_outer_join, full_outer_join_as => "FULL OUTER JOIN";
        natural_full_join, natural_full_join_as => "NATURAL FULL JOIN";
        natural_full_outer_join, natural_full_outer_join_as => "NATURAL FULL OUTER JOIN";
    }
    where_methods!();
    group_methods!();
    having_methods!();
    order_methods!();
    limit_methods!();
    offset_methods!();
    union_methods!();

    /// `(self) INTERSECT (query)`
    pub fn intersect(self, query: impl Into<crate::Query>) -> Self {
        self.union_type("INTERSECT", query)
    }

    /// `(self) INTERSECT ALL (query)`
    pub fn intersect_all(self, query: impl Into<crate::Query>) -> Self {
        self.union_type("INTERSECT ALL", query)
    }

    /// `(self) EXCEPT (query)`
    pub fn except(self, query: impl Into<crate::Query>) -> Self {
        self.union_type("EXCEPT", query)
    }

    /// `(self) EXCEPT ALL (query)`
    pub fn except_all(self, query: impl Into<crate::Query>) -> Self {
        self.union_type("EXCEPT ALL", query)
    }

    // ==================== LOCKING ====================

    locking_methods! {
        for_update, for_update_of => "UPDATE";
        for_no_key_update, for_no_key_update_of => "NO KEY UPDATE";
        for_share, for_share_of => "SHARE";
        for_key_share, for_key_share_of => "KEY SHARE";
    }

    select_fetching_methods!();

    fn render_clauses(&mut self) {
        if self.union_clause.is_union() {
            self.union_clause.build(&mut self.base);
            self.order_clause.build(&mut self.base);
            self.limit_clause.build(&mut self.base);
            self.offset_clause.build(&mut self.base);
            return;
        }
        self.with_clause.build(&mut self.base);
        self.select_clause.build(&mut self.base);
        self.from_clause.build(&mut self.base);
        self.join_clause.build(&mut self.base);
        self.where_clause.build(&mut self.base);
        self.group_clause.build(&mut self.base);
        self.having_clause.build(&mut self.base);
        self.order_clause.build(&mut self.base);
        self.limit_clause.build(&mut self.base);
        self.offset_clause.build(&mut self.base);
        self.locking_clause.build(&mut self.base);
    }
}

impl DataFetching for SelectStmt {}

impl Paginate for SelectStmt {
    fn set_page(&mut self, page: i64, size: i64) {
        self.offset_clause.set(page.saturating_mul(size));
        self.limit_clause.set(size);
        self.base.dirty();
    }
}
