use crate::clause::{
    LimitClause, OffsetClause, OrderClause, UnionClause, ValuesClause, limit_methods,
    offset_methods, order_methods, union_methods,
};
use crate::execution::DataFetching;
use crate::statement::{BaseStatement, impl_statement};
use crate::value::Value;

/// PostgreSQL standalone `VALUES` list, usable as a query on its own, as a
/// sub-query, or as a union branch.
#[derive(Clone, Debug, Default)]
pub struct ValuesStmt {
    base: BaseStatement,
    union_clause: UnionClause,
    values_clause: ValuesClause,
    order_clause: OrderClause,
    limit_clause: LimitClause,
    offset_clause: OffsetClause,
}

impl_statement!(ValuesStmt);

impl ValuesStmt {
    /// Append rows: raw text, a list (one row), a list of lists, or pairs.
    pub fn values(mut self, values: impl Into<Value>) -> Self {
        self.values_clause.append(values);
        self.base.dirty();
        self
    }

    pub fn clean_values(mut self) -> Self {
        self.values_clause.clean();
        self.base.dirty();
        self
    }

    order_methods!();
    limit_methods!();
    offset_methods!();
    union_methods!();

    pub fn intersect(self, query: impl Into<crate::Query>) -> Self {
        self.union_type("INTERSECT", query)
    }

    pub fn intersect_all(self, query: impl Into<crate::Query>) -> Self {
        self.union_type("INTERSECT ALL", query)
    }

    pub fn except(self, query: impl Into<crate::Query>) -> Self {
        self.union_type("EXCEPT", query)
    }

    pub fn except_all(self, query: impl Into<crate::Query>) -> Self {
        self.union_type("EXCEPT ALL", query)
    }

    fn render_clauses(&mut self) {
        if self.union_clause.is_union() {
            self.union_clause.build(&mut self.base);
        } else {
            self.values_clause.build(&mut self.base);
        }
        self.order_clause.build(&mut self.base);
        self.limit_clause.build(&mut self.base);
        self.offset_clause.build(&mut self.base);
    }
}

impl DataFetching for ValuesStmt {}
