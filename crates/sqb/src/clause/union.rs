use crate::value::Query;

use super::Builder;

/// `(q1) UNION (q2) UNION ALL (q3) ...`
///
/// Once a statement holds a union chain it renders only the chain plus its
/// trailing ORDER BY / LIMIT / OFFSET.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnionClause {
    queries: Vec<(String, Query)>,
}

impl UnionClause {
    pub fn is_union(&self) -> bool {
        !self.queries.is_empty()
    }

    pub fn push(&mut self, union_type: &str, query: Query) {
        self.queries.push((union_type.to_string(), query));
    }

    pub fn clean(&mut self) {
        self.queries.clear();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        for (index, (union_type, query)) in self.queries.iter().enumerate() {
            if index > 0 {
                builder.add_sql(" ");
                builder.add_sql(union_type);
                builder.add_sql(" ");
            }
            builder.add_clause("(", query.sql(), ")", query.params());
        }
    }
}

/// Union methods for a query statement with a `union_clause` field.
///
/// The first call turns the statement into a union chain: its current
/// state becomes the first branch and every other clause is reset.
macro_rules! union_methods {
    () => {
        // ==================== UNION ====================

        /// Combine with another query using an arbitrary set operator.
        pub fn union_type(mut self, union_type: &str, query: impl Into<$crate::Query>) -> Self {
            if !self.union_clause.is_union() {
                let first = $crate::Statement::into_query(self.copy());
                let executor = self.base.executor().cloned();
                self = Self {
                    base: $crate::statement::BaseStatement::new(executor),
                    ..Self::default()
                };
                self.union_clause.push(union_type, first);
            }
            self.union_clause.push(union_type, query.into());
            self.base.dirty();
            self
        }

        /// `(self) UNION (query)`
        pub fn union(self, query: impl Into<$crate::Query>) -> Self {
            self.union_type("UNION", query)
        }

        /// `(self) UNION ALL (query)`
        pub fn union_all(self, query: impl Into<$crate::Query>) -> Self {
            self.union_type("UNION ALL", query)
        }

        /// Whether this statement renders as a union chain.
        pub fn is_union(&self) -> bool {
            self.union_clause.is_union()
        }
    };
}

pub(crate) use union_methods;
