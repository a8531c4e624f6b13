//! Statement lifecycle shared by every dialect.
//!
//! A statement is dirty until [`Statement::build`] renders its clauses, in a
//! fixed per-statement order, into the [`BaseStatement`] buffer. The result
//! is cached until the next mutator marks the statement dirty again, so
//! reading the SQL twice never allocates new parameters.

use std::fmt;
use std::sync::Arc;

use crate::clause::Builder;
use crate::error::{SqbError, SqbResult};
use crate::executor::StatementExecutor;
use crate::expression::Expression;
use crate::param::Params;
use crate::value::Query;

/// Rendered output, build state and executor handle of a statement.
#[derive(Clone, Default)]
pub struct BaseStatement {
    exp: Expression,
    built: bool,
    executor: Option<Arc<dyn StatementExecutor>>,
}

impl BaseStatement {
    pub fn new(executor: Option<Arc<dyn StatementExecutor>>) -> Self {
        Self {
            exp: Expression::default(),
            built: false,
            executor,
        }
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Mark the buffer as reflecting every clause.
    pub fn built(&mut self) {
        self.built = true;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "sqb.sql",
            sql = %self.exp.sql(),
            param_count = self.exp.params().len(),
            "statement built"
        );
    }

    /// Invalidate the cached rendering.
    pub fn dirty(&mut self) {
        self.built = false;
    }

    /// Drop the rendered SQL and parameters.
    pub fn clean(&mut self) {
        self.exp.clean();
    }

    pub fn sql(&self) -> &str {
        self.exp.sql()
    }

    pub fn params(&self) -> &Params {
        self.exp.params()
    }

    pub fn executor(&self) -> Option<&Arc<dyn StatementExecutor>> {
        self.executor.as_ref()
    }

    /// A fresh, dirty state bound to the same executor.
    pub fn copy(&self) -> Self {
        Self::new(self.executor.clone())
    }

    fn take_query(&mut self) -> Query {
        let (sql, params) = std::mem::take(&mut self.exp).into_parts();
        self.built = false;
        Query::new(sql, params)
    }
}

impl fmt::Debug for BaseStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseStatement")
            .field("sql", &self.exp.sql())
            .field("params", self.exp.params())
            .field("built", &self.built)
            .field("has_executor", &self.executor.is_some())
            .finish()
    }
}

impl Builder for BaseStatement {
    fn add_sql(&mut self, sql: &str) {
        self.exp.add_sql(sql);
    }

    fn add_params(&mut self, params: &Params) {
        self.exp.add_params(params);
    }

    fn dirty(&mut self) {
        self.built = false;
    }

    fn executor(&self) -> Option<&Arc<dyn StatementExecutor>> {
        self.executor.as_ref()
    }
}

/// Lazily built, cached SQL statement.
pub trait Statement: Sized {
    fn base(&self) -> &BaseStatement;

    fn base_mut(&mut self) -> &mut BaseStatement;

    /// Render every clause, in this statement's fixed order, into the base buffer.
    fn build_clauses(&mut self);

    /// Build unless already built.
    fn build(&mut self) -> &mut Self {
        if !self.base().is_built() {
            self.base_mut().clean();
            self.build_clauses();
            self.base_mut().built();
        }
        self
    }

    fn is_built(&self) -> bool {
        self.base().is_built()
    }

    /// Invalidate the cached rendering.
    fn dirty(&mut self) {
        self.base_mut().dirty();
    }

    /// The rendered SQL text.
    fn to_sql(&mut self) -> String {
        self.build();
        self.base().sql().to_string()
    }

    /// The parameters referenced by [`to_sql`](Self::to_sql).
    fn params(&mut self) -> Params {
        self.build();
        self.base().params().clone()
    }

    /// Render and snapshot this statement as a sub-query.
    fn into_query(mut self) -> Query {
        self.build();
        self.base_mut().take_query()
    }

    /// The executor this statement was constructed with.
    fn executor(&self) -> SqbResult<Arc<dyn StatementExecutor>> {
        self.base()
            .executor()
            .cloned()
            .ok_or(SqbError::MissingExecutor)
    }
}

/// Constructors, copy/clean and value conversions for a statement struct
/// with a `base: BaseStatement` field and a `render_clauses` method.
macro_rules! impl_statement {
    ($ty:ident) => {
        impl $ty {
            /// Create a statement without an executor.
            pub fn new() -> Self {
                Self::default()
            }

            /// Create a statement bound to an executor.
            pub fn with_executor(executor: std::sync::Arc<dyn $crate::StatementExecutor>) -> Self {
                Self {
                    base: $crate::statement::BaseStatement::new(Some(executor)),
                    ..Self::default()
                }
            }

            /// Independent copy of every clause. The copy starts dirty.
            pub fn copy(&self) -> Self {
                let mut copy = self.clone();
                copy.base = self.base.copy();
                copy
            }

            /// Reset every clause, keeping the executor.
            pub fn clean(self) -> Self {
                Self {
                    base: self.base.copy(),
                    ..Self::default()
                }
            }
        }

        impl $crate::Statement for $ty {
            fn base(&self) -> &$crate::statement::BaseStatement {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::statement::BaseStatement {
                &mut self.base
            }

            fn build_clauses(&mut self) {
                self.render_clauses();
            }
        }

        impl From<$ty> for $crate::Value {
            fn from(statement: $ty) -> Self {
                $crate::Value::Query($crate::Statement::into_query(statement))
            }
        }

        impl From<$ty> for $crate::Query {
            fn from(statement: $ty) -> Self {
                $crate::Statement::into_query(statement)
            }
        }

        impl $crate::IntoPredicate for $ty {
            fn into_predicate(self) -> $crate::Predicate {
                $crate::Predicate::Single($crate::Value::from(self))
            }
        }
    };
}

pub(crate) use impl_statement;
