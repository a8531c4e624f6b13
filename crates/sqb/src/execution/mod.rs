//! Running built statements through their [`StatementExecutor`](crate::StatementExecutor).
//!
//! - [`StatementExecution`]: commands returning an affected-row count
//! - [`DataFetching`]: statements returning rows, plus keyed post-processing
//! - [`Paginate`] / [`Pages`] / [`Batches`]: page-by-page iteration of a select

mod fetching;
mod pagination;

pub use fetching::DataFetching;
pub use pagination::{Batches, Pages, Paginate};

pub(crate) use pagination::select_fetching_methods;

use crate::error::SqbResult;
use crate::statement::{BaseStatement, Statement};

/// Execution of data-modifying statements.
pub trait StatementExecution: Statement {
    /// Run the statement and return the number of affected rows.
    fn exec(&mut self) -> SqbResult<u64> {
        let executor = self.executor()?;
        self.build();
        log_call("exec", self.base());
        executor.exec(self.base().sql(), self.base().params())
    }

    /// Like [`exec`](Self::exec), panicking on error.
    fn must_exec(&mut self) -> u64 {
        self.exec().unwrap_or_else(|err| panic!("{err}"))
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn log_call(method: &'static str, base: &BaseStatement) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "sqb.sql",
        method,
        sql = %base.sql(),
        param_count = base.params().len(),
        "executing statement"
    );
}
