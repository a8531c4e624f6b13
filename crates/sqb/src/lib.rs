//! # sqb
//!
//! A composable SQL statement builder.
//!
//! ## Features
//!
//! - **Fragments, not strings**: statements are assembled from clauses, and every
//!   value position accepts text, raw fragments, condition groups, sub-queries,
//!   lists and ordered pairs
//! - **Named parameters**: scalars are bound as `:p1`, `:p2`, ... and collected
//!   into one parameter map, sub-queries included
//! - **Lazy, cached rendering**: a statement builds once and stays built until
//!   the next mutation
//! - **Dialects**: PostgreSQL ([`postgresql`]) and ClickHouse ([`clickhouse`])
//!   statement sets over a shared clause layer
//! - **Executor boundary**: running SQL is delegated to a [`StatementExecutor`]
//!
//! ## Building statements
//!
//! ```ignore
//! use sqb::prelude::*;
//! use sqb::postgresql::{InsertStmt, SelectStmt};
//!
//! let _seq = ParameterSequence::new().scope();
//!
//! let mut st = SelectStmt::new()
//!     .from("tb")
//!     .r#where(("col", "=", 1))
//!     .or_where(("col", "IN", SelectStmt::new().select("id").from("t2")));
//! assert_eq!(
//!     st.to_sql(),
//!     "SELECT * FROM tb WHERE col = :p1 OR col IN (SELECT id FROM t2)"
//! );
//!
//! let mut insert = InsertStmt::new().into("tb").values(map! { "c1" => "v1", "c2" => 2 });
//! assert_eq!(insert.to_sql(), "INSERT INTO tb (c1, c2) VALUES (:p2, :p3)");
//! ```
//!
//! ## Executing statements
//!
//! ```ignore
//! let db: Arc<dyn StatementExecutor> = Arc::new(MyDriver::connect(url)?);
//!
//! let mut users = SelectStmt::with_executor(db.clone())
//!     .from("users")
//!     .r#where(("status", "=", "active"));
//! let by_id = users.rows_by_key("id", false)?;
//! let total = users.count("*")?;
//! ```

pub mod clause;
pub mod clickhouse;
pub mod error;
pub mod execution;
pub mod executor;
pub mod expression;
pub mod param;
pub mod postgresql;
pub mod prelude;
pub mod statement;
pub mod value;

#[cfg(test)]
mod testing;

pub use error::{SqbError, SqbResult};
pub use execution::{Batches, DataFetching, Pages, Paginate, StatementExecution};
pub use executor::{Row, StatementExecutor};
pub use expression::{
    AssignmentExpression, ColumnListExpression, ConditionalExpression, Connector,
    DirectListExpression, Expression, IntoPredicate, JoinExpression, Predicate,
    ReversedListExpression, ValueListExpression, WithExpression, cond, exp,
};
pub use param::{Param, ParameterSequence, Params, next_parameter_name, reset_parameter_index};
pub use statement::{BaseStatement, Statement};
pub use value::{Query, SliceMap, Value, to_int64};
