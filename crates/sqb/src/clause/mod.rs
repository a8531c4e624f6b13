//! Clause layer: one type per SQL keyword section.
//!
//! A clause owns its expression state and knows how to render itself into a
//! [`Builder`] (the owning statement). Statements expose the clause
//! vocabulary as fluent methods generated by the `*_methods!` macros in
//! this module; every generated mutator marks the statement dirty.
//!
//! | Clause | Renders |
//! |---|---|
//! | [`WithClause`] | `WITH a AS (...) ` |
//! | [`SelectClause`] | `SELECT [DISTINCT ]cols` / `SELECT *` / `SELECT ALL` |
//! | [`FromClause`] | ` FROM tables[ FINAL]` |
//! | [`JoinClause`] | ` INNER JOIN t ON ...` |
//! | [`WhereClause`] / [`HavingClause`] / [`OnClause`] | ` WHERE cond` |
//! | [`GroupClause`] / [`OrderClause`] | ` GROUP BY c` / ` ORDER BY c DESC` |
//! | [`LimitClause`] / [`OffsetClause`] | ` LIMIT n` / ` OFFSET n` |
//! | [`UnionClause`] | `(q1) UNION (q2)` |
//! | [`LockingClause`] | ` FOR UPDATE OF t NOWAIT` |

use std::sync::Arc;

use crate::executor::StatementExecutor;
use crate::param::Params;

mod assignment;
mod condition;
mod from;
mod group;
mod join;
mod limit;
mod list;
mod locking;
mod order;
mod select;
mod target;
mod union;
mod value_list;
mod with;

pub use assignment::AssignmentClause;
pub use condition::{HavingClause, OnClause, WhereClause};
pub use from::FromClause;
pub use group::GroupClause;
pub use join::JoinClause;
pub use limit::{LimitClause, OffsetClause};
pub use list::{ColumnsClause, ReturningClause, UsingClause};
pub use locking::LockingClause;
pub use order::OrderClause;
pub use select::SelectClause;
pub use target::{DeleteClause, InsertClause, MergeClause, UpdateClause};
pub use union::UnionClause;
pub use value_list::{ValueListClause, ValuesClause};
pub use with::WithClause;

pub(crate) use assignment::assignment_methods;
pub(crate) use condition::{condition_methods, having_methods, where_methods};
pub(crate) use from::from_methods;
pub(crate) use group::group_methods;
pub(crate) use join::join_methods;
pub(crate) use limit::{limit_methods, offset_methods};
pub(crate) use list::{list_clause, list_methods};
pub(crate) use locking::locking_methods;
pub(crate) use order::order_methods;
pub(crate) use select::select_methods;
pub(crate) use union::union_methods;
pub(crate) use value_list::{column_keys, value_list_methods};
pub(crate) use with::with_methods;

/// The capability a clause needs from its owning statement.
pub trait Builder {
    /// Append rendered SQL text.
    fn add_sql(&mut self, sql: &str);

    /// Merge parameters referenced by the appended text.
    fn add_params(&mut self, params: &Params);

    /// Invalidate the cached rendering.
    fn dirty(&mut self);

    /// The executor the statement runs on, if any.
    fn executor(&self) -> Option<&Arc<dyn StatementExecutor>>;

    /// Append `prefix`, `sql`, `suffix` and bubble `params`.
    fn add_clause(&mut self, prefix: &str, sql: &str, suffix: &str, params: &Params) {
        self.add_params(params);
        self.add_sql(prefix);
        self.add_sql(sql);
        self.add_sql(suffix);
    }
}
