//! Convenient imports for typical `sqb` usage.
//!
//! Brings the lifecycle and execution traits into scope, so the provided
//! `to_sql` / `params` / `rows` / `exec` methods resolve:
//!
//! ```ignore
//! use sqb::prelude::*;
//! ```

pub use crate::{
    DataFetching, Paginate, ParameterSequence, Query, SliceMap, SqbError, SqbResult, Statement,
    StatementExecution, StatementExecutor, Value, cond, exp, list, map,
};
