//! Expression layer: SQL fragments with their bound parameters.
//!
//! Every specialized expression wraps one [`Expression`] and adds an
//! `append`-style operation that renders an arbitrary [`Value`](crate::Value)
//! according to its position:
//!
//! - [`ConditionalExpression`]: AND/OR condition chains
//! - [`ColumnListExpression`] / [`ReversedListExpression`]: `name alias` and
//!   `column direction` lists
//! - [`ValueListExpression`]: `VALUES` tuples
//! - [`AssignmentExpression`]: `SET` lists
//! - [`WithExpression`]: common table expressions
//! - [`JoinExpression`]: join chains with `ON` / `USING`
//!
//! Appending is monotonic: text is only ever concatenated, with the separator
//! chosen by whether the buffer is empty.

mod assignment;
mod base;
mod condition;
mod join;
mod list;
mod value_list;
mod with;

pub use assignment::AssignmentExpression;
pub use base::{Expression, exp};
pub use condition::{ConditionalExpression, Connector, IntoPredicate, Predicate, cond};
pub use join::JoinExpression;
pub use list::{ColumnListExpression, DirectListExpression, ListExpression, ReversedListExpression};
pub use value_list::ValueListExpression;
pub use with::WithExpression;

/// Generate the read accessors shared by every expression wrapping an
/// `exp: Expression` field.
macro_rules! impl_expression_accessors {
    ($ty:ty) => {
        impl $ty {
            pub fn is_empty(&self) -> bool {
                self.exp.is_empty()
            }

            pub fn is_not_empty(&self) -> bool {
                self.exp.is_not_empty()
            }

            /// The rendered SQL text
            pub fn sql(&self) -> &str {
                self.exp.sql()
            }

            /// The parameters referenced by the SQL text
            pub fn params(&self) -> &$crate::Params {
                self.exp.params()
            }

            /// Reset to the empty state.
            pub fn clean(&mut self) {
                self.exp.clean();
            }

            /// Unwrap the underlying fragment.
            pub fn into_expression(self) -> $crate::expression::Expression {
                self.exp.into()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.exp.sql())
            }
        }
    };
}

pub(crate) use impl_expression_accessors;
