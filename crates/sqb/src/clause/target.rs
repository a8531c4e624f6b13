//! Leading keyword clauses naming the target table of a data-modifying
//! statement.

use crate::expression::DirectListExpression;
use crate::value::Value;

use super::Builder;

macro_rules! target_clause {
    ($(#[$meta:meta])* $name:ident { empty: $empty:literal, keyword: $keyword:literal }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            exp: DirectListExpression,
            only: bool,
        }

        impl $name {
            pub fn append(&mut self, table: impl Into<Value>, alias: impl Into<Value>) {
                self.exp.append(table, alias);
            }

            /// Prefix the table list with `ONLY`.
            pub fn set_only(&mut self) {
                self.only = true;
            }

            pub fn is_empty(&self) -> bool {
                self.exp.is_empty()
            }

            pub fn clean(&mut self) {
                *self = Self::default();
            }

            pub fn build(&self, builder: &mut impl Builder) {
                if self.exp.is_empty() {
                    builder.add_sql($empty);
                    return;
                }
                let prefix = if self.only {
                    concat!($keyword, "ONLY ")
                } else {
                    $keyword
                };
                builder.add_clause(prefix, self.exp.sql(), "", self.exp.params());
            }
        }
    };
}

target_clause!(
    /// `INSERT INTO table`; a bare `INSERT` without a table.
    InsertClause { empty: "INSERT", keyword: "INSERT INTO " }
);
target_clause!(
    /// `UPDATE [ONLY ]table`
    UpdateClause { empty: "UPDATE", keyword: "UPDATE " }
);
target_clause!(
    /// `DELETE FROM [ONLY ]table`
    DeleteClause { empty: "DELETE FROM", keyword: "DELETE FROM " }
);
target_clause!(
    /// `MERGE INTO table`
    MergeClause { empty: "MERGE ", keyword: "MERGE INTO " }
);
