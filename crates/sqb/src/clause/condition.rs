use crate::expression::{ConditionalExpression, Connector, IntoPredicate};

use super::Builder;

macro_rules! condition_clause {
    ($(#[$meta:meta])* $name:ident, $keyword:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            exp: ConditionalExpression,
        }

        impl $name {
            pub fn append(&mut self, predicate: impl IntoPredicate, connector: Connector) {
                self.exp.append(predicate, connector);
            }

            pub fn is_empty(&self) -> bool {
                self.exp.is_empty()
            }

            pub fn clean(&mut self) {
                self.exp.clean();
            }

            pub fn build(&self, builder: &mut impl Builder) {
                if self.exp.is_not_empty() {
                    builder.add_clause($keyword, self.exp.sql(), "", self.exp.params());
                }
            }
        }
    };
}

condition_clause!(
    /// ` WHERE ...`
    WhereClause,
    " WHERE "
);
condition_clause!(
    /// ` HAVING ...`
    HavingClause,
    " HAVING "
);
condition_clause!(
    /// ` ON ...` of a MERGE statement.
    OnClause,
    " ON "
);

/// Fluent AND/OR methods over a condition clause field.
macro_rules! condition_methods {
    ($field:ident, $keyword:literal, $first:ident, $and:ident, $or:ident, $clean:ident) => {
        #[doc = concat!("Add a ", $keyword, " condition joined with AND.")]
        pub fn $first(mut self, predicate: impl $crate::IntoPredicate) -> Self {
            self.$field.append(predicate, $crate::Connector::And);
            self.base.dirty();
            self
        }

        #[doc = concat!("Add a ", $keyword, " condition joined with AND.")]
        pub fn $and(self, predicate: impl $crate::IntoPredicate) -> Self {
            self.$first(predicate)
        }

        #[doc = concat!("Add a ", $keyword, " condition joined with OR.")]
        pub fn $or(mut self, predicate: impl $crate::IntoPredicate) -> Self {
            self.$field.append(predicate, $crate::Connector::Or);
            self.base.dirty();
            self
        }

        #[doc = concat!("Remove every ", $keyword, " condition.")]
        pub fn $clean(mut self) -> Self {
            self.$field.clean();
            self.base.dirty();
            self
        }
    };
}

macro_rules! where_methods {
    () => {
        $crate::clause::condition_methods!(where_clause, "WHERE", r#where, and_where, or_where, clean_where);

        /// Alias for `r#where`.
        pub fn where_(self, predicate: impl $crate::IntoPredicate) -> Self {
            self.r#where(predicate)
        }
    };
}

macro_rules! having_methods {
    () => {
        $crate::clause::condition_methods!(having_clause, "HAVING", having, and_having, or_having, clean_having);
    };
}

pub(crate) use condition_methods;
pub(crate) use having_methods;
pub(crate) use where_methods;
