use crate::expression::DirectListExpression;
use crate::value::Value;

use super::Builder;

/// ` FOR <strength>[ OF tables][ option]`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LockingClause {
    strength: String,
    option: String,
    tables: DirectListExpression,
}

impl LockingClause {
    /// Set the lock. Switching to another strength drops the tables
    /// collected for the previous one.
    pub fn set(&mut self, strength: &str, tables: Value, option: &str) {
        if strength != self.strength {
            self.tables.clean();
        }
        self.strength = strength.to_string();
        self.option = option.to_string();
        if !tables.is_null() {
            self.tables.append(tables, Value::Null);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.strength.is_empty()
    }

    pub fn clean(&mut self) {
        *self = Self::default();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        if self.strength.is_empty() {
            return;
        }
        builder.add_sql(" FOR ");
        builder.add_sql(&self.strength);
        if self.tables.is_not_empty() {
            builder.add_clause(" OF ", self.tables.sql(), "", self.tables.params());
        }
        if !self.option.is_empty() {
            builder.add_sql(" ");
            builder.add_sql(&self.option);
        }
    }
}

macro_rules! locking_methods {
    ($($method:ident, $method_of:ident => $strength:literal;)*) => {
        $(
            #[doc = concat!("Add `FOR ", $strength, "`.")]
            pub fn $method(self) -> Self {
                self.for_lock($strength, $crate::Value::Null, "")
            }

            #[doc = concat!("Add `FOR ", $strength, " OF tables option`; pass an empty option to omit it.")]
            pub fn $method_of(self, tables: impl Into<$crate::Value>, option: &str) -> Self {
                self.for_lock($strength, tables, option)
            }
        )*

        /// Add a row-level lock with an arbitrary strength.
        pub fn for_lock(mut self, strength: &str, tables: impl Into<$crate::Value>, option: &str) -> Self {
            self.locking_clause.set(strength, tables.into(), option);
            self.base.dirty();
            self
        }

        pub fn clean_lock(mut self) -> Self {
            self.locking_clause.clean();
            self.base.dirty();
            self
        }
    };
}

pub(crate) use locking_methods;
