use crate::expression::JoinExpression;
use crate::value::Value;

use super::Builder;

/// Join chain following the FROM list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JoinClause {
    exp: JoinExpression,
}

impl JoinClause {
    pub fn append(
        &mut self,
        join_type: &str,
        table: impl Into<Value>,
        alias: impl Into<Value>,
        condition: impl Into<Value>,
    ) {
        self.exp.append(join_type, table, alias, condition);
    }

    pub fn is_empty(&self) -> bool {
        self.exp.is_empty()
    }

    pub fn clean(&mut self) {
        self.exp.clean();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        if self.exp.is_not_empty() {
            builder.add_clause(" ", self.exp.sql(), "", self.exp.params());
        }
    }
}

/// Generate `<kind>(table, condition)` and `<kind>_as(table, alias, condition)`
/// pairs for the given join keywords.
macro_rules! join_methods {
    () => {
        // ==================== JOIN ====================

        /// Add a join of an arbitrary type.
        ///
        /// Text, raw and condition-group conditions render as `ON ...`;
        /// a column list renders as `USING (...)`.
        pub fn join(
            mut self,
            join_type: &str,
            table: impl Into<$crate::Value>,
            alias: impl Into<$crate::Value>,
            condition: impl Into<$crate::Value>,
        ) -> Self {
            self.join_clause.append(join_type, table, alias, condition);
            self.base.dirty();
            self
        }

        /// Add `CROSS JOIN table`.
        pub fn cross_join(self, table: impl Into<$crate::Value>) -> Self {
            self.join("CROSS JOIN", table, $crate::Value::Null, $crate::Value::Null)
        }

        pub fn clean_join(mut self) -> Self {
            self.join_clause.clean();
            self.base.dirty();
            self
        }

        $crate::clause::join_methods! {
            inner_join, inner_join_as => "INNER JOIN";
            left_join, left_join_as => "LEFT JOIN";
            right_join, right_join_as => "RIGHT JOIN";
            left_outer_join, left_outer_join_as => "LEFT OUTER JOIN";
            right_outer_join, right_outer_join_as => "RIGHT OUTER JOIN";
            natural_inner_join, natural_inner_join_as => "NATURAL INNER JOIN";
            natural_left_join, natural_left_join_as => "NATURAL LEFT JOIN";
            natural_right_join, natural_right_join_as => "NATURAL RIGHT JOIN";
            natural_left_outer_join, natural_left_outer_join_as => "NATURAL LEFT OUTER JOIN";
            natural_right_outer_join, natural_right_outer_join_as => "NATURAL RIGHT OUTER JOIN";
        }
    };
    ($($method:ident, $method_as:ident => $join_type:literal;)*) => {
        $(
            #[doc = concat!("Add `", $join_type, " table`. Pass `Value::Null` for no condition.")]
            pub fn $method(
                self,
                table: impl Into<$crate::Value>,
                condition: impl Into<$crate::Value>,
            ) -> Self {
                self.join($join_type, table, $crate::Value::Null, condition)
            }

            #[doc = concat!("Add `", $join_type, " table alias`.")]
            pub fn $method_as(
                self,
                table: impl Into<$crate::Value>,
                alias: impl Into<$crate::Value>,
                condition: impl Into<$crate::Value>,
            ) -> Self {
                self.join($join_type, table, alias, condition)
            }
        )*
    };
}

pub(crate) use join_methods;
