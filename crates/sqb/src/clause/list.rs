/// Define a clause that renders one [`DirectListExpression`](crate::expression::DirectListExpression)
/// between a fixed prefix and suffix.
macro_rules! list_clause {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $suffix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            exp: $crate::expression::DirectListExpression,
        }

        impl $name {
            pub fn append(&mut self, column: impl Into<$crate::Value>, alias: impl Into<$crate::Value>) {
                self.exp.append(column, alias);
            }

            pub fn is_empty(&self) -> bool {
                self.exp.is_empty()
            }

            pub fn clean(&mut self) {
                self.exp.clean();
            }

            pub fn build(&self, builder: &mut impl $crate::clause::Builder) {
                if self.exp.is_not_empty() {
                    builder.add_clause($prefix, self.exp.sql(), $suffix, self.exp.params());
                }
            }
        }
    };
}

/// Fluent `<name>(item)`, `<name>_as(item, alias)` and `clean_<name>()`
/// methods over a list clause field.
macro_rules! list_methods {
    ($field:ident, $keyword:literal, $method:ident, $method_as:ident, $clean:ident) => {
        #[doc = concat!("Add an item to the ", $keyword, " list.")]
        pub fn $method(self, item: impl Into<$crate::Value>) -> Self {
            self.$method_as(item, $crate::Value::Null)
        }

        #[doc = concat!("Add an item with an alias to the ", $keyword, " list.")]
        pub fn $method_as(mut self, item: impl Into<$crate::Value>, alias: impl Into<$crate::Value>) -> Self {
            self.$field.append(item, alias);
            self.base.dirty();
            self
        }

        #[doc = concat!("Remove the ", $keyword, " list.")]
        pub fn $clean(mut self) -> Self {
            self.$field.clean();
            self.base.dirty();
            self
        }
    };
}

pub(crate) use list_clause;
pub(crate) use list_methods;

list_clause!(
    /// ` RETURNING columns`
    ReturningClause,
    " RETURNING ",
    ""
);
list_clause!(
    /// ` USING tables`
    UsingClause,
    " USING ",
    ""
);
list_clause!(
    /// ` (columns)` of an INSERT statement.
    ColumnsClause,
    " (",
    ")"
);
