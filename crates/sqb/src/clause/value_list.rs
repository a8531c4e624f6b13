use crate::expression::ValueListExpression;
use crate::value::{Query, Value};

use super::Builder;

/// Row source of an INSERT statement: a `VALUES` list or a sub-query.
///
/// Rendering differs per dialect, see [`build_postgresql`](Self::build_postgresql)
/// and [`build_clickhouse`](Self::build_clickhouse).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueListClause {
    query: Option<Query>,
    exp: ValueListExpression,
    format: bool,
}

impl ValueListClause {
    /// Use a sub-query as the row source.
    pub fn set_query(&mut self, query: Query) {
        self.query = Some(query);
    }

    pub fn append(&mut self, values: impl Into<Value>) {
        self.exp.append(values);
    }

    /// Emit ` FORMAT VALUES` instead of ` VALUES` (ClickHouse).
    pub fn set_format(&mut self) {
        self.format = true;
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.exp.is_empty()
    }

    pub fn clean(&mut self) {
        *self = Self::default();
    }

    /// ` <query>`, ` VALUES ...` or ` DEFAULT VALUES`.
    pub fn build_postgresql(&self, builder: &mut impl Builder) {
        if let Some(query) = &self.query {
            builder.add_clause(" ", query.sql(), "", query.params());
        } else if self.exp.is_empty() {
            builder.add_sql(" DEFAULT VALUES");
        } else {
            builder.add_clause(" VALUES ", self.exp.sql(), "", self.exp.params());
        }
    }

    /// ` <query>` or ` [FORMAT ]VALUES (...)`; nothing when empty.
    pub fn build_clickhouse(&self, builder: &mut impl Builder) {
        if let Some(query) = &self.query {
            builder.add_clause(" ", query.sql(), "", query.params());
        } else if self.exp.is_not_empty() {
            let prefix = if self.format {
                " FORMAT VALUES ("
            } else {
                " VALUES ("
            };
            builder.add_clause(prefix, self.exp.sql(), ")", self.exp.params());
        }
    }
}

/// Column names implied by a values argument: the keys of a pair map, or of
/// the first pair map of a sequence.
pub(crate) fn column_keys(values: &Value) -> Option<Value> {
    let map = match values {
        Value::Map(map) => map,
        Value::List(items) => match items.first() {
            Some(Value::Map(map)) => map,
            _ => return None,
        },
        _ => return None,
    };
    Some(Value::List(map.keys().cloned().collect()))
}

/// The value list of a standalone `VALUES` statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValuesClause {
    exp: ValueListExpression,
}

impl ValuesClause {
    pub fn append(&mut self, values: impl Into<Value>) {
        self.exp.append(values);
    }

    pub fn is_empty(&self) -> bool {
        self.exp.is_empty()
    }

    pub fn clean(&mut self) {
        self.exp.clean();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        if self.exp.is_empty() {
            builder.add_sql("VALUES");
        } else {
            builder.add_clause("VALUES ", self.exp.sql(), "", self.exp.params());
        }
    }
}

/// `values`, `values_with_columns`, `select` and `clean_value_list` over
/// the `value_list_clause` / `columns_clause` fields of an INSERT statement.
macro_rules! value_list_methods {
    () => {
        /// Add values. Pair maps (or a sequence starting with one) also set
        /// the column list, unless columns were given already.
        pub fn values(mut self, values: impl Into<$crate::Value>) -> Self {
            let values = values.into();
            if self.columns_clause.is_empty() {
                if let Some(columns) = $crate::clause::column_keys(&values) {
                    self.columns_clause.append(columns, $crate::Value::Null);
                }
            }
            self.value_list_clause.append(values);
            self.base.dirty();
            self
        }

        /// Add values together with an explicit column list.
        pub fn values_with_columns(
            mut self,
            values: impl Into<$crate::Value>,
            columns: impl Into<$crate::Value>,
        ) -> Self {
            self.columns_clause.append(columns, $crate::Value::Null);
            self.value_list_clause.append(values);
            self.base.dirty();
            self
        }

        /// Insert the rows produced by a query.
        pub fn select(mut self, query: impl Into<$crate::Query>) -> Self {
            self.value_list_clause.set_query(query.into());
            self.base.dirty();
            self
        }

        pub fn clean_value_list(mut self) -> Self {
            self.value_list_clause.clean();
            self.base.dirty();
            self
        }
    };
}

pub(crate) use value_list_methods;
