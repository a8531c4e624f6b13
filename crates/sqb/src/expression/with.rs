use crate::param::param_text;
use crate::value::Value;

use super::Expression;

/// Common table expressions: `alias AS (query)` entries joined by `", "`.
///
/// The RECURSIVE flag is carried per entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WithExpression {
    exp: Expression,
}

super::impl_expression_accessors!(WithExpression);

impl WithExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry. Without an alias the query is rendered alone,
    /// which covers pre-formed text such as `"name AS (...)"`.
    pub fn append(
        &mut self,
        recursive: bool,
        query: impl Into<Value>,
        alias: impl Into<Value>,
    ) -> &mut Self {
        let query = query.into();
        let alias = alias.into();
        let sql = if alias.is_null() {
            self.name_to_string(query)
        } else {
            let alias = self.name_to_string(alias);
            let query = self.name_to_string(query);
            format!("{alias} AS {query}")
        };
        if self.exp.is_not_empty() {
            self.exp.add_sql(", ");
        }
        if recursive {
            self.exp.add_sql("RECURSIVE ");
        }
        self.exp.add_sql(&sql);
        self
    }

    fn name_to_string(&mut self, name: Value) -> String {
        match name {
            Value::Null => "NULL".to_string(),
            Value::Scalar(param) => param_text(&param),
            Value::Raw(exp) => self.exp.expression_to_string(exp),
            Value::Condition(cond) => self.exp.condition_to_string(cond),
            Value::ValueList(list) => self.exp.value_list_to_string(list),
            Value::Query(query) => self.exp.query_to_string(query),
            Value::List(items) => items
                .into_iter()
                .map(|item| self.name_to_string(item))
                .collect::<Vec<_>>()
                .join(", "),
            Value::Map(map) => map
                .into_iter()
                .map(|(alias, query)| {
                    let alias = self.name_to_string(alias);
                    let query = self.name_to_string(query);
                    format!("{alias} AS {query}")
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
