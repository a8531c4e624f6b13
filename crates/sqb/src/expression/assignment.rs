use crate::param::param_text;
use crate::value::Value;

use super::Expression;

/// `SET` list: `col = value` items joined by `", "`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssignmentExpression {
    exp: Expression,
}

super::impl_expression_accessors!(AssignmentExpression);

impl AssignmentExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append pre-formed assignments: raw text, a sub-query, a list of them,
    /// or pairs rendered as `key = value`.
    pub fn append(&mut self, assignment: impl Into<Value>) -> &mut Self {
        let sql = self.name_to_string(assignment.into());
        self.push(&sql);
        self
    }

    /// Append `column = value`.
    pub fn append_value(&mut self, column: impl Into<Value>, value: impl Into<Value>) -> &mut Self {
        let column = self.name_to_string(column.into());
        let value = self.value_to_string(value.into());
        self.push(&format!("{column} = {value}"));
        self
    }

    fn push(&mut self, sql: &str) {
        if self.exp.is_not_empty() {
            self.exp.add_sql(", ");
        }
        self.exp.add_sql(sql);
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
                .map(|(column, value)| {
                    let column = self.name_to_string(column);
                    let value = self.value_to_string(value);
                    format!("{column} = {value}")
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    fn value_to_string(&mut self, value: Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Raw(exp) => self.exp.expression_to_string(exp),
            Value::Condition(cond) => self.exp.condition_to_string(cond),
            Value::ValueList(list) => self.exp.value_list_to_string(list),
            Value::Query(query) => self.exp.query_to_string(query),
            other => self.exp.next_parameter_name(other.into_param()),
        }
    }
}

impl From<AssignmentExpression> for Value {
    fn from(assignment: AssignmentExpression) -> Self {
        Value::Raw(assignment.exp)
    }
}
