use crate::param::param_text;
use crate::value::Value;

use super::Expression;

/// Tuples of a `VALUES` list.
///
/// A flat sequence renders as one tuple `(:p1, :p2)`. A sequence whose first
/// element is itself a sequence or a pair map switches to tuple-list mode:
/// each element becomes its own parenthesized tuple.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueListExpression {
    exp: Expression,
}

super::impl_expression_accessors!(ValueListExpression);

impl ValueListExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding one set of values.
    pub fn from_values(values: impl Into<Value>) -> Self {
        let mut list = Self::new();
        list.append(values);
        list
    }

    /// Append values, separated from earlier ones by `", "`.
    ///
    /// Pair maps contribute only their values; keys are the concern of the
    /// owning clause.
    pub fn append(&mut self, values: impl Into<Value>) -> &mut Self {
        let sql = self.value_list_to_string(values.into());
        if sql.is_empty() {
            return self;
        }
        if self.exp.is_not_empty() {
            self.exp.add_sql(", ");
        }
        self.exp.add_sql(&sql);
        self
    }

    fn value_list_to_string(&mut self, values: Value) -> String {
        match values {
            Value::Null => String::new(),
            Value::Scalar(param) => param_text(&param),
            Value::Raw(exp) => self.exp.expression_to_string(exp),
            Value::Condition(cond) => self.exp.condition_to_string(cond),
            Value::ValueList(list) => self.exp.expression_to_string(list.into_expression()),
            Value::Query(query) => self.exp.query_to_string(query),
            Value::List(items) => self.slice_to_string(items),
            Value::Map(map) => self.slice_to_string(map.into_values()),
        }
    }

    fn slice_to_string(&mut self, items: Vec<Value>) -> String {
        if items.is_empty() {
            return String::new();
        }
        let is_tuple_list = matches!(items.first(), Some(Value::List(_) | Value::Map(_)));
        if is_tuple_list {
            items
                .into_iter()
                .map(|item| self.value_list_to_string(item))
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            format!("({})", self.values_to_string(items))
        }
    }

    fn values_to_string(&mut self, items: Vec<Value>) -> String {
        items
            .into_iter()
            .map(|item| self.value_to_string(item))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn value_to_string(&mut self, value: Value) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Scalar(param) => self.exp.next_parameter_name(param),
            Value::Raw(exp) => self.exp.expression_to_string(exp),
            Value::Condition(cond) => self.exp.condition_to_string(cond),
            Value::ValueList(list) => self.exp.value_list_to_string(list),
            Value::Query(query) => self.exp.query_to_string(query),
            Value::List(items) => self.values_to_string(items),
            Value::Map(map) => self.values_to_string(map.into_values()),
        }
    }
}

impl From<ValueListExpression> for Value {
    fn from(list: ValueListExpression) -> Self {
        Value::ValueList(list)
    }
}
