//! Condition groups for WHERE / HAVING / ON and conflict predicates.

use std::fmt;

use crate::value::{Query, SliceMap, Value};

use super::{Expression, ValueListExpression};

/// How a new condition is joined to the conditions already present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The call shapes a condition can be built from.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    /// A complete condition: raw text, a nested group, a sub-query, pairs...
    Single(Value),
    /// `operator operand`, e.g. `NOT EXISTS (...)`
    Unary { operator: String, operand: Value },
    /// `operand operator value`, e.g. `col = :p1`
    Binary {
        operand: Value,
        operator: String,
        value: Value,
    },
}

/// Conversion into a [`Predicate`].
///
/// Single values, `(operator, operand)` and `(operand, operator, value)`
/// tuples are accepted:
///
/// ```ignore
/// st.r#where("c1 IS NULL")
///   .and_where(("NOT", subquery))
///   .or_where(("c2", "IN", vec![1, 2, 3]));
/// ```
pub trait IntoPredicate {
    fn into_predicate(self) -> Predicate;
}

impl IntoPredicate for Predicate {
    fn into_predicate(self) -> Predicate {
        self
    }
}

macro_rules! impl_single_predicate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoPredicate for $ty {
                fn into_predicate(self) -> Predicate {
                    Predicate::Single(Value::from(self))
                }
            }
        )*
    };
}

impl_single_predicate!(
    &str,
    String,
    &String,
    Value,
    Expression,
    ConditionalExpression,
    ValueListExpression,
    SliceMap,
    Query,
);

impl<T: Into<Value>> IntoPredicate for Vec<T> {
    fn into_predicate(self) -> Predicate {
        Predicate::Single(Value::from(self))
    }
}

impl<O: Into<Value>> IntoPredicate for (&str, O) {
    fn into_predicate(self) -> Predicate {
        Predicate::Unary {
            operator: self.0.to_string(),
            operand: self.1.into(),
        }
    }
}

impl<A: Into<Value>, V: Into<Value>> IntoPredicate for (A, &str, V) {
    fn into_predicate(self) -> Predicate {
        Predicate::Binary {
            operand: self.0.into(),
            operator: self.1.to_string(),
            value: self.2.into(),
        }
    }
}

/// An AND/OR chain of conditions.
///
/// The first condition never gets a connector; every later one is prefixed
/// with ` AND ` or ` OR `. Nested groups render parenthesized.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConditionalExpression {
    exp: Expression,
}

super::impl_expression_accessors!(ConditionalExpression);

impl ConditionalExpression {
    /// Create an empty condition group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a group holding one condition.
    pub fn from_predicate(predicate: impl IntoPredicate) -> Self {
        let mut cond = Self::new();
        cond.append(predicate, Connector::And);
        cond
    }

    /// Add a condition joined with AND.
    pub fn r#where(mut self, predicate: impl IntoPredicate) -> Self {
        self.append(predicate, Connector::And);
        self
    }

    /// Alias for [`r#where`](Self::r#where).
    pub fn where_(self, predicate: impl IntoPredicate) -> Self {
        self.r#where(predicate)
    }

    /// Add a condition joined with AND.
    pub fn and_where(self, predicate: impl IntoPredicate) -> Self {
        self.r#where(predicate)
    }

    /// Add a condition joined with OR.
    pub fn or_where(mut self, predicate: impl IntoPredicate) -> Self {
        self.append(predicate, Connector::Or);
        self
    }

    /// Add a condition with an explicit connector.
    pub fn append(&mut self, predicate: impl IntoPredicate, connector: Connector) -> &mut Self {
        let sql = match predicate.into_predicate() {
            Predicate::Single(value) => self.name_to_string(value),
            Predicate::Unary { operator, operand } => {
                let operand = self.name_to_string(operand);
                format!("{operator} {operand}")
            }
            Predicate::Binary {
                operand,
                operator,
                value,
            } => {
                let operand = self.name_to_string(operand);
                let value = self.value_to_string(value, &operator);
                format!("{operand} {operator} {value}")
            }
        };
        if self.exp.is_not_empty() {
            self.exp.add_sql(" ");
            self.exp.add_sql(connector.as_str());
            self.exp.add_sql(" ");
        }
        self.exp.add_sql(&sql);
        self
    }

    fn name_to_string(&mut self, name: Value) -> String {
        match name {
            Value::Null => "NULL".to_string(),
            Value::Scalar(param) => crate::param::param_text(&param),
            Value::Raw(exp) => self.exp.expression_to_string(exp),
            Value::Condition(cond) => self.exp.condition_to_string(cond),
            Value::ValueList(list) => self.exp.value_list_to_string(list),
            Value::Query(query) => self.exp.query_to_string(query),
            Value::List(items) => items
                .into_iter()
                .map(|item| self.name_to_string(item))
                .collect::<Vec<_>>()
                .join(" AND "),
            Value::Map(map) => map
                .into_iter()
                .map(|(key, value)| {
                    let key = self.name_to_string(key);
                    let value = self.value_to_string(value, "=");
                    format!("{key} = {value}")
                })
                .collect::<Vec<_>>()
                .join(" AND "),
        }
    }

    fn value_to_string(&mut self, value: Value, operator: &str) -> String {
        match value {
            Value::Null => "NULL".to_string(),
            Value::Scalar(param) => self.exp.next_parameter_name(param),
            Value::Raw(exp) => self.exp.expression_to_string(exp),
            Value::Condition(cond) => self.exp.condition_to_string(cond),
            Value::ValueList(list) => self.exp.value_list_to_string(list),
            Value::Query(query) => self.exp.query_to_string(query),
            Value::List(items) => self.list_to_string(items, operator),
            Value::Map(map) => self.list_to_string(map.into_values(), operator),
        }
    }

    fn list_to_string(&mut self, items: Vec<Value>, operator: &str) -> String {
        let rendered: Vec<String> = items
            .into_iter()
            .map(|item| self.value_to_string(item, ""))
            .collect();
        if is_between(operator) {
            rendered.join(" AND ")
        } else {
            format!("({})", rendered.join(", "))
        }
    }
}

fn is_between(operator: &str) -> bool {
    let operator = operator.trim();
    operator.eq_ignore_ascii_case("BETWEEN") || operator.eq_ignore_ascii_case("NOT BETWEEN")
}

impl From<ConditionalExpression> for Value {
    fn from(cond: ConditionalExpression) -> Self {
        Value::Condition(cond)
    }
}

/// Create a condition group holding one condition.
pub fn cond(predicate: impl IntoPredicate) -> ConditionalExpression {
    ConditionalExpression::from_predicate(predicate)
}
