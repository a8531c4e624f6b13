use std::fmt;

use crate::param::{Param, Params, next_parameter_name};
use crate::value::Query;

use super::{ConditionalExpression, ValueListExpression};

/// The atomic renderable unit: a SQL text buffer plus the parameters it references.
///
/// Emptiness is decided by the buffer alone; parameters never make an
/// otherwise empty expression non-empty. Cloning yields an independent copy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expression {
    sql: String,
    params: Params,
}

impl Expression {
    /// Create an expression from literal SQL text.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Params::new(),
        }
    }

    /// Create an expression from SQL text and pre-named parameters.
    pub fn with_params(sql: impl Into<String>, params: Params) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.sql.is_empty()
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Append raw SQL text. Nothing is escaped or validated.
    pub fn add_sql(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    /// Merge parameters into this expression; on a name collision the
    /// incoming value wins.
    pub fn add_params(&mut self, params: &Params) -> &mut Self {
        for (name, value) in params {
            self.params.insert(name.clone(), value.clone());
        }
        self
    }

    /// Reset both the buffer and the parameters.
    pub fn clean(&mut self) -> &mut Self {
        self.sql.clear();
        self.params.clear();
        self
    }

    /// Split into SQL text and parameters.
    pub fn into_parts(self) -> (String, Params) {
        (self.sql, self.params)
    }

    /// Bind `value` under a freshly allocated name and return its placeholder.
    pub(crate) fn next_parameter_name(&mut self, value: Param) -> String {
        let name = next_parameter_name();
        let placeholder = format!(":{name}");
        self.params.insert(name, value);
        placeholder
    }

    /// Bubble the parameters of a raw fragment and return its text inline.
    pub(crate) fn expression_to_string(&mut self, exp: Expression) -> String {
        let (sql, params) = exp.into_parts();
        self.absorb(params);
        sql
    }

    /// Bubble the parameters of a condition group and return it parenthesized.
    pub(crate) fn condition_to_string(&mut self, cond: ConditionalExpression) -> String {
        let (sql, params) = cond.into_expression().into_parts();
        self.absorb(params);
        format!("({sql})")
    }

    /// Bubble the parameters of a sub-query and return it parenthesized.
    pub(crate) fn query_to_string(&mut self, query: Query) -> String {
        let (sql, params) = query.into_parts();
        self.absorb(params);
        format!("({sql})")
    }

    /// Bubble the parameters of a `VALUES` list and return `(VALUES ...)`.
    pub(crate) fn value_list_to_string(&mut self, list: ValueListExpression) -> String {
        let (sql, params) = list.into_expression().into_parts();
        self.absorb(params);
        format!("(VALUES {sql})")
    }

    fn absorb(&mut self, params: Params) {
        self.params.extend(params);
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl From<Expression> for crate::Value {
    fn from(exp: Expression) -> Self {
        crate::Value::Raw(exp)
    }
}

/// Create a raw SQL fragment.
pub fn exp(sql: impl Into<String>) -> Expression {
    Expression::new(sql)
}
