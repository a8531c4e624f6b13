//! The closed set of shapes accepted wherever a clause takes an arbitrary value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SqbError, SqbResult};
use crate::expression::{ConditionalExpression, Expression, ValueListExpression};
use crate::param::{Param, Params, param_text};

/// Anything that can appear in a name or value position of a clause.
///
/// How each variant renders depends on the expression receiving it, but the
/// rules share one precedence: `Null` is the literal `NULL`, sub-expressions
/// are inlined, conditions and queries are parenthesized, `Map` and `List`
/// recurse, and a `Scalar` is either bare text (name position) or a bound
/// parameter (value position).
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Literal `NULL`
    #[default]
    Null,
    /// A scalar: text in name position, a bound parameter in value position
    Scalar(Param),
    /// A raw SQL fragment with its own parameters
    Raw(Expression),
    /// A nested condition group
    Condition(ConditionalExpression),
    /// A `VALUES` list
    ValueList(ValueListExpression),
    /// A rendered sub-query
    Query(Query),
    /// Ordered key/value pairs
    Map(SliceMap),
    /// Ordered sequence
    List(Vec<Value>),
}

impl Value {
    /// Check if this is the `NULL` value
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Flatten this value into a single bound parameter.
    ///
    /// Sequences become arrays and pairs become objects keyed by the
    /// text form of the key. Fragments bind their SQL text.
    pub(crate) fn into_param(self) -> Param {
        match self {
            Self::Null => Param::Null,
            Self::Scalar(param) => param,
            Self::Raw(exp) => Param::String(exp.sql().to_string()),
            Self::Condition(cond) => Param::String(cond.sql().to_string()),
            Self::ValueList(list) => Param::String(list.sql().to_string()),
            Self::Query(query) => Param::String(query.sql),
            Self::List(items) => Param::Array(items.into_iter().map(Self::into_param).collect()),
            Self::Map(map) => {
                let mut object = Params::new();
                for (key, value) in map {
                    object.insert(key.text(), value.into_param());
                }
                Param::Object(object)
            }
        }
    }

    /// Plain text form used for keys of fetched-row lookups and pair objects.
    pub(crate) fn text(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Scalar(param) => param_text(param),
            Self::Raw(exp) => exp.sql().to_string(),
            Self::Condition(cond) => cond.sql().to_string(),
            Self::ValueList(list) => list.sql().to_string(),
            Self::Query(query) => query.sql.clone(),
            Self::List(items) => items.iter().map(Self::text).collect::<Vec<_>>().join(", "),
            Self::Map(map) => map
                .iter()
                .map(|(key, value)| format!("{} {}", key.text(), value.text()))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(Param::from(value))
                }
            }
        )*
    };
}

impl_scalar_from!(
    &str, String, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
);

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Scalar(Param::String(value.clone()))
    }
}

impl From<Param> for Value {
    fn from(value: Param) -> Self {
        match value {
            Param::Null => Value::Null,
            other => Value::Scalar(other),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<SliceMap> for Value {
    fn from(map: SliceMap) -> Self {
        Value::Map(map)
    }
}

impl From<Query> for Value {
    fn from(query: Query) -> Self {
        Value::Query(query)
    }
}

/// A rendered statement: SQL text plus the parameters it references.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    sql: String,
    params: Params,
}

impl Query {
    /// Create a query snapshot from SQL text and its parameters.
    pub fn new(sql: impl Into<String>, params: Params) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// The rendered SQL text
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The parameters referenced by the SQL text
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Split into SQL text and parameters.
    pub fn into_parts(self) -> (String, Params) {
        (self.sql, self.params)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Ordered key/value pairs.
///
/// Preserves insertion order and allows duplicate keys; use it wherever
/// column/value positions must line up (INSERT columns, SET lists, ...).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliceMap {
    pairs: Vec<(Value, Value)>,
}

impl SliceMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from alternating keys and values.
    ///
    /// A trailing key without a value is paired with `NULL`.
    pub fn from_pairs(items: Vec<Value>) -> Self {
        let mut map = Self::new();
        let mut items = items.into_iter();
        while let Some(key) = items.next() {
            map.push(key, items.next().unwrap_or_default());
        }
        map
    }

    /// Append a pair (fluent form).
    pub fn pair(mut self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        self.push(key, value);
        self
    }

    /// Append a pair.
    pub fn push(&mut self, key: impl Into<Value>, value: impl Into<Value>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.pairs.iter().map(|(key, _)| key)
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.pairs.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Value, Value)> {
        self.pairs.iter()
    }

    /// Consume the map and keep only the values.
    pub fn into_values(self) -> Vec<Value> {
        self.pairs.into_iter().map(|(_, value)| value).collect()
    }
}

impl IntoIterator for SliceMap {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for SliceMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.push(key, value);
        }
        map
    }
}

/// Build a [`SliceMap`] from `key => value` pairs, keeping their order.
///
/// ```ignore
/// let values = map! { "c1" => "v1", "c2" => 2 };
/// ```
#[macro_export]
macro_rules! map {
    () => {
        $crate::SliceMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::SliceMap::new()$(.pair($key, $value))+
    };
}

/// Build a heterogeneous [`Value::List`].
///
/// ```ignore
/// let row = list![1, "two", Value::Null];
/// ```
#[macro_export]
macro_rules! list {
    ($($item:expr),* $(,)?) => {
        $crate::Value::List(vec![$($crate::Value::from($item)),*])
    };
}

/// Convert a fetched scalar to `i64`.
///
/// Integral numbers convert exactly, floats are truncated. Floats outside
/// the `i64` range and anything else are a [`SqbError::Conversion`].
pub fn to_int64(value: &Param) -> SqbResult<i64> {
    if let Param::Number(number) = value {
        if let Some(n) = number.as_i64() {
            return Ok(n);
        }
        if let Some(n) = number.as_u64() {
            return i64::try_from(n).map_err(|_| SqbError::conversion("uint64"));
        }
        if let Some(n) = number.as_f64() {
            let n = n.trunc();
            if n.is_finite() && n >= i64::MIN as f64 && n < i64::MAX as f64 {
                return Ok(n as i64);
            }
            return Err(SqbError::conversion("float64"));
        }
    }
    Err(SqbError::conversion(json_type_name(value)))
}

fn json_type_name(value: &Param) -> &'static str {
    match value {
        Param::Null => "null",
        Param::Bool(_) => "bool",
        Param::Number(_) => "number",
        Param::String(_) => "string",
        Param::Array(_) => "array",
        Param::Object(_) => "object",
    }
}
