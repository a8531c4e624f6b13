use crate::param::param_text;
use crate::value::{SliceMap, Value};

use super::Expression;

/// Comma-separated list of `name alias` items.
///
/// With `reverse_order` set, the positional pairing flips: the first slot is
/// the suffix (for instance a sort direction) and the second the name, while
/// the output still reads `name suffix`. This lets GROUP BY / ORDER BY share
/// the rendering of SELECT / FROM lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListExpression {
    exp: Expression,
    reverse_order: bool,
}

super::impl_expression_accessors!(ListExpression);

impl ListExpression {
    pub fn new(reverse_order: bool) -> Self {
        Self {
            exp: Expression::default(),
            reverse_order,
        }
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse_order
    }

    /// Append one item.
    ///
    /// Lists render each element (a two-element inner list is an
    /// `[alias, name]` pair), pairs render `name alias` per entry.
    pub fn append_name(&mut self, name: impl Into<Value>, alias: impl Into<Value>) -> &mut Self {
        let item = self.map_to_value(name.into(), alias.into());
        if self.exp.is_not_empty() {
            self.exp.add_sql(", ");
        }
        let sql = self.name_to_string(item);
        self.exp.add_sql(&sql);
        self
    }

    fn map_to_value(&self, name: Value, alias: Value) -> Value {
        if alias.is_null() && !self.reverse_order {
            return name;
        }
        if name.is_null() && self.reverse_order {
            return alias;
        }
        Value::Map(SliceMap::new().pair(alias, name))
    }

    fn name_to_string(&mut self, name: Value) -> String {
        match name {
            Value::Null => "NULL".to_string(),
            Value::Scalar(param) => param_text(&param),
            Value::Raw(exp) => self.exp.expression_to_string(exp),
            Value::Condition(cond) => self.exp.condition_to_string(cond),
            Value::ValueList(list) => self.exp.value_list_to_string(list),
            Value::Query(query) => self.exp.query_to_string(query),
            Value::List(items) => self.slice_to_string(items),
            Value::Map(map) => self.slice_map_to_string(map),
        }
    }

    fn slice_to_string(&mut self, items: Vec<Value>) -> String {
        let mut result = String::new();
        for item in items {
            let (alias, name) = match item {
                Value::List(mut pair) if pair.len() == 2 => {
                    let name = pair.pop().unwrap_or_default();
                    let alias = pair.pop().unwrap_or_default();
                    (alias, name)
                }
                item if self.reverse_order => (item, Value::Null),
                item => (Value::Null, item),
            };
            self.add_to_result(alias, name, &mut result);
        }
        result
    }

    fn slice_map_to_string(&mut self, map: SliceMap) -> String {
        let mut result = String::new();
        for (alias, name) in map {
            self.add_to_result(alias, name, &mut result);
        }
        result
    }

    fn add_to_result(&mut self, alias: Value, name: Value, result: &mut String) {
        let (alias, name) = if self.reverse_order {
            (name, alias)
        } else {
            (alias, name)
        };
        if !result.is_empty() {
            result.push_str(", ");
        }
        let name = self.name_to_string(name);
        result.push_str(&name);
        if !alias.is_null() {
            let alias = self.name_to_string(alias);
            if !alias.is_empty() {
                result.push(' ');
                result.push_str(&alias);
            }
        }
    }
}

impl From<ListExpression> for Expression {
    fn from(list: ListExpression) -> Self {
        list.exp
    }
}

/// `name alias` list used by SELECT, FROM, RETURNING and friends.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnListExpression {
    exp: ListExpression,
}

super::impl_expression_accessors!(ColumnListExpression);

/// SELECT lists render exactly like column lists.
pub type DirectListExpression = ColumnListExpression;

impl ColumnListExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column (or table) with an optional alias.
    pub fn append(&mut self, column: impl Into<Value>, alias: impl Into<Value>) -> &mut Self {
        self.exp.append_name(column, alias);
        self
    }
}

impl From<ColumnListExpression> for Expression {
    fn from(list: ColumnListExpression) -> Self {
        list.exp.into()
    }
}

/// `column direction` list used by GROUP BY and ORDER BY.
#[derive(Clone, Debug, PartialEq)]
pub struct ReversedListExpression {
    exp: ListExpression,
}

super::impl_expression_accessors!(ReversedListExpression);

impl Default for ReversedListExpression {
    fn default() -> Self {
        Self {
            exp: ListExpression::new(true),
        }
    }
}

impl ReversedListExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column with an optional direction (`ASC`, `DESC`, ...).
    pub fn append(&mut self, column: impl Into<Value>, order: impl Into<Value>) -> &mut Self {
        self.exp.append_name(order, column);
        self
    }
}

impl From<ReversedListExpression> for Expression {
    fn from(list: ReversedListExpression) -> Self {
        list.exp.into()
    }
}

macro_rules! impl_raw_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(list: $ty) -> Self {
                    Value::Raw(list.into())
                }
            }
        )*
    };
}

impl_raw_value_from!(ListExpression, ColumnListExpression, ReversedListExpression);
