use crate::value::Value;

use super::{ColumnListExpression, ConditionalExpression, Expression};

/// Chain of joins: `TYPE table[ alias][ ON cond | USING (cols)]`, separated
/// by single spaces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JoinExpression {
    exp: Expression,
}

super::impl_expression_accessors!(JoinExpression);

impl JoinExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one join.
    ///
    /// The table part is parenthesized only when it names more than one
    /// table. Text, raw fragments and condition groups become `ON ...`;
    /// any other non-null condition is a column list for `USING (...)`.
    pub fn append(
        &mut self,
        join_type: &str,
        table: impl Into<Value>,
        alias: impl Into<Value>,
        condition: impl Into<Value>,
    ) -> &mut Self {
        if self.exp.is_not_empty() {
            self.exp.add_sql(" ");
        }
        let table = self.table_to_string(table.into(), alias.into());
        self.exp.add_sql(join_type);
        self.exp.add_sql(" ");
        self.exp.add_sql(&table);

        let condition = condition.into();
        if !condition.is_null() {
            self.add_condition(condition);
        }
        self
    }

    fn table_to_string(&mut self, table: Value, alias: Value) -> String {
        let is_multiple = match &table {
            Value::List(items) => items.len() > 1,
            Value::Map(map) => map.len() > 1,
            _ => false,
        };
        let mut list = ColumnListExpression::new();
        list.append(table, alias);
        let sql = self.exp.expression_to_string(list.into_expression());
        if is_multiple { format!("({sql})") } else { sql }
    }

    fn add_condition(&mut self, condition: Value) {
        match condition {
            Value::Scalar(serde_json::Value::String(_))
            | Value::Raw(_)
            | Value::Condition(_) => {
                let cond = ConditionalExpression::from_predicate(condition);
                let sql = self.exp.expression_to_string(cond.into_expression());
                self.exp.add_sql(" ON ");
                self.exp.add_sql(&sql);
            }
            columns => {
                let mut list = ColumnListExpression::new();
                list.append(columns, Value::Null);
                let sql = self.exp.expression_to_string(list.into_expression());
                self.exp.add_sql(" USING (");
                self.exp.add_sql(&sql);
                self.exp.add_sql(")");
            }
        }
    }
}
