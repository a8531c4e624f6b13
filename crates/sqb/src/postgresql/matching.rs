use crate::clause::Builder;
use crate::expression::ConditionalExpression;
use crate::value::Query;

#[derive(Clone, Debug, Default, PartialEq)]
enum MatchAction {
    #[default]
    Unset,
    /// `DELETE` or `DO NOTHING`
    Keyword(&'static str),
    /// A rendered `INSERT ...` / `UPDATE SET ...` action
    Statement(Query),
}

#[derive(Clone, Debug, PartialEq)]
struct MatchItem {
    matched: bool,
    condition: ConditionalExpression,
    action: MatchAction,
}

/// ` WHEN [NOT ]MATCHED[ AND cond] THEN action` items of a MERGE statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchClause {
    items: Vec<MatchItem>,
}

impl MatchClause {
    /// Start a new `WHEN` item; its action is set by the next `set_*` call.
    pub fn when(&mut self, matched: bool, condition: ConditionalExpression) {
        self.items.push(MatchItem {
            matched,
            condition,
            action: MatchAction::Unset,
        });
    }

    /// Set the action of the last item to a bare keyword. No-op without items.
    pub fn set_keyword(&mut self, keyword: &'static str) {
        if let Some(item) = self.items.last_mut() {
            item.action = MatchAction::Keyword(keyword);
        }
    }

    /// Set the action of the last item to a statement. No-op without items.
    pub fn set_statement(&mut self, statement: Query) {
        if let Some(item) = self.items.last_mut() {
            item.action = MatchAction::Statement(statement);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clean(&mut self) {
        self.items.clear();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        for item in &self.items {
            builder.add_sql(if item.matched {
                " WHEN MATCHED"
            } else {
                " WHEN NOT MATCHED"
            });
            if item.condition.is_not_empty() {
                builder.add_clause(" AND ", item.condition.sql(), "", item.condition.params());
            }
            builder.add_sql(" THEN");
            match &item.action {
                MatchAction::Unset => {}
                MatchAction::Keyword(keyword) => {
                    builder.add_sql(" ");
                    builder.add_sql(keyword);
                }
                MatchAction::Statement(query) => {
                    builder.add_clause(" ", query.sql(), "", query.params());
                }
            }
        }
    }
}
