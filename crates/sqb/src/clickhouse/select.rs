use crate::clause::{
    FromClause, GroupClause, HavingClause, JoinClause, LimitClause, OffsetClause, OrderClause,
    SelectClause, UnionClause, WhereClause, WithClause,
};
use crate::clause::{
    from_methods, group_methods, having_methods, join_methods, limit_methods, list_methods,
    offset_methods, order_methods, select_methods, union_methods, where_methods, with_methods,
};
use crate::execution::{DataFetching, Paginate, select_fetching_methods};
use crate::statement::{BaseStatement, impl_statement};
use crate::value::Value;

use super::clause::{
    ApplyClause, ExceptClause, FormatClause, IntersectClause, IntoOutfileClause, PrewhereClause,
    QualifyClause, ReplaceClause, SampleClause, SettingsClause,
};

/// ClickHouse `SELECT`.
///
/// Besides the common clauses it renders column transformers (`REPLACE`,
/// `APPLY`), `PREWHERE`, `QUALIFY`, `SAMPLE`, `LIMIT ... BY`, `SETTINGS` and
/// the output clauses `INTO OUTFILE` / `FORMAT`. EXCEPT and INTERSECT are
/// appended in place rather than through the union chain.
#[derive(Clone, Debug, Default)]
pub struct SelectStmt {
    base: BaseStatement,
    union_clause: UnionClause,
    with_clause: WithClause,
    select_clause: SelectClause,
    replace_clause: ReplaceClause,
    apply_clause: ApplyClause,
    from_clause: FromClause,
    except_clause: ExceptClause,
    join_clause: JoinClause,
    prewhere_clause: PrewhereClause,
    where_clause: WhereClause,
    settings_clause: SettingsClause,
    group_clause: GroupClause,
    having_clause: HavingClause,
    qualify_clause: QualifyClause,
    order_clause: OrderClause,
    limit_clause: LimitClause,
    sample_clause: SampleClause,
    offset_clause: OffsetClause,
    intersect_clause: IntersectClause,
    into_outfile_clause: IntoOutfileClause,
    format_clause: FormatClause,
}

impl_statement!(SelectStmt);

impl SelectStmt {
    with_methods!();
    select_methods!();
    list_methods!(replace_clause, "REPLACE", replace, replace_as, clean_replace);

    /// Add an ` APPLY(function)` transformer; every call renders its own
    /// `APPLY`.
    pub fn apply(mut self, function: impl Into<Value>) -> Self {
        self.apply_clause.append(function, Value::Null);
        self.base.dirty();
        self
    }

    pub fn clean_apply(mut self) -> Self {
        self.apply_clause.clean();
        self.base.dirty();
        self
    }

    from_methods!(from, from_as, clean_from);

    /// Read the table in its merged state: `FROM t FINAL`.
    pub fn final_(mut self) -> Self {
        self.from_clause.set_final();
        self.base.dirty();
        self
    }

    list_methods!(except_clause, "EXCEPT", except, except_as, clean_except);

    join_methods!();
    join_methods! {
        left_semi_join, left_semi_join_as => "LEFT SEMI JOIN";
        right_semi_join, right_semi_join_as => "RIGHT SEMI JOIN";
        left_anti_join, left_anti_join_as => "LEFT ANTI JOIN";
        right_anti_join, right_anti_join_as => "RIGHT ANTI JOIN";
        left_any_join, left_any_join_as => "LEFT ANY JOIN";
        right_any_join, right_any_join_as => "RIGHT ANY JOIN";
        inner_any_join, inner_any_join_as => "INNER ANY JOIN";
        asof_join, asof_join_as => "ASOF JOIN";
        left_asof_join, left_asof_join_as => "LEFT ASOF JOIN";
        paste_join, paste_join_as => "PASTE JOIN";
    }

    /// `ARRAY JOIN arrays`
    pub fn array_join(self, arrays: impl Into<Value>) -> Self {
        self.join("ARRAY JOIN", arrays, Value::Null, Value::Null)
    }

    /// `LEFT ARRAY JOIN arrays`
    pub fn left_array_join(self, arrays: impl Into<Value>) -> Self {
        self.join("LEFT ARRAY JOIN", arrays, Value::Null, Value::Null)
    }

    list_methods!(prewhere_clause, "PREWHERE", prewhere, prewhere_as, clean_prewhere);
    where_methods!();
    list_methods!(settings_clause, "SETTINGS", settings, settings_as, clean_settings);
    group_methods!();
    having_methods!();
    list_methods!(qualify_clause, "QUALIFY", qualify, qualify_as, clean_qualify);
    order_methods!();
    limit_methods!();

    /// `LIMIT n WITH TIES`
    pub fn with_ties(mut self) -> Self {
        self.limit_clause.set_with_ties();
        self.base.dirty();
        self
    }

    /// `LIMIT n BY columns`
    pub fn limit_by(mut self, column: impl Into<Value>) -> Self {
        self.limit_clause.append_by(column, Value::Null);
        self.base.dirty();
        self
    }

    /// `SAMPLE k`; a negative ratio removes it.
    pub fn sample(mut self, sample: f64) -> Self {
        self.sample_clause.set(sample);
        self.base.dirty();
        self
    }

    pub fn clean_sample(mut self) -> Self {
        self.sample_clause.clean();
        self.base.dirty();
        self
    }

    offset_methods!();
    list_methods!(intersect_clause, "INTERSECT", intersect, intersect_as, clean_intersect);
    list_methods!(into_outfile_clause, "INTO OUTFILE", into_outfile, into_outfile_as, clean_into_outfile);
    list_methods!(format_clause, "FORMAT", format, format_as, clean_format);
    union_methods!();

    select_fetching_methods!();

    fn render_clauses(&mut self) {
        if self.union_clause.is_union() {
            self.union_clause.build(&mut self.base);
            self.order_clause.build(&mut self.base);
            self.limit_clause.build(&mut self.base);
            self.offset_clause.build(&mut self.base);
            return;
        }
        self.with_clause.build(&mut self.base);
        self.select_clause.build(&mut self.base);
        self.replace_clause.build(&mut self.base);
        self.apply_clause.build(&mut self.base);
        self.from_clause.build(&mut self.base);
        self.except_clause.build(&mut self.base);
        self.join_clause.build(&mut self.base);
        self.prewhere_clause.build(&mut self.base);
        self.where_clause.build(&mut self.base);
        self.settings_clause.build(&mut self.base);
        self.group_clause.build(&mut self.base);
        self.having_clause.build(&mut self.base);
        self.qualify_clause.build(&mut self.base);
        self.order_clause.build(&mut self.base);
        self.limit_clause.build(&mut self.base);
        self.sample_clause.build(&mut self.base);
        self.offset_clause.build(&mut self.base);
        self.intersect_clause.build(&mut self.base);
        self.into_outfile_clause.build(&mut self.base);
        self.format_clause.build(&mut self.base);
    }
}

impl DataFetching for SelectStmt {}

impl Paginate for SelectStmt {
    fn set_page(&mut self, page: i64, size: i64) {
        self.offset_clause.set(page.saturating_mul(size));
        self.limit_clause.set(size);
        self.base.dirty();
    }
}
