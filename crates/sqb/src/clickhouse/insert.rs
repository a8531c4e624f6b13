use crate::clause::{
    ColumnsClause, FromClause, InsertClause, ValueListClause, list_methods, value_list_methods,
};
use crate::error::SqbResult;
use crate::execution::log_call;
use crate::param::Param;
use crate::statement::{BaseStatement, Statement, impl_statement};
use crate::value::Value;

use super::clause::{FormatClause, SettingsClause};

/// ClickHouse `INSERT`.
///
/// Raw value text is wrapped in one tuple, so `values("1, 'a'")` renders
/// ` VALUES (1, 'a')`. Unlike PostgreSQL an empty statement renders no
/// `DEFAULT VALUES`.
#[derive(Clone, Debug, Default)]
pub struct InsertStmt {
    base: BaseStatement,
    insert_clause: InsertClause,
    columns_clause: ColumnsClause,
    settings_clause: SettingsClause,
    value_list_clause: ValueListClause,
    from_clause: FromClause,
    format_clause: FormatClause,
}

impl_statement!(InsertStmt);

impl InsertStmt {
    /// Set the target table, optionally followed by a column spec such as
    /// `"t (* EXCEPT(b))"`.
    pub fn into(self, table: impl Into<Value>) -> Self {
        self.into_as(table, Value::Null)
    }

    pub fn into_as(mut self, table: impl Into<Value>, alias: impl Into<Value>) -> Self {
        self.insert_clause.append(table, alias);
        self.base.dirty();
        self
    }

    pub fn clean_insert(mut self) -> Self {
        self.insert_clause.clean();
        self.base.dirty();
        self
    }

    list_methods!(columns_clause, "column", columns, columns_as, clean_columns);
    list_methods!(settings_clause, "SETTINGS", settings, settings_as, clean_settings);
    value_list_methods!();

    /// Render the value list as ` FORMAT VALUES (...)`.
    pub fn format_value_list(mut self) -> Self {
        self.value_list_clause.set_format();
        self.base.dirty();
        self
    }

    /// Read rows from a client-side file: `FROM INFILE 'file'`.
    pub fn from_infile(mut self, file: impl Into<Value>) -> Self {
        self.from_clause.append("INFILE", file);
        self.base.dirty();
        self
    }

    pub fn clean_from(mut self) -> Self {
        self.from_clause.clean();
        self.base.dirty();
        self
    }

    list_methods!(format_clause, "FORMAT", format, format_as, clean_format);

    /// Run the insert and return the value generated for `sequence`.
    pub fn exec(&mut self, sequence: &str) -> SqbResult<Param> {
        let executor = self.executor()?;
        self.build();
        log_call("insert", &self.base);
        executor.insert(self.base.sql(), self.base.params(), sequence)
    }

    pub fn must_exec(&mut self, sequence: &str) -> Param {
        self.exec(sequence).unwrap_or_else(|err| panic!("{err}"))
    }

    fn render_clauses(&mut self) {
        self.insert_clause.build(&mut self.base);
        self.columns_clause.build(&mut self.base);
        self.settings_clause.build(&mut self.base);
        self.value_list_clause.build_clickhouse(&mut self.base);
        self.from_clause.build(&mut self.base);
        self.format_clause.build(&mut self.base);
    }
}
