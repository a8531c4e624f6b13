use crate::clause::{Builder, list_clause};
use crate::expression::DirectListExpression;
use crate::value::Value;

/// ` APPLY(f1) APPLY(f2) ...` column transformers; one call per function.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplyClause {
    exps: Vec<DirectListExpression>,
}

impl ApplyClause {
    pub fn append(&mut self, function: impl Into<Value>, alias: impl Into<Value>) {
        let mut exp = DirectListExpression::new();
        exp.append(function, alias);
        self.exps.push(exp);
    }

    pub fn is_empty(&self) -> bool {
        self.exps.iter().all(|exp| exp.is_empty())
    }

    pub fn clean(&mut self) {
        self.exps.clear();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        for exp in self.exps.iter().filter(|exp| exp.is_not_empty()) {
            builder.add_clause(" APPLY(", exp.sql(), ")", exp.params());
        }
    }
}

/// ` SAMPLE k`; a negative ratio renders nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleClause {
    sample: f64,
}

impl Default for SampleClause {
    fn default() -> Self {
        Self { sample: -1.0 }
    }
}

impl SampleClause {
    pub fn set(&mut self, sample: f64) {
        self.sample = sample;
    }

    pub fn clean(&mut self) {
        *self = Self::default();
    }

    pub fn build(&self, builder: &mut impl Builder) {
        if self.sample >= 0.0 {
            builder.add_sql(&format!(" SAMPLE {}", self.sample));
        }
    }
}

list_clause!(
    /// `* REPLACE(expr AS column)` column transformer.
    ReplaceClause,
    " REPLACE(",
    ")"
);
list_clause!(
    /// ` EXCEPT query` set operator.
    ExceptClause,
    " EXCEPT ",
    ""
);
list_clause!(
    /// ` INTERSECT query` set operator.
    IntersectClause,
    " INTERSECT ",
    ""
);
list_clause!(PrewhereClause, " PREWHERE ", "");
list_clause!(QualifyClause, " QUALIFY ", "");
list_clause!(SettingsClause, " SETTINGS ", "");
list_clause!(IntoOutfileClause, " INTO OUTFILE ", "");
list_clause!(FormatClause, " FORMAT ", "");
