use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::prelude::*;
use crate::testing::{FailingExecutor, MockExecutor};
use crate::{Params, Row};

fn params(value: serde_json::Value) -> Params {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Params::new(),
    }
}

fn row(value: serde_json::Value) -> Row {
    params(value)
}

// ==================== SELECT ====================

#[test]
fn test_select_empty() {
    let mut st = select();
    assert_eq!(st.to_sql(), "SELECT *");
    assert_eq!(st.params(), Params::new());
}

#[test]
fn test_select_from_shapes() {
    let mut st = select().from("tb");
    assert_eq!(st.to_sql(), "SELECT * FROM tb");

    let mut st = select().from_as("tb", "t1");
    assert_eq!(st.to_sql(), "SELECT * FROM tb t1");

    let mut st = select().from(vec!["t1", "t2", "t3"]);
    assert_eq!(st.to_sql(), "SELECT * FROM t1, t2, t3");

    let mut st = select().from(map! { "a1" => "t1", "a2" => "t2", "a3" => "t3" });
    assert_eq!(st.to_sql(), "SELECT * FROM t1 a1, t2 a2, t3 a3");

    let mut st = select().from(exp("tb AS a"));
    assert_eq!(st.to_sql(), "SELECT * FROM tb AS a");

    let mut st = select().from_as(select().from("tb"), "a1");
    assert_eq!(st.to_sql(), "SELECT * FROM (SELECT * FROM tb) a1");

    let mut st = select()
        .from_as("t1", "a1")
        .from_as(select().from("t2"), "a2")
        .from("t3");
    assert_eq!(st.to_sql(), "SELECT * FROM t1 a1, (SELECT * FROM t2) a2, t3");
}

#[test]
fn test_select_column_shapes() {
    let mut st = select().select("column").from("tb");
    assert_eq!(st.to_sql(), "SELECT column FROM tb");

    let mut st = select().select("c1").select_as("c2", "a2").from("tb");
    assert_eq!(st.to_sql(), "SELECT c1, c2 a2 FROM tb");

    let mut st = select().select(map! { "a1" => "c1", "a2" => "c2", "a3" => "c3" }).from("tb");
    assert_eq!(st.to_sql(), "SELECT c1 a1, c2 a2, c3 a3 FROM tb");

    let mut st = select().select_as(select().from("t2"), "a1").from("t1");
    assert_eq!(st.to_sql(), "SELECT (SELECT * FROM t2) a1 FROM t1");
}

#[test]
fn test_select_mixed_column_list_binds_values() {
    let _seq = ParameterSequence::new().scope();
    let mut st = select()
        .select(list![
            vec![Value::from("a1"), select().from("t2").into()],
            vec!["a2", "c2"],
            Value::Null,
            "c3",
            vec![
                Value::from("a4"),
                crate::ValueListExpression::from_values(vec![1, 2, 3]).into(),
            ],
        ])
        .from("t1");
    assert_eq!(
        st.to_sql(),
        "SELECT (SELECT * FROM t2) a1, c2 a2, NULL, c3, (VALUES (:p1, :p2, :p3)) a4 FROM t1"
    );
    assert_eq!(st.params(), params(json!({"p1": 1, "p2": 2, "p3": 3})));
}

#[test]
fn test_select_distinct() {
    let mut st = select().distinct().select("c1").from("tb");
    assert_eq!(st.to_sql(), "SELECT DISTINCT c1 FROM tb");

    let mut st = select().distinct().from("tb");
    assert_eq!(st.to_sql(), "SELECT DISTINCT * FROM tb");
}

#[test]
fn test_select_joins() {
    let mut st = select().from("t1").join("JOIN", "t2", Value::Null, "t2.id = t1.id");
    assert_eq!(st.to_sql(), "SELECT * FROM t1 JOIN t2 ON t2.id = t1.id");

    let mut st = select()
        .from("t1")
        .inner_join(vec!["t2", "t3"], "t2.id = t1.id AND t3.id = t1.id");
    assert_eq!(
        st.to_sql(),
        "SELECT * FROM t1 INNER JOIN (t2, t3) ON t2.id = t1.id AND t3.id = t1.id"
    );

    let mut st = select().from("t1").inner_join("t2", vec!["t2.c1", "t2.c2"]);
    assert_eq!(st.to_sql(), "SELECT * FROM t1 INNER JOIN t2 USING (t2.c1, t2.c2)");

    let mut st = select()
        .from("t1")
        .inner_join_as(select().from("t2"), "a2", "t1.id = t2.id");
    assert_eq!(
        st.to_sql(),
        "SELECT * FROM t1 INNER JOIN (SELECT * FROM t2) a2 ON t1.id = t2.id"
    );

    let mut st = select().from("t1").inner_join(
        "t2",
        cond("t2.id = t1.id")
            .and_where("t1.f1 > t2.f2")
            .or_where("t2.f3 <> t1.f3")
            .or_where(Value::Null),
    );
    assert_eq!(
        st.to_sql(),
        "SELECT * FROM t1 INNER JOIN t2 ON (t2.id = t1.id AND t1.f1 > t2.f2 OR t2.f3 <> t1.f3 OR NULL)"
    );
}

#[test]
fn test_select_join_chain_and_full_joins() {
    let mut st = select()
        .from("t1")
        .left_join("t2", "t2.id = t1.id")
        .right_outer_join_as("t3", "a3", "a3.id = t1.id")
        .full_join("t4", "t4.id = t1.id")
        .natural_full_outer_join("t5", Value::Null)
        .cross_join("t6");
    assert_eq!(
        st.to_sql(),
        "SELECT * FROM t1 LEFT JOIN t2 ON t2.id = t1.id RIGHT OUTER JOIN t3 a3 ON a3.id = t1.id \
         FULL JOIN t4 ON t4.id = t1.id NATURAL FULL OUTER JOIN t5 CROSS JOIN t6"
    );

    let mut st = st.clean_join();
    assert_eq!(st.to_sql(), "SELECT * FROM t1");
}

#[test]
fn test_select_join_values_list() {
    let _seq = ParameterSequence::new().scope();
    let mut st = select().from("t1").right_join_as(
        crate::ValueListExpression::from_values(list![
            list!["a", 1],
            list!["b", 2],
            list!["c", 3]
        ]),
        "t2 (name, id)",
        "t1.id = t2.id",
    );
    assert_eq!(
        st.to_sql(),
        "SELECT * FROM t1 RIGHT JOIN (VALUES (:p1, :p2), (:p3, :p4), (:p5, :p6)) t2 (name, id) ON t1.id = t2.id"
    );
    assert_eq!(st.params().len(), 6);
}

#[test]
fn test_select_where_shapes() {
    let _seq = ParameterSequence::new().scope();

    let mut st = select().from("tb").r#where("c1 = c2");
    assert_eq!(st.to_sql(), "SELECT * FROM tb WHERE c1 = c2");

    let mut st = select().from("tb").r#where(exp("c1 = c2"));
    assert_eq!(st.to_sql(), "SELECT * FROM tb WHERE c1 = c2");

    let mut st = select().from("tb").r#where(("col", "=", Value::Null));
    assert_eq!(st.to_sql(), "SELECT * FROM tb WHERE col = NULL");
    assert!(st.params().is_empty());

    let mut st = select()
        .from("t1")
        .r#where(("t1.col", "=", select().from("t2").select("COUNT(*)")));
    assert_eq!(st.to_sql(), "SELECT * FROM t1 WHERE t1.col = (SELECT COUNT(*) FROM t2)");

    let mut st = select().from("tb").r#where(("c1", "=", exp("c2")));
    assert_eq!(st.to_sql(), "SELECT * FROM tb WHERE c1 = c2");

    let mut st = select().from("tb").r#where(("NOT", exp("col")));
    assert_eq!(st.to_sql(), "SELECT * FROM tb WHERE NOT col");

    let mut st = select()
        .from("t1")
        .r#where(("NOT", select().from("t2").select("COUNT(*)")));
    assert_eq!(st.to_sql(), "SELECT * FROM t1 WHERE NOT (SELECT COUNT(*) FROM t2)");

    let mut st = select().from("t1").r#where((
        select().from("t2").select("COUNT(*)"),
        "<>",
        select().from("t3").select("COUNT(*)"),
    ));
    assert_eq!(
        st.to_sql(),
        "SELECT * FROM t1 WHERE (SELECT COUNT(*) FROM t2) <> (SELECT COUNT(*) FROM t3)"
    );

    let mut st = select().from("tb").r#where(vec!["c1 = c2", "c3 <> c4"]);
    assert_eq!(st.to_sql(), "SELECT * FROM tb WHERE c1 = c2 AND c3 <> c4");
}

#[test]
fn test_select_where_binds_parameters() {
    let _seq = ParameterSequence::new().scope();
    let mut st = select().from("tb").r#where(("col", "=", 1));
    assert_eq!(st.to_sql(), "SELECT * FROM tb WHERE col = :p1");
    assert_eq!(st.params(), params(json!({"p1": 1})));

    let seq = ParameterSequence::new();
    let _inner = seq.scope();
    let mut st = select().from("tb").r#where(("col", "IN", vec![1, 2, 3]));
    assert_eq!(st.to_sql(), "SELECT * FROM tb WHERE col IN (:p1, :p2, :p3)");
    assert_eq!(st.params(), params(json!({"p1": 1, "p2": 2, "p3": 3})));

    seq.reset();
    let mut st = select().from("tb").r#where(map! { "c1" => 1, "c2" => 2 });
    assert_eq!(st.to_sql(), "SELECT * FROM tb WHERE c1 = :p1 AND c2 = :p2");

    seq.reset();
    let mut st = select()
        .from("tb")
        .r#where("c1 IS NULL")
        .and_where(cond(("c2", "=", 1)).or_where(("c3", "<", 2)));
    assert_eq!(
        st.to_sql(),
        "SELECT * FROM tb WHERE c1 IS NULL AND (c2 = :p1 OR c3 < :p2)"
    );
    assert_eq!(st.params(), params(json!({"p1": 1, "p2": 2})));

    seq.reset();
    let mut st = select()
        .from("t1")
        .r#where((select().from("t2").select("COUNT(*)"), ">", 5));
    assert_eq!(st.to_sql(), "SELECT * FROM t1 WHERE (SELECT COUNT(*) FROM t2) > :p1");
    assert_eq!(st.params(), params(json!({"p1": 5})));
}

#[test]
fn test_select_having() {
    let _seq = ParameterSequence::new().scope();
    let mut st = select()
        .from("tb")
        .having(("col", "BETWEEN", vec![1, 2]))
        .or_having("c3 <> c4");
    assert_eq!(st.to_sql(), "SELECT * FROM tb HAVING col BETWEEN :p1 AND :p2 OR c3 <> c4");
    assert_eq!(st.params(), params(json!({"p1": 1, "p2": 2})));

    let mut st = st.clean_having();
    assert_eq!(st.to_sql(), "SELECT * FROM tb");
}

#[test]
fn test_select_group_by() {
    let mut st = select().from("tb").group_by("col");
    assert_eq!(st.to_sql(), "SELECT * FROM tb GROUP BY col");

    let mut st = select().from("tb").group_by_dir("col", "DESC");
    assert_eq!(st.to_sql(), "SELECT * FROM tb GROUP BY col DESC");

    let mut st = select()
        .from("tb")
        .group_by(map! { "c1" => "ASC", "c2" => "DESC", "c3" => "" });
    assert_eq!(st.to_sql(), "SELECT * FROM tb GROUP BY c1 ASC, c2 DESC, c3");

    let mut st = select()
        .from("t1")
        .group_by_dir(select().from("t2").select("t2.id"), "DESC");
    assert_eq!(st.to_sql(), "SELECT * FROM t1 GROUP BY (SELECT t2.id FROM t2) DESC");

    let mut st = select().from("tb").group_by(vec!["a", "b"]).rollup();
    assert_eq!(st.to_sql(), "SELECT * FROM tb GROUP BY ROLLUP(a, b)");
}

#[test]
fn test_select_order_by_mixed_sources() {
    let mut st = select()
        .from("t1")
        .order_by("c1 ASC")
        .order_by(exp("c2 DESC"))
        .order_by(vec!["c3", "c4"])
        .order_by(map! { "c5" => "DESC" })
        .order_by(select().from("t2").select("t2.id"));
    assert_eq!(
        st.to_sql(),
        "SELECT * FROM t1 ORDER BY c1 ASC, c2 DESC, c3, c4, c5 DESC, (SELECT t2.id FROM t2)"
    );

    let mut st = select()
        .from("tb")
        .order_by("c1")
        .order_by_dir("c2", "ASC")
        .order_by_dir("c3", "DESC");
    assert_eq!(st.to_sql(), "SELECT * FROM tb ORDER BY c1, c2 ASC, c3 DESC");
}

#[test]
fn test_select_limit_offset() {
    let mut st = select().from("tb").limit(10);
    assert_eq!(st.to_sql(), "SELECT * FROM tb LIMIT 10");

    let mut st = select().from("tb").offset(12);
    assert_eq!(st.to_sql(), "SELECT * FROM tb OFFSET 12");

    let mut st = select().from("tb").limit(5).offset(10);
    assert_eq!(st.to_sql(), "SELECT * FROM tb LIMIT 5 OFFSET 10");

    let mut st = st.limit(-1).clean_offset();
    assert_eq!(st.to_sql(), "SELECT * FROM tb");
}

#[test]
fn test_select_locking() {
    let mut st = select().from("t1").for_update();
    assert_eq!(st.to_sql(), "SELECT * FROM t1 FOR UPDATE");

    let mut st = select()
        .from("t1")
        .limit(1)
        .offset(0)
        .for_share_of(vec!["t1", "t2"], "");
    assert_eq!(st.to_sql(), "SELECT * FROM t1 LIMIT 1 OFFSET 0 FOR SHARE OF t1, t2");

    let mut st = select().from("t1").for_no_key_update_of(Value::Null, "NOWAIT");
    assert_eq!(st.to_sql(), "SELECT * FROM t1 FOR NO KEY UPDATE NOWAIT");

    let mut st = select().from("t1").for_key_share_of("t1", "SKIP LOCKED");
    assert_eq!(st.to_sql(), "SELECT * FROM t1 FOR KEY SHARE OF t1 SKIP LOCKED");

    let mut st = st.for_update();
    assert_eq!(st.to_sql(), "SELECT * FROM t1 FOR UPDATE");

    let mut st = st.clean_lock();
    assert_eq!(st.to_sql(), "SELECT * FROM t1");
}

#[test]
fn test_select_union() {
    let mut st = select().from("t1").union(select().from("t2"));
    assert_eq!(st.to_sql(), "(SELECT * FROM t1) UNION (SELECT * FROM t2)");

    let mut st = select()
        .from("t1")
        .union(select().from("t2").order_by_dir("t2.id", "ASC"))
        .union(select().from("t3").order_by_dir("t3.id", "DESC"))
        .order_by_dir("id", "DESC");
    assert_eq!(
        st.to_sql(),
        "(SELECT * FROM t1) UNION (SELECT * FROM t2 ORDER BY t2.id ASC) UNION \
         (SELECT * FROM t3 ORDER BY t3.id DESC) ORDER BY id DESC"
    );

    let mut st = select()
        .from("t1")
        .union_all(select().from("t2"))
        .intersect(select().from("t3"))
        .except_all(select().from("t4"))
        .limit(5)
        .offset(10);
    assert_eq!(
        st.to_sql(),
        "(SELECT * FROM t1) UNION ALL (SELECT * FROM t2) INTERSECT (SELECT * FROM t3) \
         EXCEPT ALL (SELECT * FROM t4) LIMIT 5 OFFSET 10"
    );
}

#[test]
fn test_select_union_keeps_first_branch_parameters() {
    let _seq = ParameterSequence::new().scope();
    let mut st = select()
        .from("t1")
        .r#where(("a", "=", 1))
        .union(select().from("t2").r#where(("b", "=", 2)));
    assert_eq!(
        st.to_sql(),
        "(SELECT * FROM t1 WHERE a = :p1) UNION (SELECT * FROM t2 WHERE b = :p2)"
    );
    assert_eq!(st.params(), params(json!({"p1": 1, "p2": 2})));
}

#[test]
fn test_select_with() {
    let mut st = select().with(select().from("t1"), "tb").from("tb");
    assert_eq!(st.to_sql(), "WITH tb AS (SELECT * FROM t1) SELECT * FROM tb");

    let mut st = select()
        .with(select().from("t1"), "tb")
        .with(Value::Null, "n1")
        .with(Value::Null, "n2")
        .from("tb");
    assert_eq!(
        st.to_sql(),
        "WITH tb AS (SELECT * FROM t1), n1 AS NULL, n2 AS NULL SELECT * FROM tb"
    );
}

#[test]
fn test_select_with_recursive() {
    let _seq = ParameterSequence::new().scope();
    let mut st = select()
        .with_recursive(
            crate::postgresql::values(vec![1])
                .union_all(select().select("n + 1").from("t").r#where(("n", "<", 100))),
            "t(n)",
        )
        .select("SUM(n)")
        .from("t");
    assert_eq!(
        st.to_sql(),
        "WITH RECURSIVE t(n) AS ((VALUES (:p1)) UNION ALL (SELECT n + 1 FROM t WHERE n < :p2)) \
         SELECT SUM(n) FROM t"
    );
    assert_eq!(st.params(), params(json!({"p1": 1, "p2": 100})));
}

#[test]
fn test_select_full_clause_order() {
    let _seq = ParameterSequence::new().scope();
    let mut st = select()
        .with(select().from("t1"), "tb")
        .select(vec!["c1", "c2"])
        .from_as("tb1", "t")
        .inner_join("tb", "tb.id = t.id")
        .r#where(("c1", ">", 1))
        .group_by("c1")
        .having("COUNT(*) > 1")
        .order_by_dir("c2", "DESC")
        .limit(10)
        .offset(20)
        .for_update();
    assert_eq!(
        st.to_sql(),
        "WITH tb AS (SELECT * FROM t1) SELECT c1, c2 FROM tb1 t INNER JOIN tb ON tb.id = t.id \
         WHERE c1 > :p1 GROUP BY c1 HAVING COUNT(*) > 1 ORDER BY c2 DESC LIMIT 10 OFFSET 20 FOR UPDATE"
    );
}

// ==================== LIFECYCLE ====================

#[test]
fn test_select_copy_is_independent() {
    let _seq = ParameterSequence::new().scope();
    let mut st = select().from("tb").r#where(("c1", "=", 1));
    let mut copy = st.copy().and_where(("c2", "=", 2));
    assert_eq!(st.to_sql(), "SELECT * FROM tb WHERE c1 = :p1");
    assert_eq!(copy.to_sql(), "SELECT * FROM tb WHERE c1 = :p1 AND c2 = :p2");
    assert_eq!(st.params(), params(json!({"p1": 1})));
    assert_eq!(copy.params(), params(json!({"p1": 1, "p2": 2})));
}

#[test]
fn test_select_clean_resets_clauses() {
    let mut st = select()
        .select("c1")
        .from("tb")
        .r#where("c1 > 0")
        .order_by("c1")
        .limit(1)
        .for_update()
        .clean();
    assert_eq!(st.to_sql(), "SELECT *");
    assert!(st.params().is_empty());
}

#[test]
fn test_select_rebuilds_after_mutation() {
    let mut st = select().from("tb");
    assert_eq!(st.to_sql(), "SELECT * FROM tb");
    assert!(st.is_built());
    let mut st = st.r#where("c1 > 0");
    assert!(!st.is_built());
    assert_eq!(st.to_sql(), "SELECT * FROM tb WHERE c1 > 0");
}

#[test]
fn test_select_as_condition() {
    let mut st = select()
        .from("t1")
        .r#where(("EXISTS", select().from("t2").r#where("t2.id = t1.id")));
    assert_eq!(
        st.to_sql(),
        "SELECT * FROM t1 WHERE EXISTS (SELECT * FROM t2 WHERE t2.id = t1.id)"
    );
}

// ==================== FETCHING ====================

#[test]
fn test_fetch_rows_and_row() {
    let executor = MockExecutor::shared();
    let mut st = SelectStmt::with_executor(executor.clone()).from("tb");
    let rows = st.rows().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(executor.last_query().as_deref(), Some("SELECT * FROM tb"));

    let first = st.row().unwrap();
    assert_eq!(first, row(json!({"c1": "v1", "c2": "v2", "c3": "a"})));

    let mut st = st.limit(1).offset(1);
    assert_eq!(st.column().unwrap(), vec![json!("v3")]);
    assert_eq!(st.one().unwrap(), json!("v3"));
}

#[test]
fn test_fetch_without_executor() {
    let mut st = select().from("tb");
    assert!(st.rows().unwrap_err().is_missing_executor());
    assert!(st.one().unwrap_err().is_missing_executor());
}

#[test]
fn test_fetch_errors_pass_through() {
    let mut st = SelectStmt::with_executor(Arc::new(FailingExecutor)).from("tb");
    let err = st.rows().unwrap_err();
    assert_eq!(err.to_string(), "connection refused");
}

#[test]
fn test_pairs() {
    let mut st = SelectStmt::with_executor(MockExecutor::shared());
    let cases = [
        ("c1", "c2", json!({"v1": "v2", "v3": "v4", "v5": "v6"})),
        ("c2", "c1", json!({"v2": "v1", "v4": "v3", "v6": "v5"})),
        ("c3", "c1", json!({"a": "v1", "b": "v5"})),
    ];
    for (key, value, expected) in cases {
        assert_eq!(st.pairs(key, value).unwrap(), params(expected));
    }
}

#[test]
fn test_keyed_helpers_report_missing_key() {
    let mut st = SelectStmt::with_executor(MockExecutor::shared());
    for err in [
        st.pairs("c4", "c1").unwrap_err(),
        st.pairs("c1", "c4").unwrap_err(),
        st.rows_by_key("c4", false).unwrap_err(),
        st.rows_by_group("c4", false).unwrap_err(),
    ] {
        assert!(err.is_key_not_found());
        assert_eq!(err.to_string(), "key \"c4\" is not found in the row set");
    }
}

#[test]
fn test_rows_by_key() {
    let mut st = SelectStmt::with_executor(MockExecutor::shared());

    let rows = st.rows_by_key("c3", false).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows["a"], row(json!({"c1": "v1", "c2": "v2", "c3": "a"})));
    assert_eq!(rows["b"], row(json!({"c1": "v5", "c2": "v6", "c3": "b"})));

    let rows = st.rows_by_key("c1", true).unwrap();
    assert_eq!(rows["v3"], row(json!({"c2": "v4", "c3": "b"})));
}

#[test]
fn test_rows_by_group() {
    let mut st = SelectStmt::with_executor(MockExecutor::shared());
    let groups = st.rows_by_group("c3", true).unwrap();
    assert_eq!(groups["a"], vec![row(json!({"c1": "v1", "c2": "v2"}))]);
    assert_eq!(
        groups["b"],
        vec![
            row(json!({"c1": "v3", "c2": "v4"})),
            row(json!({"c1": "v5", "c2": "v6"})),
        ]
    );
}

#[test]
fn test_empty_result_yields_empty_collections() {
    let mut st = SelectStmt::with_executor(MockExecutor::shared()).offset(5);
    assert!(st.pairs("missing", "c1").unwrap().is_empty());
    assert!(st.rows_by_key("missing", false).unwrap().is_empty());
}

#[test]
fn test_column_of_and_one_of_restore_select_list() {
    let executor = MockExecutor::shared();
    let mut st = SelectStmt::with_executor(executor.clone())
        .select("c1, c2")
        .from("tb");
    st.column_of("c2").unwrap();
    assert_eq!(executor.last_query().as_deref(), Some("SELECT c2 FROM tb"));
    st.one_of("c3").unwrap();
    assert_eq!(executor.last_query().as_deref(), Some("SELECT c3 FROM tb"));
    assert_eq!(st.to_sql(), "SELECT c1, c2 FROM tb");
}

#[test]
fn test_count_drops_non_conditional_clauses() {
    let executor = MockExecutor::shared();
    let mut st = SelectStmt::with_executor(executor.clone())
        .from("tb")
        .r#where("c1 > 0")
        .group_by("c2")
        .order_by("c1")
        .limit(10)
        .offset(5);
    assert_eq!(st.count("*").unwrap(), 3);
    assert_eq!(
        executor.last_query().as_deref(),
        Some("SELECT COUNT(*) FROM tb WHERE c1 > 0")
    );
    assert_eq!(
        st.to_sql(),
        "SELECT * FROM tb WHERE c1 > 0 GROUP BY c2 ORDER BY c1 LIMIT 10 OFFSET 5"
    );

    st.count_with_non_conditional_clauses("c1").unwrap();
    assert_eq!(
        executor.last_query().as_deref(),
        Some("SELECT COUNT(c1) FROM tb WHERE c1 > 0 GROUP BY c2 ORDER BY c1 LIMIT 10 OFFSET 5")
    );
}

#[test]
fn test_paginate() {
    let mut st = select().from("tb").paginate(2, 10);
    assert_eq!(st.to_sql(), "SELECT * FROM tb LIMIT 10 OFFSET 20");
}

#[test]
fn test_paginate_saturates_offset() {
    let mut st = select().from("tb").paginate(i64::MAX, 2);
    assert_eq!(
        st.to_sql(),
        format!("SELECT * FROM tb LIMIT 2 OFFSET {}", i64::MAX)
    );

    let mut st = select().from("tb").paginate(3, -1);
    assert_eq!(st.to_sql(), "SELECT * FROM tb");
}

#[test]
fn test_pages() {
    let expected = [
        row(json!({"c1": "v1", "c2": "v2", "c3": "a"})),
        row(json!({"c1": "v3", "c2": "v4", "c3": "b"})),
        row(json!({"c1": "v5", "c2": "v6", "c3": "b"})),
    ];
    let mut st = SelectStmt::with_executor(MockExecutor::shared()).from("tb");
    for page in 0..2 {
        let rows: Vec<Row> = st.pages(2, page).map(Result::unwrap).collect();
        assert_eq!(rows, expected[(2 * page as usize)..].to_vec());
    }
}

#[test]
fn test_batches() {
    let mut st = SelectStmt::with_executor(MockExecutor::shared()).from("tb");
    let batches: Vec<Vec<Row>> = st.batches(2, 0).map(Result::unwrap).collect();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 2);
    assert_eq!(batches[1], vec![row(json!({"c1": "v5", "c2": "v6", "c3": "b"}))]);

    let batches: Vec<Vec<Row>> = st.batches(2, 1).map(Result::unwrap).collect();
    assert_eq!(batches.len(), 1);
}

#[test]
fn test_pages_and_batches_with_non_positive_size() {
    let db = MockExecutor::shared();
    let mut st = SelectStmt::with_executor(db.clone()).from("tb");

    let rows: Vec<Row> = st.pages(-1, 0).take(10).map(Result::unwrap).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(db.queries().len(), 1);

    let batches: Vec<Vec<Row>> = st.batches(-1, 0).take(10).map(Result::unwrap).collect();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 3);

    assert_eq!(st.pages(0, 0).take(10).count(), 0);
    assert_eq!(st.batches(0, 0).take(10).count(), 0);
    assert_eq!(db.queries().len(), 4);
}

#[test]
fn test_pages_stop_after_error() {
    let mut st = SelectStmt::with_executor(Arc::new(FailingExecutor)).from("tb");
    let results: Vec<_> = st.pages(2, 0).collect();
    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
}

// ==================== INSERT ====================

#[test]
fn test_insert_default_values() {
    let mut st = insert_into("tb");
    assert_eq!(st.to_sql(), "INSERT INTO tb DEFAULT VALUES");

    let mut st = insert_into("tb").columns(vec!["c1", "c2", "c3"]);
    assert_eq!(st.to_sql(), "INSERT INTO tb (c1, c2, c3) DEFAULT VALUES");
}

#[test]
fn test_insert_empty_value_list() {
    let mut st = InsertStmt::new().into("tb").values(Vec::<i32>::new());
    assert_eq!(st.to_sql(), "INSERT INTO tb DEFAULT VALUES");
    assert!(st.params().is_empty());

    let _seq = ParameterSequence::new().scope();
    let mut st = insert_into("tb")
        .values(vec![1])
        .values(Vec::<i32>::new())
        .values(vec![2]);
    assert_eq!(st.to_sql(), "INSERT INTO tb VALUES (:p1), (:p2)");
}

#[test]
fn test_insert_targets() {
    let _seq = ParameterSequence::new().scope();
    let mut st = InsertStmt::new().into_as("tb", "t").values(map! { "col" => "val" });
    assert_eq!(st.to_sql(), "INSERT INTO tb t (col) VALUES (:p1)");
    assert_eq!(st.params(), params(json!({"p1": "val"})));

    let mut st = InsertStmt::new().into(exp("tb AS t")).values(map! { "col" => "val" });
    assert_eq!(st.to_sql(), "INSERT INTO tb AS t (col) VALUES (:p2)");
}

#[test]
fn test_insert_values_shapes() {
    let seq = ParameterSequence::new();
    let _scope = seq.scope();

    let mut st = insert_into("tb").columns("c1, c2, c3").values("(1, 2, 3)");
    assert_eq!(st.to_sql(), "INSERT INTO tb (c1, c2, c3) VALUES (1, 2, 3)");

    let mut st = insert_into("tb")
        .columns(vec!["c1", "c2", "c3"])
        .values(vec!["v1", "v2", "v3"]);
    assert_eq!(st.to_sql(), "INSERT INTO tb (c1, c2, c3) VALUES (:p1, :p2, :p3)");

    seq.reset();
    let mut st = insert_into("tb").values_with_columns(
        list![
            vec!["v1", "v2", "v3"],
            vec!["v4", "v5", "v6"],
            vec!["v7", "v8", "v9"]
        ],
        vec!["c1", "c2", "c3"],
    );
    assert_eq!(
        st.to_sql(),
        "INSERT INTO tb (c1, c2, c3) VALUES (:p1, :p2, :p3), (:p4, :p5, :p6), (:p7, :p8, :p9)"
    );
    assert_eq!(st.params().get("p9"), Some(&json!("v9")));

    seq.reset();
    let mut st = insert_into("tb").values(map! { "c1" => "v1", "c2" => "v2", "c3" => "v3" });
    assert_eq!(st.to_sql(), "INSERT INTO tb (c1, c2, c3) VALUES (:p1, :p2, :p3)");

    seq.reset();
    let mut st = insert_into("tb").values(list![
        map! { "c1" => "v1", "c2" => "v2" },
        map! { "c1" => "v3", "c2" => "v4" }
    ]);
    assert_eq!(st.to_sql(), "INSERT INTO tb (c1, c2) VALUES (:p1, :p2), (:p3, :p4)");

    seq.reset();
    let mut st = insert_into("tb").values(vec!["v1", "v2", "v3"]);
    assert_eq!(st.to_sql(), "INSERT INTO tb VALUES (:p1, :p2, :p3)");
}

#[test]
fn test_insert_from_query() {
    let _seq = ParameterSequence::new().scope();
    let mut st = insert_into("t1")
        .columns(vec!["t1.c1", "t1.c2", "t1.c3"])
        .select(
            select()
                .from("t2")
                .select(vec!["t2.c1", "t2.c2", "t3.c3"])
                .r#where(("t2.c1", "=", 123)),
        );
    assert_eq!(
        st.to_sql(),
        "INSERT INTO t1 (t1.c1, t1.c2, t1.c3) SELECT t2.c1, t2.c2, t3.c3 FROM t2 WHERE t2.c1 = :p1"
    );
    assert_eq!(st.params(), params(json!({"p1": 123})));
}

#[test]
fn test_insert_on_conflict_do_nothing() {
    let mut st = insert_into("tb").on_conflict(Value::Null).do_nothing();
    assert_eq!(st.to_sql(), "INSERT INTO tb DEFAULT VALUES ON CONFLICT DO NOTHING");

    let mut st = insert_into("tb").on_conflict_do_nothing(Value::Null);
    assert_eq!(st.to_sql(), "INSERT INTO tb DEFAULT VALUES ON CONFLICT DO NOTHING");

    let mut st = insert_into("tb").on_conflict_do_nothing("col");
    assert_eq!(st.to_sql(), "INSERT INTO tb DEFAULT VALUES ON CONFLICT (col) DO NOTHING");
}

#[test]
fn test_insert_on_conflict_do_update() {
    let seq = ParameterSequence::new();
    let _scope = seq.scope();

    let mut st = insert_into("tb").on_conflict_do_update("c1", "c2", 123);
    assert_eq!(
        st.to_sql(),
        "INSERT INTO tb DEFAULT VALUES ON CONFLICT (c1) DO UPDATE SET c2 = :p1"
    );

    seq.reset();
    let mut st = insert_into("tb")
        .on_conflict(vec!["c1", "c2", "c3"])
        .do_update_set(map! { "c4" => 123, "c5" => "abc" });
    assert_eq!(
        st.to_sql(),
        "INSERT INTO tb DEFAULT VALUES ON CONFLICT (c1, c2, c3) DO UPDATE SET c4 = :p1, c5 = :p2"
    );
    assert_eq!(st.params(), params(json!({"p1": 123, "p2": "abc"})));

    seq.reset();
    let mut st = insert_into("tb")
        .on_conflict("c1")
        .on_conflict("c2")
        .do_update("c3", 123)
        .do_update("c4", "abc")
        .do_update("c5", exp("NULL"));
    assert_eq!(
        st.to_sql(),
        "INSERT INTO tb DEFAULT VALUES ON CONFLICT (c1, c2) DO UPDATE SET c3 = :p1, c4 = :p2, c5 = NULL"
    );
}

#[test]
fn test_insert_on_conflict_constraint_and_predicates() {
    let seq = ParameterSequence::new();
    let _scope = seq.scope();

    let mut st = insert_into("tb").on_conflict("c1").on_constraint("const_name");
    assert_eq!(
        st.to_sql(),
        "INSERT INTO tb DEFAULT VALUES ON CONFLICT (c1) ON CONSTRAINT const_name DO NOTHING"
    );

    let mut st = insert_into("tb")
        .on_conflict_where("c1", "c1 IS NULL")
        .on_conflict_where("c2", "c2 IS NULL");
    assert_eq!(
        st.to_sql(),
        "INSERT INTO tb DEFAULT VALUES ON CONFLICT (c1, c2) WHERE c1 IS NULL AND c2 IS NULL DO NOTHING"
    );

    let mut st = insert_into("tb").on_conflict_where(
        "c1",
        cond(("c2", "=", true)).or_where(("c3", ">", 5)),
    );
    assert_eq!(
        st.to_sql(),
        "INSERT INTO tb DEFAULT VALUES ON CONFLICT (c1) WHERE c2 = :p1 OR c3 > :p2 DO NOTHING"
    );
    assert_eq!(st.params(), params(json!({"p1": true, "p2": 5})));
}

#[test]
fn test_insert_do_update_where() {
    let _seq = ParameterSequence::new().scope();
    let mut st = insert_into("tb")
        .on_conflict("c1")
        .do_update_where("c1 = NULL", Value::Null, "c1 > 5")
        .do_update_where(
            "c2",
            123,
            cond(("c2", "<", 300)).and_where(("c3", ">", 5)),
        );
    assert_eq!(
        st.to_sql(),
        "INSERT INTO tb DEFAULT VALUES ON CONFLICT (c1) DO UPDATE SET c1 = NULL, c2 = :p3 \
         WHERE c1 > 5 AND (c2 < :p1 AND c3 > :p2)"
    );
    assert_eq!(st.params(), params(json!({"p1": 300, "p2": 5, "p3": 123})));
}

#[test]
fn test_insert_conflict_where_follows_last_target() {
    let _seq = ParameterSequence::new().scope();
    let mut st = insert_into("tb")
        .on_constraint("const")
        .on_conflict("c1")
        .r#where(("c2", "=", true))
        .r#where(("c3", "<", 3))
        .do_update("c3", 1)
        .and_where(("c5", ">", 10))
        .or_where(("c6", "<", 0));
    assert_eq!(
        st.to_sql(),
        "INSERT INTO tb DEFAULT VALUES ON CONFLICT (c1) WHERE c2 = :p1 AND c3 < :p2 ON CONSTRAINT const \
         DO UPDATE SET c3 = :p3 WHERE c5 > :p4 OR c6 < :p5"
    );
    assert_eq!(
        st.params(),
        params(json!({"p1": true, "p2": 3, "p3": 1, "p4": 10, "p5": 0}))
    );
}

#[test]
fn test_insert_returning() {
    let seq = ParameterSequence::new();
    let _scope = seq.scope();

    let mut st = insert_into("tb")
        .values(map! { "c1" => "v1" })
        .returning("c1")
        .returning_as("c2", Value::Null)
        .returning_as("col", "c3");
    assert_eq!(st.to_sql(), "INSERT INTO tb (c1) VALUES (:p1) RETURNING c1, c2, col c3");

    seq.reset();
    let mut st = insert_into("tb")
        .values(map! { "c1" => "v1" })
        .returning(map! { "a" => "c1", "b" => "c2", "c" => "c3" });
    assert_eq!(st.to_sql(), "INSERT INTO tb (c1) VALUES (:p1) RETURNING c1 a, c2 b, c3 c");

    seq.reset();
    let mut st = insert_into("tb1")
        .values(map! { "c1" => "v1" })
        .returning(map! {
            "a" => cond(("NOT EXISTS", select().from("tb2").r#where(("c2", "=", 0)))),
        });
    assert_eq!(
        st.to_sql(),
        "INSERT INTO tb1 (c1) VALUES (:p1) RETURNING (NOT EXISTS (SELECT * FROM tb2 WHERE c2 = :p2)) a"
    );
    assert_eq!(st.params(), params(json!({"p1": "v1", "p2": 0})));
}

#[test]
fn test_insert_copy_and_clean() {
    let _seq = ParameterSequence::new().scope();
    let st = InsertStmt::new()
        .into_as("tb", "t")
        .with("(SELECT * FROM t1)", "tb")
        .on_conflict("c1")
        .do_nothing()
        .values(map! { "c1" => "v1" })
        .returning(vec!["c1", "c2", "c3"]);
    let mut copy = st.copy();
    assert_eq!(
        copy.to_sql(),
        "WITH tb AS (SELECT * FROM t1) INSERT INTO tb t (c1) VALUES (:p1) \
         ON CONFLICT (c1) DO NOTHING RETURNING c1, c2, c3"
    );

    let mut st = st.clean();
    assert_eq!(st.to_sql(), "INSERT DEFAULT VALUES");
    assert!(st.params().is_empty());
}

#[test]
fn test_insert_exec() {
    let executor = MockExecutor::shared();
    let mut st = InsertStmt::with_executor(executor.clone())
        .into("tb")
        .values(map! { "c1" => "v1" });
    assert_eq!(st.exec("tb_id_seq").unwrap(), json!(1));
    assert_eq!(executor.queries().len(), 1);
}

// ==================== UPDATE ====================

#[test]
fn test_update_targets() {
    let mut st = UpdateStmt::new();
    assert_eq!(st.to_sql(), "UPDATE");

    let mut st = update("tb");
    assert_eq!(st.to_sql(), "UPDATE tb");

    let mut st = UpdateStmt::new().table_as("tb", "t");
    assert_eq!(st.to_sql(), "UPDATE tb t");

    let mut st = UpdateStmt::new().table(map! { "a" => "t1", "b" => "t2" });
    assert_eq!(st.to_sql(), "UPDATE t1 a, t2 b");

    let mut st = UpdateStmt::new().only_table("tb");
    assert_eq!(st.to_sql(), "UPDATE ONLY tb");
}

#[test]
fn test_update_assignments() {
    let _seq = ParameterSequence::new().scope();
    let mut st = update("t1")
        .assign("c1", "v1")
        .assign("c2", exp("DEFAULT"))
        .set(map! { "c3" => Value::Null })
        .set(map! { "(c4, c5)" => select().select(vec!["t2.c1", "t2.c2"]).from("t2") })
        .set(select().from("t3"))
        .set(vec!["c6 = 5"])
        .set(Value::Null);
    assert_eq!(
        st.to_sql(),
        "UPDATE t1 SET c1 = :p1, c2 = DEFAULT, c3 = NULL, \
         (c4, c5) = (SELECT t2.c1, t2.c2 FROM t2), (SELECT * FROM t3), c6 = 5, NULL"
    );
    assert_eq!(st.params(), params(json!({"p1": "v1"})));
}

#[test]
fn test_update_from_where_returning() {
    let _seq = ParameterSequence::new().scope();
    let mut st = update("tb")
        .assign("c1", "v1")
        .from(map! { "a" => "t1", "b" => "t2" })
        .r#where(("col", "BETWEEN", vec![1, 2]))
        .returning("*");
    assert_eq!(
        st.to_sql(),
        "UPDATE tb SET c1 = :p1 FROM t1 a, t2 b WHERE col BETWEEN :p2 AND :p3 RETURNING *"
    );
}

#[test]
fn test_update_with() {
    let mut st = update("tb")
        .with(select().from("src"), "s")
        .assign("c1", exp("s.c1"))
        .from("s");
    assert_eq!(
        st.to_sql(),
        "WITH s AS (SELECT * FROM src) UPDATE tb SET c1 = s.c1 FROM s"
    );
}

#[test]
fn test_update_exec() {
    let mut st = UpdateStmt::with_executor(MockExecutor::shared())
        .table("tb")
        .assign("c1", 1)
        .r#where("c2 > 0");
    assert_eq!(st.exec().unwrap(), 3);

    let mut st = update("tb").assign("c1", 1);
    assert!(st.exec().unwrap_err().is_missing_executor());
}

// ==================== DELETE ====================

#[test]
fn test_delete_targets() {
    let mut st = DeleteStmt::new();
    assert_eq!(st.to_sql(), "DELETE FROM");

    let mut st = delete_from("tb");
    assert_eq!(st.to_sql(), "DELETE FROM tb");

    let mut st = DeleteStmt::new().from_as("tb", "t");
    assert_eq!(st.to_sql(), "DELETE FROM tb t");

    let mut st = DeleteStmt::new().from(vec!["t1", "t2"]);
    assert_eq!(st.to_sql(), "DELETE FROM t1, t2");

    let mut st = DeleteStmt::new().from_only_as("tb", "t");
    assert_eq!(st.to_sql(), "DELETE FROM ONLY tb t");
}

#[test]
fn test_delete_using_where_returning() {
    let _seq = ParameterSequence::new().scope();
    let mut st = delete_from("tb")
        .using(map! { "a" => "t1", "b" => "t2" })
        .using(exp("t3 AS t"))
        .r#where(("col", "IN", vec![1, 2, 3]))
        .returning_as("col", "c");
    assert_eq!(
        st.to_sql(),
        "DELETE FROM tb USING t1 a, t2 b, t3 AS t WHERE col IN (:p1, :p2, :p3) RETURNING col c"
    );
    assert_eq!(st.params().len(), 3);
}

#[test]
fn test_delete_where_with_subqueries() {
    let _seq = ParameterSequence::new().scope();
    let mut st = delete_from("t1").r#where((select().from("t2").select("COUNT(*)"), ">", 5));
    assert_eq!(st.to_sql(), "DELETE FROM t1 WHERE (SELECT COUNT(*) FROM t2) > :p1");
}

#[test]
fn test_delete_fetch_returning_rows() {
    let mut st = DeleteStmt::with_executor(MockExecutor::shared())
        .from("tb")
        .returning("*");
    assert_eq!(st.rows().unwrap().len(), 3);
}

// ==================== MERGE ====================

#[test]
fn test_merge_then_delete() {
    let _seq = ParameterSequence::new().scope();
    let mut st = merge_into("target t")
        .using("source s")
        .on(("t.name", "=", "s.name"))
        .when_matched_then_delete();
    assert_eq!(
        st.to_sql(),
        "MERGE INTO target t USING source s ON t.name = :p1 WHEN MATCHED THEN DELETE"
    );
    assert_eq!(st.params(), params(json!({"p1": "s.name"})));
}

#[test]
fn test_merge_conditional_delete_and_returning() {
    let _seq = ParameterSequence::new().scope();
    let mut st = merge_into("target t")
        .using("source s")
        .on(("t.name", "=", "s.name"))
        .when_matched_and("t.age <> s.name")
        .then_delete()
        .returning("t.*");
    assert_eq!(
        st.to_sql(),
        "MERGE INTO target t USING source s ON t.name = :p1 \
         WHEN MATCHED AND t.age <> s.name THEN DELETE RETURNING t.*"
    );
}

#[test]
fn test_merge_insert_and_update_actions() {
    let _seq = ParameterSequence::new().scope();
    let st = MergeStmt::new()
        .with("(SELECT * FROM t1)", "source")
        .into_as("target", "t")
        .using_as("source", "s")
        .on(exp("t.c1 = s.c1"))
        .and_on("t.c2 = s.c2")
        .when_not_matched()
        .then_insert(
            InsertStmt::new()
                .columns(vec!["c1", "c2", "c3"])
                .values(vec!["v1", "v2", "v3"]),
        )
        .when_matched_and("s.c2 < 18")
        .then_update(
            UpdateStmt::new()
                .assign("c1", exp("s.c1"))
                .assign("c2", exp("s.c2")),
        )
        .when_matched_and("s.c2 > 18")
        .then_update(UpdateStmt::new().assign("c1", 1).assign("c2", "v"))
        .when_not_matched_and("s.c3 IS NULL")
        .then_do_nothing();
    let mut copy = st.copy();
    assert_eq!(
        copy.to_sql(),
        "WITH source AS (SELECT * FROM t1) MERGE INTO target t USING source s \
         ON t.c1 = s.c1 AND t.c2 = s.c2 \
         WHEN NOT MATCHED THEN INSERT (c1, c2, c3) VALUES (:p1, :p2, :p3) \
         WHEN MATCHED AND s.c2 < 18 THEN UPDATE SET c1 = s.c1, c2 = s.c2 \
         WHEN MATCHED AND s.c2 > 18 THEN UPDATE SET c1 = :p4, c2 = :p5 \
         WHEN NOT MATCHED AND s.c3 IS NULL THEN DO NOTHING"
    );
    assert_eq!(
        copy.params(),
        params(json!({"p1": "v1", "p2": "v2", "p3": "v3", "p4": 1, "p5": "v"}))
    );
}

#[test]
fn test_merge_clean() {
    let mut st = merge_into("target")
        .using("source")
        .on("t.c1 = s.c1")
        .when_not_matched_then_do_nothing()
        .when_matched_then_do_nothing()
        .clean();
    assert_eq!(st.to_sql(), "MERGE ");
    assert!(st.params().is_empty());
}

#[test]
fn test_merge_action_without_when_is_ignored() {
    let mut st = merge_into("t").using("s").on("t.id = s.id").then_delete();
    assert_eq!(st.to_sql(), "MERGE INTO t USING s ON t.id = s.id");
}

#[test]
fn test_merge_exec() {
    let mut st = MergeStmt::with_executor(MockExecutor::shared())
        .into("t")
        .using("s")
        .on("t.id = s.id")
        .when_matched_then_delete();
    assert_eq!(st.exec().unwrap(), 3);
}

// ==================== VALUES ====================

#[test]
fn test_values_shapes() {
    let seq = ParameterSequence::new();
    let _scope = seq.scope();

    let mut st = ValuesStmt::new();
    assert_eq!(st.to_sql(), "VALUES");

    let mut st = values("(1), (2), (3)");
    assert_eq!(st.to_sql(), "VALUES (1), (2), (3)");

    let mut st = values(vec![1, 2, 3]);
    assert_eq!(st.to_sql(), "VALUES (:p1, :p2, :p3)");
    assert_eq!(st.params(), params(json!({"p1": 1, "p2": 2, "p3": 3})));

    seq.reset();
    let mut st = values(list![list![1, 2], list!["a", "b", "c"]]);
    assert_eq!(st.to_sql(), "VALUES (:p1, :p2), (:p3, :p4, :p5)");

    seq.reset();
    let mut st = values(list![list![1], list!["a"], list![1, 2], list!["b"]]);
    assert_eq!(st.to_sql(), "VALUES (:p1), (:p2), (:p3, :p4), (:p5)");

    let mut st = values(exp("(1), (2)")).values(values(exp("(3)")));
    assert_eq!(st.to_sql(), "VALUES (1), (2), (VALUES (3))");
}

#[test]
fn test_values_empty_list() {
    let mut st = values(Vec::<i32>::new());
    assert_eq!(st.to_sql(), "VALUES");
    assert!(st.params().is_empty());

    let mut st = values(list![]);
    assert_eq!(st.to_sql(), "VALUES");
}

#[test]
fn test_values_order_limit_offset() {
    let mut st = values(exp("(1), (2), (3)"))
        .order_by_dir("1", "DESC")
        .limit(2)
        .offset(1);
    assert_eq!(st.to_sql(), "VALUES (1), (2), (3) ORDER BY 1 DESC LIMIT 2 OFFSET 1");
}

#[test]
fn test_values_union() {
    let mut st = values(exp("(1), (2), (3)")).union(select().from("tb"));
    assert_eq!(st.to_sql(), "(VALUES (1), (2), (3)) UNION (SELECT * FROM tb)");

    let mut st = values(exp("(1)")).except(values(exp("(2)")));
    assert_eq!(st.to_sql(), "(VALUES (1)) EXCEPT (VALUES (2))");
}

#[test]
fn test_values_fetch() {
    let mut st = ValuesStmt::with_executor(MockExecutor::shared()).values("(1)");
    assert_eq!(st.column().unwrap().len(), 3);
}
