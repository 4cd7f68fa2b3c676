#![allow(missing_docs)]

use std::collections::HashMap;

use enlace::query::rewrite;
use enlace::DriverError;

#[test]
fn rewrites_a_realistic_graph_query() {
    let q = "MATCH (n:person)-[r:knows]->(m:person) \
             WHERE n.name = $name AND r.since > $since \
             RETURN m.name AS \"friend $list\", '$' || m.title -- trailing $note";
    let r = rewrite(q).unwrap();
    assert_eq!(
        r.sql(),
        "MATCH (n:person)-[r:knows]->(m:person) \
         WHERE n.name = ? AND r.since > ? \
         RETURN m.name AS \"friend $list\", '$' || m.title -- trailing $note"
    );
    assert_eq!(r.parameter_names(), ["name", "since"]);
}

#[test]
fn placeholder_count_always_matches_name_count() {
    let queries = [
        "SELECT 1",
        "SELECT $a",
        "SELECT $a, $b, $a, $b",
        "SELECT '$a', $b -- $c\n, $d /* $e */, $$ $f $$",
        "CREATE (n {p: $props}) RETURN n",
        "SELECT $tag$ unclosed, $p",
    ];
    for q in queries {
        let r = rewrite(q).unwrap();
        let markers = r.sql().matches('?').count();
        assert_eq!(
            markers,
            r.parameter_count(),
            "marker/name mismatch for {q:?}"
        );
    }
}

#[test]
fn rewrite_then_bind_produces_positional_values() {
    let r = rewrite("MATCH (n) WHERE n.name = $name AND n.age > $age AND n.nick = $name RETURN n")
        .unwrap();
    assert_eq!(r.parameter_names(), ["name", "age", "name"]);
    assert_eq!(r.ordinals("name"), [1, 3]);

    let mut values = HashMap::new();
    values.insert("name".to_owned(), "Ann");
    values.insert("age".to_owned(), "7");
    let bound = r.bind(&values).unwrap();
    assert_eq!(bound, [&"Ann", &"7", &"Ann"]);
}

#[test]
fn degraded_inputs_still_rewrite() {
    // Unterminated units consume the remainder instead of failing.
    for (q, expected) in [
        ("SELECT $p, 'open", "SELECT ?, 'open"),
        ("SELECT $p, \"open", "SELECT ?, \"open"),
        ("SELECT $p /* open", "SELECT ? /* open"),
        ("SELECT $p -- open", "SELECT ? -- open"),
    ] {
        let r = rewrite(q).unwrap();
        assert_eq!(r.sql(), expected);
        assert_eq!(r.parameter_names(), ["p"]);
    }
}

#[test]
fn double_rewrite_is_stable() {
    let q = "SELECT $a, '$b', $$tag $c$$, d$e, $1";
    let once = rewrite(q).unwrap();
    let twice = rewrite(once.sql()).unwrap();
    assert_eq!(twice.sql(), once.sql());
    assert!(twice.parameter_names().is_empty());
}

#[test]
fn empty_query_is_rejected_up_front() {
    assert!(matches!(rewrite(""), Err(DriverError::InvalidArgument(_))));
}
