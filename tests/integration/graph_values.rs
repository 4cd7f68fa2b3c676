#![allow(missing_docs)]

use enlace::graph::{decode, decode_graphid_array, GraphType, GraphValue, TypeRegistry};
use enlace::{DriverError, GraphId};

/// One result row as the statement layer would hand it over: a server type
/// identifier and the raw column text, per column.
const ROW: &[(&str, &str)] = &[
    ("vertex", r#"person[16.3]{"name": "Ann", "age": 7}"#),
    ("edge", r#"knows[5.7][16.3,16.4]{"since": 2020}"#),
    (
        "graphpath",
        r#"[person[16.3]{},knows[5.7][16.3,16.4]{},person[16.4]{}]"#,
    ),
    ("graphid", "16.4"),
    ("_graphid", "{16.3,16.4}"),
];

#[test]
fn a_full_row_decodes_through_the_registry() {
    let registry = TypeRegistry::with_defaults();
    let values: Vec<GraphValue> = ROW
        .iter()
        .map(|(ty, text)| registry.decode(ty, text).unwrap())
        .collect();

    let vertex = values[0].as_vertex().unwrap();
    assert_eq!(vertex.label(), "person");
    assert_eq!(vertex.entity().get_str("name"), Some("Ann"));
    assert_eq!(vertex.entity().get_i64("age"), Some(7));

    let edge = values[1].as_edge().unwrap();
    assert_eq!(edge.start_id(), vertex.id());
    assert_eq!(edge.end_id(), GraphId::new(16, 4));

    let path = values[2].as_path().unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path.start().id(), vertex.id());
    assert_eq!(path.end().id(), GraphId::new(16, 4));
    assert_eq!(path.edges()[0].id(), edge.id());

    assert_eq!(values[3], GraphValue::Id(GraphId::new(16, 4)));
    assert_eq!(
        values[4],
        GraphValue::IdArray(vec![GraphId::new(16, 3), GraphId::new(16, 4)])
    );
}

#[test]
fn wire_form_survives_a_decode_display_decode_cycle() {
    let registry = TypeRegistry::with_defaults();
    for (ty, text) in ROW {
        let first = registry.decode(ty, text).unwrap();
        let second = registry.decode(ty, &first.to_string()).unwrap();
        assert_eq!(first, second, "unstable wire form for {ty}");
    }
}

#[test]
fn graphid_text_round_trips_exactly() {
    let gid: GraphId = "16.3".parse().unwrap();
    assert_eq!(gid.to_string(), "16.3");
    assert!(decode_graphid_array("{}").unwrap().is_empty());
    assert_eq!(
        decode_graphid_array("{1.1,2.2}").unwrap(),
        [GraphId::new(1, 1), GraphId::new(2, 2)]
    );
}

#[test]
fn unknown_server_types_are_reported_distinctly() {
    let registry = TypeRegistry::with_defaults();
    let err = registry.decode("jsonb", "{}").unwrap_err();
    assert!(matches!(err, DriverError::UnknownType(name) if name == "jsonb"));
}

#[test]
fn error_taxonomy_distinguishes_format_from_shape() {
    // Broken grammar: format error.
    assert!(matches!(
        decode(GraphType::Edge, "knows[5.7][16.3]{}"),
        Err(DriverError::Format { .. })
    ));
    // Valid grammar, wrong JSON shape: type mismatch.
    assert!(matches!(
        decode(GraphType::Vertex, "person[16.3][1, 2]"),
        Err(DriverError::TypeMismatch { .. })
    ));
}

#[test]
fn decoders_share_no_state_across_values() {
    let registry = TypeRegistry::with_defaults();
    let good = r#"person[1.1]{"k": true}"#;
    assert!(registry.decode("vertex", "broken").is_err());
    // A failure leaves nothing behind that could taint the next decode.
    let v = registry.decode("vertex", good).unwrap();
    assert_eq!(v.as_vertex().unwrap().entity().get_bool("k"), Some(true));
}
