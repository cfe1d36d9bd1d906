// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use gjgf_convert::{multiple_to_gjgf, ConvertError, ErrorKind, GraphInput};
use gjgf_native::{AttributeGraph, DictGraph, PropertyGraph, SnapGraph, SnapType, TraversalGraph};
use serde_json::json;

fn natives() -> Vec<GraphInput> {
    let mut attr = AttributeGraph::new(false);
    attr.add_vertices(3);
    vec![
        PropertyGraph::new(true).into(),
        attr.into(),
        GraphInput::traversal_bundle(TraversalGraph::new(1, false), [json!({"label": "kit"})]),
        DictGraph::new_directed().into(),
        SnapGraph::new(SnapType::UndirNet).into(),
    ]
}

#[test]
fn collects_every_family_in_order() {
    let collection = multiple_to_gjgf(&natives()).unwrap();
    let directed: Vec<bool> = collection.graphs.iter().map(|g| g.directed).collect();
    assert_eq!(directed, vec![true, false, false, true, false]);
    assert_eq!(collection.graphs[1].node_count(), 3);
    assert_eq!(collection.graphs[2].label.as_deref(), Some("kit"));

    let value = serde_json::to_value(&collection).unwrap();
    assert!(value["graphs"][0].get("graph").is_none());
}

#[test]
fn failure_reports_position_and_count_only() {
    let mut dict = DictGraph::new();
    dict.add_node("a", Default::default());
    let err = multiple_to_gjgf(&[dict.into(), GraphInput::from("garbage")]).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::ItemConversion {
            position: 2,
            count: 2
        }
    ));
    assert!(err.to_string().contains("Graph 2 of 2"));
    assert!(std::error::Error::source(&err).is_none());
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn first_failure_wins() {
    let inputs = vec![
        GraphInput::from(json!({"graph": {}})),
        GraphInput::from(PropertyGraph::new(false)),
        GraphInput::from(json!(null)),
    ];
    let err = multiple_to_gjgf(&inputs).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Graph 1 of 3 could not be converted to gJGF."
    );
}

#[test]
fn empty_input_gives_an_empty_collection() {
    let collection = multiple_to_gjgf(&[]).unwrap();
    assert!(collection.graphs.is_empty());
}
