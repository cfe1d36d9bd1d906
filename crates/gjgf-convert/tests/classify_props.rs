// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use gjgf_convert::{normalize_graph_data, GraphInput, NormalizeOptions};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn no_files() -> NormalizeOptions {
    NormalizeOptions {
        resolve_file_paths: false,
        ..NormalizeOptions::default()
    }
}

proptest! {
    // Arbitrary JSON either normalizes or fails with an error; it never panics.
    #[test]
    fn arbitrary_json_never_panics(value in arb_json()) {
        let _ = normalize_graph_data(&GraphInput::from(value));
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,32}") {
        let _ = gjgf_convert::normalize_graph_data_with(&GraphInput::from(text), &no_files());
    }

    // Text and parsed forms of the same single-graph envelope agree.
    #[test]
    fn envelope_text_matches_dict(body in arb_json()) {
        let envelope = json!({"graph": body});
        let from_dict: Vec<Value> = normalize_graph_data(&GraphInput::from(envelope.clone()))
            .unwrap()
            .iter()
            .map(|b| b.to_value().unwrap())
            .collect();
        let from_text: Vec<Value> = gjgf_convert::normalize_graph_data_with(
            &GraphInput::from(envelope.to_string()),
            &no_files(),
        )
        .unwrap()
        .iter()
        .map(|b| b.to_value().unwrap())
        .collect();
        prop_assert_eq!(&from_dict, &from_text);
        prop_assert_eq!(from_dict, vec![body]);
    }

    // Passthrough bodies come back exactly as given, in order.
    #[test]
    fn graphs_envelope_is_identity(graphs in prop::collection::vec(arb_json(), 0..5)) {
        let out: Vec<Value> = normalize_graph_data(&GraphInput::from(json!({"graphs": graphs.clone()})))
            .unwrap()
            .iter()
            .map(|b| b.to_value().unwrap())
            .collect();
        prop_assert_eq!(out, graphs);
    }
}
