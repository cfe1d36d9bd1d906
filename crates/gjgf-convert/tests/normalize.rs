// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write as _;

use gjgf_convert::{
    normalize_graph_data, normalize_graph_data_with, ConvertError, ErrorKind, GraphInput,
    NormalizeOptions,
};
use gjgf_model::GraphBody;
use gjgf_native::{AttrDict, DictGraph, TraversalGraph};
use serde_json::{json, Value};
use tempfile::NamedTempFile;

fn bodies(input: &GraphInput) -> Vec<Value> {
    normalize_graph_data(input)
        .unwrap()
        .iter()
        .map(|body| body.to_value().unwrap())
        .collect()
}

fn sample_body() -> Value {
    json!({
        "directed": true,
        "label": "sample",
        "nodes": {"a": {"label": "A"}, "b": {}},
        "edges": [{"source": "a", "target": "b"}]
    })
}

fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn path_of(file: &NamedTempFile) -> String {
    file.path().to_str().unwrap().to_owned()
}

#[test]
fn literal_json_text_passes_through_unchanged() {
    let text = r#"{"graph":{"nodes":[{"id":0},{"id":1}],"edges":[{"source":0,"target":1}]}}"#;
    let out = normalize_graph_data(&GraphInput::from(text)).unwrap();
    assert_eq!(out.len(), 1);
    assert!(out[0].as_record().is_none());
    assert_eq!(
        out[0].to_value().unwrap(),
        json!({"nodes": [{"id": 0}, {"id": 1}], "edges": [{"source": 0, "target": 1}]})
    );
}

#[test]
fn text_and_dict_forms_normalize_identically() {
    let dict = json!({"graph": sample_body()});
    let from_dict = bodies(&GraphInput::from(dict.clone()));
    let from_text = bodies(&GraphInput::from(dict.to_string()));
    assert_eq!(from_dict, from_text);
    assert_eq!(from_dict, vec![sample_body()]);
}

#[test]
fn multi_graph_envelope_is_returned_as_is() {
    let g1 = json!({"nodes": {"x": {}}, "edges": [], "odd": [1, 2, 3]});
    let g2 = json!("not even an object");
    let out = bodies(&GraphInput::from(json!({"graphs": [g1.clone(), g2.clone()]})));
    assert_eq!(out, vec![g1, g2]);
}

#[test]
fn files_are_read_when_the_text_names_one() {
    let file = json_file(&json!({"graph": sample_body()}).to_string());
    assert_eq!(bodies(&GraphInput::from(path_of(&file))), vec![sample_body()]);
}

#[test]
fn empty_files_fall_back_to_json_parsing() {
    let file = json_file("");
    let err = normalize_graph_data(&GraphInput::from(path_of(&file))).unwrap_err();
    assert!(matches!(err, ConvertError::NotPathNorJson));
    assert_eq!(
        err.to_string(),
        "Given data is a string that is neither a filepath nor a valid JSON string."
    );
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn file_contents_must_be_json() {
    let file = json_file("graph: no");
    let err = normalize_graph_data(&GraphInput::from(path_of(&file))).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidJsonFile { .. }));
}

#[test]
fn oversized_files_are_rejected() {
    let file = json_file(&json!({"graph": sample_body()}).to_string());
    let options = NormalizeOptions {
        max_file_bytes: Some(8),
        ..NormalizeOptions::default()
    };
    let err = normalize_graph_data_with(&GraphInput::from(path_of(&file)), &options).unwrap_err();
    assert!(matches!(err, ConvertError::FileTooLarge { limit: 8, .. }));
}

#[test]
fn invalid_sequence_item_is_named_by_position() {
    let input = GraphInput::from(vec![
        GraphInput::from(json!({"graph": sample_body()})),
        GraphInput::from("not json, not a file"),
    ]);
    let err = normalize_graph_data(&input).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidItem { position: 1 }));
    assert!(err.to_string().contains("position 1"));
}

#[test]
fn json_arrays_are_sequences_too() {
    let text = json!([{"graph": sample_body()}, {"graph": {"nodes": {}, "edges": []}}]).to_string();
    let out = bodies(&GraphInput::from(text));
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], sample_body());

    let err = normalize_graph_data(&GraphInput::from(json!([{"graph": {}}, 3]))).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidItem { position: 1 }));
}

#[test]
fn mixed_sequences_keep_input_order() {
    let file = json_file(&json!({"graph": {"label": "from file"}}).to_string());
    let mut native = DictGraph::new();
    native.add_node(0, AttrDict::new());
    let input = GraphInput::from(vec![
        GraphInput::from(native),
        GraphInput::from(path_of(&file)),
        GraphInput::from(r#"{"graph": {"label": "from text"}}"#),
        GraphInput::from(json!({"graph": {"label": "from dict"}})),
    ]);
    let out = normalize_graph_data(&input).unwrap();
    assert_eq!(out.len(), 4);
    assert!(matches!(&out[0], GraphBody::Record(r) if r.nodes.contains_key("0")));
    let labels: Vec<_> = out[1..]
        .iter()
        .map(|body| body.as_json().unwrap()["label"].clone())
        .collect();
    assert_eq!(labels, vec![json!("from file"), json!("from text"), json!("from dict")]);
}

#[test]
fn native_graphs_are_converted_and_unwrapped() {
    let mut g = TraversalGraph::new(2, false);
    g.add_edge(0, 1).unwrap();
    let out = bodies(&GraphInput::traversal_bundle(g, [json!({"label": "kit"})]));
    assert_eq!(
        out,
        vec![json!({
            "directed": false,
            "label": "kit",
            "nodes": {"0": {}, "1": {}},
            "edges": [{"source": "0", "target": "1"}]
        })]
    );
}

#[test]
fn sequence_contract_errors() {
    assert!(matches!(
        normalize_graph_data(&GraphInput::from(Vec::<GraphInput>::new())),
        Err(ConvertError::EmptySequence)
    ));
    assert!(matches!(
        normalize_graph_data(&GraphInput::from(json!([]))),
        Err(ConvertError::EmptySequence)
    ));
    let lazy = GraphInput::unsized_stream(std::iter::repeat_with(|| {
        GraphInput::from(json!({"graph": {}}))
    }));
    let err = normalize_graph_data(&lazy).unwrap_err();
    assert!(matches!(err, ConvertError::UnsizedSequence));
    assert!(err.to_string().ends_with("Iterable without a fixed length."));
}

#[test]
fn unknown_shapes_are_format_errors() {
    for value in [json!({"nodes": {}}), json!(3), json!(null), json!(true)] {
        let err = normalize_graph_data(&GraphInput::from(value)).unwrap_err();
        assert!(matches!(err, ConvertError::Format));
        assert_eq!(
            err.to_string(),
            "The provided data seems not to be in a valid graph format."
        );
    }
}

#[test]
fn unreadable_directories_are_not_files() {
    let dir = tempfile::tempdir().unwrap();
    let err =
        normalize_graph_data(&GraphInput::from(dir.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, ConvertError::NotPathNorJson));
}
