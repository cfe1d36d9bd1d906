// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Input classification: any accepted shape in, ordered graph bodies out.
//!
//! Resolution order:
//! 1. text naming a non-empty file is read as JSON, other text is parsed as JSON;
//! 2. a recognized native graph (or traversal bundle) goes through its adapter;
//! 3. `{"graph": body}` yields `body`;
//! 4. `{"graphs": [..]}` yields the list unchanged;
//! 5. a sequence is classified item by item;
//! 6. empty and unsized sequences are rejected;
//! 7. anything else is a format error.
//!
//! Bodies that arrive as JSON are never re-derived: ids and shapes pass
//! through exactly as supplied.

use std::fs;
use std::path::Path;

use gjgf_model::GraphBody;
use serde_json::Value;
use tracing::debug;

use crate::convert::convert_recognized;
use crate::detect::{recognize, Recognized};
use crate::{ConvertError, GraphInput, NormalizeOptions};

/// Normalize `input` with default [`NormalizeOptions`].
///
/// # Errors
/// See [`normalize_graph_data_with`].
pub fn normalize_graph_data(input: &GraphInput) -> Result<Vec<GraphBody>, ConvertError> {
    normalize_graph_data_with(input, &NormalizeOptions::default())
}

/// Normalize `input` into graph bodies, outer `"graph"` wrapper stripped.
///
/// # Errors
/// - [`ConvertError::NotPathNorJson`] for text that is neither.
/// - [`ConvertError::UnreadableFile`], [`ConvertError::FileTooLarge`] or
///   [`ConvertError::InvalidJsonFile`] when a named file cannot be used.
/// - [`ConvertError::EmptySequence`], [`ConvertError::UnsizedSequence`] or
///   [`ConvertError::InvalidItem`] for unusable sequences.
/// - [`ConvertError::Format`] for any other shape.
pub fn normalize_graph_data_with(
    input: &GraphInput,
    options: &NormalizeOptions,
) -> Result<Vec<GraphBody>, ConvertError> {
    if let Some(text) = input.as_text() {
        let value = resolve_text(text, options)?;
        return normalize_json(&value, options);
    }
    if let Some(recognized) = recognize(input) {
        debug!(kind = %recognized.kind(), "single native graph");
        return Ok(vec![GraphBody::Record(convert_recognized(recognized).graph)]);
    }
    match input {
        GraphInput::Json(value) => normalize_json(value, options),
        GraphInput::Sequence(items) => {
            normalize_items(items.iter().map(Item::Input), items.len(), options)
        }
        GraphInput::Unsized(_) => Err(ConvertError::UnsizedSequence),
        GraphInput::Text(_) | GraphInput::Native(_) => Err(ConvertError::Format),
    }
}

fn normalize_json(
    value: &Value,
    options: &NormalizeOptions,
) -> Result<Vec<GraphBody>, ConvertError> {
    match value {
        Value::Object(map) => {
            if let Some(graph) = map.get("graph") {
                debug!("single graph envelope");
                return Ok(vec![GraphBody::Json(graph.clone())]);
            }
            match map.get("graphs") {
                Some(Value::Array(graphs)) => {
                    debug!(count = graphs.len(), "multi-graph envelope");
                    Ok(graphs.iter().cloned().map(GraphBody::Json).collect())
                }
                _ => Err(ConvertError::Format),
            }
        }
        Value::Array(items) => normalize_items(items.iter().map(Item::Json), items.len(), options),
        _ => Err(ConvertError::Format),
    }
}

/// One element of a sequence, either a caller-supplied input or an element
/// of a parsed JSON array.
#[derive(Debug, Clone, Copy)]
enum Item<'a> {
    Input(&'a GraphInput),
    Json(&'a Value),
}

impl<'a> Item<'a> {
    fn recognized(self) -> Option<Recognized<'a>> {
        match self {
            Self::Input(input) => recognize(input),
            Self::Json(_) => None,
        }
    }

    fn text(self) -> Option<&'a str> {
        match self {
            Self::Input(input) => input.as_text(),
            Self::Json(Value::String(text)) => Some(text.as_str()),
            Self::Json(_) => None,
        }
    }

    fn json(self) -> Option<&'a Value> {
        match self {
            Self::Input(GraphInput::Json(value)) | Self::Json(value) => Some(value),
            Self::Input(_) => None,
        }
    }
}

fn normalize_items<'a>(
    items: impl Iterator<Item = Item<'a>>,
    len: usize,
    options: &NormalizeOptions,
) -> Result<Vec<GraphBody>, ConvertError> {
    if len == 0 {
        return Err(ConvertError::EmptySequence);
    }
    debug!(count = len, "sequence of graphs");
    items
        .enumerate()
        .map(|(position, item)| normalize_item(item, position, options))
        .collect()
}

fn normalize_item(
    item: Item<'_>,
    position: usize,
    options: &NormalizeOptions,
) -> Result<GraphBody, ConvertError> {
    if let Some(recognized) = item.recognized() {
        return Ok(GraphBody::Record(convert_recognized(recognized).graph));
    }
    let resolved;
    let value = match item.text() {
        Some(text) => {
            resolved = resolve_text(text, options).map_err(|err| {
                debug!(position, error = %err, "sequence item did not resolve");
                ConvertError::InvalidItem { position }
            })?;
            &resolved
        }
        None => item.json().ok_or(ConvertError::InvalidItem { position })?,
    };
    value
        .as_object()
        .and_then(|map| map.get("graph"))
        .cloned()
        .map(GraphBody::Json)
        .ok_or(ConvertError::InvalidItem { position })
}

fn resolve_text(text: &str, options: &NormalizeOptions) -> Result<Value, ConvertError> {
    if options.resolve_file_paths {
        if let Some(size) = nonempty_file_size(Path::new(text)) {
            debug!(path = text, size, "reading graph file");
            return read_json_file(Path::new(text), size, options);
        }
    }
    serde_json::from_str(text).map_err(|_| ConvertError::NotPathNorJson)
}

fn nonempty_file_size(path: &Path) -> Option<u64> {
    fs::metadata(path)
        .ok()
        .filter(|meta| meta.is_file() && meta.len() > 0)
        .map(|meta| meta.len())
}

fn read_json_file(
    path: &Path,
    size: u64,
    options: &NormalizeOptions,
) -> Result<Value, ConvertError> {
    if let Some(limit) = options.max_file_bytes {
        if size > limit {
            return Err(ConvertError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }
    let bytes = fs::read(path).map_err(|source| ConvertError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ConvertError::InvalidJsonFile {
        path: path.to_path_buf(),
        source,
    })
}
