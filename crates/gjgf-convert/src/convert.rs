// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Dispatching entry point and the multi-graph aggregator.

use gjgf_model::{Gjgf, GjgfCollection};
use tracing::{debug, warn};

use crate::adapters::{
    attribute_graph_to_gjgf, dict_graph_to_gjgf, property_graph_to_gjgf, snap_to_gjgf,
    traversal_to_gjgf, SideChannel,
};
use crate::detect::{recognize, Recognized};
use crate::{ConvertError, GraphInput};

/// Run the adapter matching an already-recognized value.
pub fn convert_recognized(recognized: Recognized<'_>) -> Gjgf {
    match recognized {
        Recognized::PropertyMap(graph) => property_graph_to_gjgf(graph),
        Recognized::AttributeStore(graph) => attribute_graph_to_gjgf(graph),
        Recognized::CallbackTraversal {
            graph,
            side_channel,
        } => traversal_to_gjgf(graph, &SideChannel::from_bundle(side_channel)),
        Recognized::AttributeDict(graph) => dict_graph_to_gjgf(graph),
        Recognized::NativeBinding(graph) => snap_to_gjgf(graph),
    }
}

/// Convert a native graph of any supported family.
///
/// # Errors
/// [`ConvertError::UnsupportedSource`] when no adapter applies.
pub fn any_to_gjgf(input: &GraphInput) -> Result<Gjgf, ConvertError> {
    let recognized = recognize(input).ok_or(ConvertError::UnsupportedSource)?;
    debug!(kind = %recognized.kind(), "converting native graph");
    Ok(convert_recognized(recognized))
}

/// Convert several native graphs (families may differ) into one collection.
///
/// All-or-nothing: the first failing item aborts the call with its 1-based
/// position. The underlying cause is logged, not returned.
///
/// # Errors
/// [`ConvertError::ItemConversion`] for the first item that fails.
pub fn multiple_to_gjgf(graphs: &[GraphInput]) -> Result<GjgfCollection, ConvertError> {
    let count = graphs.len();
    let graphs = graphs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            any_to_gjgf(input).map(|gjgf| gjgf.graph).map_err(|err| {
                let position = index + 1;
                warn!(position, count, error = %err, "graph could not be converted");
                ConvertError::ItemConversion { position, count }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(GjgfCollection { graphs })
}
