// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One adapter per source kind.
//!
//! Each adapter is a thin [`crate::GraphSource`] over a borrowed native
//! model and owns only its family's filtering rule; record assembly goes
//! through [`crate::extract`].

mod attribute_dict;
mod attribute_store;
mod binding;
mod property_map;
mod traversal;

pub use attribute_dict::{dict_graph_to_gjgf, DictSource};
pub use attribute_store::{attribute_graph_to_gjgf, pyntacle_to_gjgf, AttributeStoreSource};
pub use binding::{snap_to_gjgf, SnapSource};
pub use property_map::{property_graph_to_gjgf, PropertyMapSource};
pub use traversal::{edge_key, traversal_to_gjgf, SideChannel, TraversalSource};
