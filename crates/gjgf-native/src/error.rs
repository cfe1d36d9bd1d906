// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors raised while populating a native graph model.

use thiserror::Error;

/// Mutation error on one of the native graph models.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativeError {
    /// A node/vertex id that is not part of the graph.
    #[error("unknown node: {0}")]
    UnknownNode(String),
    /// An edge id that is not part of the graph.
    #[error("unknown edge: {0}")]
    UnknownEdge(String),
    /// A property map that was never declared.
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    /// Value does not fit the declared property type.
    #[error("property {property} expects {expected}")]
    TypeMismatch {
        /// Property name.
        property: String,
        /// Declared value type.
        expected: &'static str,
    },
    /// Attribute access on a subtype without an attribute store.
    #[error("{0} does not support attributes")]
    NotAttributed(&'static str),
}
