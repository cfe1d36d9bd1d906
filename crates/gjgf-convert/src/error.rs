// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Conversion errors.

use std::path::PathBuf;

use thiserror::Error;

/// Caller-facing error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The supplied value cannot be interpreted as a graph.
    InvalidValue,
    /// A file named by the input could not be read.
    Io,
}

/// Error raised by the classifier, the adapters' dispatcher and the aggregator.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Overall input shape is not recognized.
    #[error("The provided data seems not to be in a valid graph format.")]
    Format,
    /// Text that names no non-empty file and does not parse as JSON.
    #[error("Given data is a string that is neither a filepath nor a valid JSON string.")]
    NotPathNorJson,
    /// A named file exists but could not be read.
    #[error("Could not read graph file {}: {source}", .path.display())]
    UnreadableFile {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A named file exceeds the configured size limit.
    #[error("Graph file {} is {size} bytes, above the {limit} byte limit.", .path.display())]
    FileTooLarge {
        /// File path.
        path: PathBuf,
        /// Actual size.
        size: u64,
        /// Configured limit.
        limit: u64,
    },
    /// A named file does not contain valid JSON.
    #[error("Graph file {} does not contain valid JSON: {source}", .path.display())]
    InvalidJsonFile {
        /// File path.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
    /// Native object of no supported family.
    #[error("Provided graph is not a graph object of a supported library.")]
    UnsupportedSource,
    /// A lazy stream whose length cannot be determined.
    #[error(
        "The provided data seems not to be in a valid graph format. Iterable without a fixed length."
    )]
    UnsizedSequence,
    /// A sequence with no items.
    #[error("The provided data seems not to be in a valid graph format. Iterable with zero items.")]
    EmptySequence,
    /// A sequence item that is neither a native graph, graph text nor a graph dict.
    #[error(
        "The provided data seems not to be in a valid graph format. Iterable with invalid item at position {position}."
    )]
    InvalidItem {
        /// 0-based index of the item.
        position: usize,
    },
    /// An aggregator item failed; the underlying cause is not exposed.
    #[error("Graph {position} of {count} could not be converted to gJGF.")]
    ItemConversion {
        /// 1-based position of the item.
        position: usize,
        /// Number of items.
        count: usize,
    },
}

impl ConvertError {
    /// Caller-facing category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnreadableFile { .. } => ErrorKind::Io,
            _ => ErrorKind::InvalidValue,
        }
    }
}
