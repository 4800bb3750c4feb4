//! Error types for out-of-contract inputs.
//!
//! The mapping algorithm itself cannot fail on well-formed input; these errors exist
//! so a malformed URI or path is reported instead of turned into a misleading result.

use thiserror::Error;

/// Failure while converting between server URIs and client paths.
#[derive(Debug, Error)]
pub enum PathMapError {
    /// The server location could not be parsed as a URI at all.
    #[error("invalid URI {uri:?}: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// The URI parsed, but it does not use the `file` scheme.
    #[error("not a file URI: {uri:?}")]
    NotAFileUri { uri: String },

    /// The client path is not absolute or could not be turned into a `file://` URI.
    #[error("cannot build a file URI from path {path:?}: expected an absolute path")]
    InvalidFilePath { path: String },

    #[error(transparent)]
    Relativize(#[from] RelativizeError),
}

/// Failure while computing a relative reference between two URIs.
#[derive(Debug, Error)]
pub enum RelativizeError {
    #[error("invalid URI {uri:?}: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// `mailto:`-style URIs have no hierarchical path to relativize against.
    #[error("URI {uri:?} cannot be used as a base")]
    CannotBeABase { uri: String },
}
