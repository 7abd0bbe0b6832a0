use thiserror::Error;

/// Errors returned by the clustering engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The corpus contains no documents.
    #[error("empty corpus")]
    EmptyCorpus,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is incompatible with the corpus.
    #[error("invalid cluster count: requested {requested}, but corpus has {n_docs} documents")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of documents in the corpus.
        n_docs: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
