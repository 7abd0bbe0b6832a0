//! K-medoids clustering for short text documents.
//!
//! `flock` groups a fixed corpus of short texts (tweets) into k clusters using
//! an iterative partitioning algorithm whose dissimilarity metric is the
//! Jaccard distance over bag-of-words token sets. Because token sets have no
//! numeric mean, every cluster representative is a *medoid*: a real document
//! drawn from the corpus.
//!
//! The primary public API is under [`cluster`], which provides:
//! - k-medoids (seeded random initialization, assignment/update iterations,
//!   convergence on unchanged medoids, SSE scoring)
//!
//! [`normalize`] holds the companion text cleaner that turns raw pipe-delimited
//! tweet records into the cleaned documents the engine consumes.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod normalize;

pub use cluster::{jaccard_distance, Clustering, IterationStats, KMedoids, KMedoidsFit};
pub use error::{Error, Result};
