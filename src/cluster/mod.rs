//! Clustering for short text documents.
//!
//! This module provides partitional clustering over bag-of-words token sets.
//!
//! ## Why medoids, not means
//!
//! Classic k-means updates each centroid to the *mean* of its members. A set
//! of word tokens has no mean, so the representative of a cluster is instead
//! its **medoid**: the member document minimizing the sum of distances to all
//! other members of the same cluster. Medoids keep every centroid a real
//! document from the corpus.
//!
//! ## Algorithm (k-medoids, Jaccard distance)
//!
//! 1. Pick k distinct documents at random as initial medoids.
//! 2. *Assignment*: each document joins the cluster of its nearest medoid
//!    (ties go to the first minimum in cluster order).
//! 3. *Update*: each cluster recomputes its medoid with an O(m²) scan.
//! 4. Repeat until no medoid changed, or an iteration cap (default 50).
//!
//! **Objective** (reported, not directly minimized):
//!
//! ```text
//! SSE = Σ_k Σ_{d ∈ C_k} jaccard(d, medoid_k)²
//! ```
//!
//! ## Distance
//!
//! Jaccard distance between the unique-token sets A and B of two documents:
//!
//! ```text
//! d(A, B) = 1 - |A ∩ B| / |A ∪ B|
//! ```
//!
//! Symmetric, bounded in [0, 1], zero only for identical token sets. Token
//! order and repetitions do not affect it.
//!
//! ## Usage
//!
//! ```rust
//! use flock::cluster::{Clustering, KMedoids};
//!
//! let docs: Vec<String> = ["a b c", "a b d", "x y z", "x y w"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let labels = KMedoids::new(2).with_seed(42).fit_predict(&docs).unwrap();
//! assert_eq!(labels[0], labels[1]); // "a b c" with "a b d"
//! assert_ne!(labels[0], labels[2]); // separate from the "x y" pair
//! ```

mod kmedoids;
mod traits;

pub use kmedoids::{jaccard_distance, IterationStats, KMedoids, KMedoidsFit};
pub use traits::Clustering;
