//! K-medoids clustering under Jaccard distance.
//!
//! # The Algorithm
//!
//! A partitional algorithm in the k-means family, adapted to documents:
//!
//! 1. **Initialization**: sample k distinct documents uniformly at random as
//!    the initial medoids.
//! 2. **Assignment**: every document joins the cluster whose medoid is
//!    nearest under Jaccard distance. Ties break to the first minimum in
//!    cluster order, so the pass is deterministic given the medoid order.
//! 3. **Update**: each cluster replaces its medoid with the member document
//!    minimizing the sum of Jaccard distances to all members of that cluster
//!    (an O(m²) scan per cluster of size m).
//! 4. **Convergence**: the run stops when every cluster's new medoid is
//!    textually identical to its previous one, or when the iteration cap is
//!    reached (default 50).
//!
//! Clusters and medoids are rebuilt wholesale each iteration; the corpus is
//! never mutated.
//!
//! ## SSE
//!
//! After the loop, the fit is scored by the sum of squared errors: the
//! squared distance of every document to its cluster's medoid. SSE is *not*
//! guaranteed to decrease monotonically per iteration (a medoid swap can
//! transiently raise it); only termination is guaranteed, via the cap.
//!
//! ## Empty clusters
//!
//! A cluster can legitimately receive zero documents, e.g. when the corpus
//! holds fewer distinct documents than k. Such a cluster keeps its previous
//! medoid unchanged through the update step.
//!
//! ## Complexity
//!
//! - **Assignment**: O(n·k) distance evaluations per iteration.
//! - **Update**: O(Σ m²) per iteration, worst case O(n²).
//! - **Space**: O(n) for token sets, labels, and cluster membership.

use std::collections::HashSet;

use log::debug;
use rand::prelude::*;

use super::traits::Clustering;
use crate::error::{Error, Result};

/// K-medoids clusterer for text documents.
#[derive(Debug, Clone)]
pub struct KMedoids {
    /// Number of clusters.
    k: usize,
    /// Iteration cap; the run stops here even without convergence.
    max_iter: usize,
    /// Optional RNG seed for reproducible initialization.
    seed: Option<u64>,
}

/// Result of a k-medoids fit.
#[derive(Debug, Clone)]
pub struct KMedoidsFit {
    /// Cluster label for each document, in corpus order. Labels are in `0..k`.
    pub labels: Vec<usize>,
    /// Corpus index of each cluster's medoid.
    pub medoids: Vec<usize>,
    /// Member document indices per cluster, in corpus order.
    pub clusters: Vec<Vec<usize>>,
    /// Sum of squared Jaccard distances of every document to its medoid.
    pub sse: f32,
    /// Number of iterations executed.
    pub iterations: usize,
    /// Whether the run converged before hitting the iteration cap.
    pub converged: bool,
    /// Per-iteration progress trace.
    pub history: Vec<IterationStats>,
}

/// Progress snapshot for one iteration.
#[derive(Debug, Clone)]
pub struct IterationStats {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Number of documents per cluster after this iteration's assignment pass.
    pub cluster_sizes: Vec<usize>,
}

impl KMedoids {
    /// Create a new k-medoids clusterer with `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 50,
            seed: None,
        }
    }

    /// Set the iteration cap (default 50).
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set an RNG seed for reproducible initialization.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cluster the corpus, returning the full fit: partition, medoids, SSE,
    /// and the per-iteration trace.
    ///
    /// Validation happens up front, before any clustering work:
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyCorpus`] if `docs` is empty.
    /// - [`Error::InvalidParameter`] if `k` or `max_iter` is zero.
    /// - [`Error::InvalidClusterCount`] if `k` exceeds the corpus size.
    pub fn fit(&self, docs: &[String]) -> Result<KMedoidsFit> {
        let n = docs.len();
        if n == 0 {
            return Err(Error::EmptyCorpus);
        }
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        if self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_docs: n,
            });
        }

        // Token sets are fixed for the whole run; compute them once.
        let sets: Vec<HashSet<&str>> = docs
            .iter()
            .map(|d| d.split_whitespace().collect())
            .collect();

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        // Initial medoids: k distinct corpus indices, uniformly at random.
        let mut medoids: Vec<usize> = rand::seq::index::sample(&mut rng, n, self.k).into_vec();

        let mut clusters: Vec<Vec<usize>> = Vec::new();
        let mut history: Vec<IterationStats> = Vec::new();
        let mut converged = false;
        let mut iterations = 0;

        for iteration in 0..self.max_iter {
            iterations = iteration + 1;

            clusters = assign(&sets, &medoids);
            let new_medoids = update_medoids(&sets, &clusters, &medoids);

            let cluster_sizes: Vec<usize> = clusters.iter().map(Vec::len).collect();
            debug!(
                "iteration {iteration}: cluster sizes {:?}",
                cluster_sizes
            );
            history.push(IterationStats {
                iteration,
                cluster_sizes,
            });

            // Converged when every medoid document is textually unchanged.
            // Duplicate documents can occupy different indices, so compare
            // text rather than indices.
            let unchanged = medoids
                .iter()
                .zip(&new_medoids)
                .all(|(&old, &new)| docs[old] == docs[new]);

            medoids = new_medoids;
            if unchanged {
                converged = true;
                break;
            }
        }

        let mut labels = vec![0usize; n];
        for (cluster_idx, members) in clusters.iter().enumerate() {
            for &doc_idx in members {
                labels[doc_idx] = cluster_idx;
            }
        }

        let sse = sum_squared_error(&sets, &clusters, &medoids);

        Ok(KMedoidsFit {
            labels,
            medoids,
            clusters,
            sse,
            iterations,
            converged,
            history,
        })
    }
}

impl Clustering for KMedoids {
    fn fit_predict(&self, docs: &[String]) -> Result<Vec<usize>> {
        Ok(self.fit(docs)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Jaccard distance between the unique-token sets of two documents:
/// `1 - |A ∩ B| / |A ∪ B|`.
///
/// Symmetric, bounded in [0, 1], and zero only for identical token sets.
/// Two empty documents are at distance 0; an empty document is at distance 1
/// from any non-empty one.
pub fn jaccard_distance(a: &str, b: &str) -> f32 {
    let set_a: HashSet<&str> = a.split_whitespace().collect();
    let set_b: HashSet<&str> = b.split_whitespace().collect();
    jaccard(&set_a, &set_b)
}

fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> f32 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    1.0 - intersection as f32 / union as f32
}

/// Assignment pass: every document joins the cluster of its nearest medoid.
///
/// Medoids are scanned in cluster order, and only a strictly smaller distance
/// replaces the running minimum, so ties go to the first minimum encountered.
fn assign(sets: &[HashSet<&str>], medoids: &[usize]) -> Vec<Vec<usize>> {
    let mut clusters: Vec<Vec<usize>> = vec![Vec::new(); medoids.len()];

    for (doc_idx, set) in sets.iter().enumerate() {
        let mut best_cluster = 0;
        let mut best_distance = f32::INFINITY;
        for (cluster_idx, &medoid_idx) in medoids.iter().enumerate() {
            let distance = jaccard(set, &sets[medoid_idx]);
            if distance < best_distance {
                best_distance = distance;
                best_cluster = cluster_idx;
            }
        }
        clusters[best_cluster].push(doc_idx);
    }

    clusters
}

/// Medoid update pass: each cluster's new medoid is the member minimizing the
/// sum of Jaccard distances to all members of that same cluster.
///
/// Members are scanned in corpus order with a strict minimum, so the result
/// is deterministic for a fixed partition. An empty cluster keeps its
/// previous medoid.
fn update_medoids(
    sets: &[HashSet<&str>],
    clusters: &[Vec<usize>],
    prev_medoids: &[usize],
) -> Vec<usize> {
    clusters
        .iter()
        .zip(prev_medoids)
        .map(|(members, &prev)| {
            let mut best = prev;
            let mut best_total = f32::INFINITY;
            for &candidate in members {
                let total: f32 = members
                    .iter()
                    .map(|&other| jaccard(&sets[candidate], &sets[other]))
                    .sum();
                if total < best_total {
                    best_total = total;
                    best = candidate;
                }
            }
            best
        })
        .collect()
}

/// Read-only scoring: squared distance of every member to its cluster medoid.
fn sum_squared_error(sets: &[HashSet<&str>], clusters: &[Vec<usize>], medoids: &[usize]) -> f32 {
    clusters
        .iter()
        .zip(medoids)
        .map(|(members, &medoid_idx)| {
            members
                .iter()
                .map(|&doc_idx| jaccard(&sets[doc_idx], &sets[medoid_idx]).powi(2))
                .sum::<f32>()
        })
        .sum()
}
