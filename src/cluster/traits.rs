use crate::error::Result;

/// Common interface for hard clustering algorithms (one label per document).
pub trait Clustering {
    /// Fit the model (if needed) and return one cluster label per input document.
    fn fit_predict(&self, docs: &[String]) -> Result<Vec<usize>>;

    /// The configured number of clusters.
    fn n_clusters(&self) -> usize;
}
