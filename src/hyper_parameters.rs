use crate::cluster::CLUSTER_CHUNK;

// Defaults for parameters
const TARGET_CLUSTERS_DEFAULT: usize = 1;
const CHUNK_SIZE_DEFAULT: usize = CLUSTER_CHUNK;

// Valid minimums/left bounds of parameters
const CHUNK_SIZE_MINIMUM: usize = 1;

/// A wrapper around the parameters used in agglomerative clustering.
/// Only use if you want something other than a single final cluster. Otherwise use
/// `Agglomerator::default_params()` to instantiate the model with default parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeParams {
    pub(crate) target_clusters: usize,
    pub(crate) chunk_size: usize,
}

/// Builder object to set custom parameters.
pub struct MergeParamBuilder {
    target_clusters: Option<usize>,
    chunk_size: Option<usize>,
}

impl MergeParams {
    pub(crate) fn default() -> Self {
        Self::builder().build()
    }

    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> MergeParamBuilder {
        MergeParamBuilder {
            target_clusters: None,
            chunk_size: None,
        }
    }

    pub fn target_clusters(&self) -> usize {
        self.target_clusters
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl MergeParamBuilder {
    /// Sets the number of clusters merging stops at. If it is at least the number of input
    /// points no merging takes place. Zero is rejected when clustering starts.
    /// Defaults to 1.
    ///
    /// # Parameters
    /// * target_clusters - the final number of clusters
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn target_clusters(mut self, target_clusters: usize) -> MergeParamBuilder {
        self.target_clusters = Some(target_clusters);
        self
    }

    /// Sets the number of member slots a cluster is created with and grows by whenever it
    /// fills up. Only affects memory behaviour, never the result. Defaults to 10.
    ///
    /// # Parameters
    /// * chunk_size - the growth increment
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn chunk_size(mut self, chunk_size: usize) -> MergeParamBuilder {
        let valid_chunk_size =
            MergeParamBuilder::validate_input_left_bound(chunk_size, CHUNK_SIZE_MINIMUM, "chunk_size");
        self.chunk_size = Some(valid_chunk_size);
        self
    }

    /// Finishes the building of the parameter configuration.
    ///
    /// # Returns
    /// * The completed parameter configuration.
    pub fn build(self) -> MergeParams {
        MergeParams {
            target_clusters: self.target_clusters.unwrap_or(TARGET_CLUSTERS_DEFAULT),
            chunk_size: self.chunk_size.unwrap_or(CHUNK_SIZE_DEFAULT),
        }
    }

    fn validate_input_left_bound(input_param: usize, left_bound: usize, param: &str) -> usize {
        if input_param < left_bound {
            log::warn!(
                "{param} ({input_param}) cannot be lower than {left_bound}. Set to {left_bound}."
            );
            left_bound
        } else {
            input_param
        }
    }
}
