use crate::validation::DataValidator;
use crate::{ClusterSet, ClusteringError, MergeParams, Record};
use num_traits::Float;

/// Progress of the merge loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeState {
    /// More clusters remain than were asked for.
    Running,
    /// The cluster count has reached the target.
    Done,
}

/// Single linkage agglomerative clustering over labelled 2D points. Generic over floating point
/// numeric types.
#[derive(Debug, Clone, PartialEq)]
pub struct Agglomerator<'a, T> {
    data: &'a [Record<T>],
    params: MergeParams,
}

impl<'a, T: Float> Agglomerator<'a, T> {
    /// Creates an instance of the clustering model using a custom parameter configuration.
    ///
    /// # Parameters
    /// * `data` - a reference to the records to cluster. Coordinates must be finite.
    /// * `params` - the parameter configuration.
    ///
    /// # Returns
    /// * The clustering model instance.
    ///
    /// # Examples
    /// ```
    ///use agglomerative::{Agglomerator, MergeParams, Record};
    ///
    ///let data = vec![
    ///    Record::new(1, 0.0_f32, 0.0),
    ///    Record::new(2, 0.0, 1.0),
    ///    Record::new(3, 5.0, 5.0),
    ///];
    ///let params = MergeParams::builder().target_clusters(2).build();
    ///let clusterer = Agglomerator::new(&data, params);
    /// ```
    pub fn new(data: &'a [Record<T>], params: MergeParams) -> Self {
        Agglomerator { data, params }
    }

    /// Creates an instance of the clustering model using the default parameters, which merge
    /// everything into a single cluster.
    pub fn default_params(data: &'a [Record<T>]) -> Agglomerator<'a, T> {
        Agglomerator::new(data, MergeParams::default())
    }

    /// Repeatedly merges the two closest clusters until the target number of clusters remains.
    ///
    /// # Returns
    /// * A result that, if successful, contains the final partition. Clusters keep the order of
    ///   the first record they were seeded from, and members of each cluster are sorted by id.
    ///   An error is returned if the target is zero, if there are no records, if any
    ///   coordinate is not finite, or if memory for a merge cannot be allocated.
    ///
    /// # Examples
    /// ```
    ///use agglomerative::{Agglomerator, MergeParams, Record};
    ///
    ///let data = vec![
    ///    Record::new(1, 0.0_f32, 0.0),
    ///    Record::new(2, 0.0, 1.0),
    ///    Record::new(3, 5.0, 5.0),
    ///    Record::new(4, 5.0, 6.0),
    ///];
    ///let params = MergeParams::builder().target_clusters(2).build();
    ///let clusters = Agglomerator::new(&data, params).cluster().unwrap();
    ///assert_eq!(vec![vec![1, 2], vec![3, 4]], clusters.ids());
    /// ```
    pub fn cluster(&self) -> Result<ClusterSet<T>, ClusteringError> {
        let validator = DataValidator::new(self.data, &self.params);
        validator.validate_input_data()?;
        let mut clusters = ClusterSet::from_records(self.data, self.params.chunk_size)?;
        log::info!(
            "Clustering {} records into {} cluster(s)",
            clusters.len(),
            self.params.target_clusters.min(clusters.len())
        );

        let mut n_merges = 0;
        while self.state(&clusters) == MergeState::Running {
            self.merge_nearest(&mut clusters)?;
            n_merges += 1;
        }
        log::info!("Finished after {n_merges} merge(s) with {} cluster(s)", clusters.len());
        Ok(clusters)
    }

    /// Whether the given partition still needs merging to reach the target.
    pub fn state(&self, clusters: &ClusterSet<T>) -> MergeState {
        if clusters.len() > self.params.target_clusters {
            MergeState::Running
        } else {
            MergeState::Done
        }
    }

    fn merge_nearest(&self, clusters: &mut ClusterSet<T>) -> Result<(), ClusteringError> {
        let pair = clusters.nearest_pair();
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "Merging cluster {} {:?} with cluster {} {:?} at distance {}",
                pair.first,
                clusters.clusters()[pair.first].ids(),
                pair.second,
                clusters.clusters()[pair.second].ids(),
                pair.distance.to_f64().unwrap_or(f64::NAN)
            );
        }
        clusters.merge_pair(pair.first, pair.second)
    }
}
