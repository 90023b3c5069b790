use crate::cluster::Cluster;
use crate::data_wrappers::{NearestPair, Record};
use crate::error::ClusteringError;
use crate::nearest_neighbour::find_nearest_pair;
use num_traits::Float;

/// An ordered partition of records into clusters. The set owns every cluster it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSet<T = f32> {
    clusters: Vec<Cluster<T>>,
}

impl<T: Float> ClusterSet<T> {
    /// Builds the initial partition: one singleton cluster per record, in input order.
    ///
    /// # Parameters
    /// * `records` - the points to partition.
    /// * `chunk_size` - initial capacity of each cluster, and the amount it grows by when full.
    ///
    /// # Returns
    /// * The partition, or an allocation error. Clusters built before a failure are released.
    ///
    /// # Examples
    /// ```
    ///use agglomerative::{ClusterSet, Record};
    ///
    ///let records = vec![Record::new(1, 0.0_f32, 0.0), Record::new(2, 1.0, 1.0)];
    ///let set = ClusterSet::from_records(&records, 10).unwrap();
    ///assert_eq!(2, set.len());
    ///assert_eq!(2, set.total_size());
    /// ```
    pub fn from_records(records: &[Record<T>], chunk_size: usize) -> Result<Self, ClusteringError> {
        let mut clusters = Vec::new();
        clusters.try_reserve_exact(records.len())?;
        for record in records {
            let mut cluster = Cluster::with_chunk_size(chunk_size, chunk_size)?;
            cluster.append(*record)?;
            clusters.push(cluster);
        }
        Ok(ClusterSet { clusters })
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn clusters(&self) -> &[Cluster<T>] {
        &self.clusters
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cluster<T>> {
        self.clusters.iter()
    }

    /// Total number of records held across all clusters.
    pub fn total_size(&self) -> usize {
        self.clusters.iter().map(Cluster::size).sum()
    }

    /// Member ids of every cluster, in cluster order.
    pub fn ids(&self) -> Vec<Vec<i32>> {
        self.clusters.iter().map(Cluster::ids).collect()
    }

    /// The two closest clusters in the set. See [`find_nearest_pair`].
    pub fn nearest_pair(&self) -> NearestPair<T> {
        find_nearest_pair(&self.clusters)
    }

    /// Merges the cluster at `absorbed` into the cluster at `target` and then removes the
    /// absorbed cluster, shifting every later cluster one place to the left. The relative order
    /// of the surviving clusters is unchanged. If the merge cannot allocate, the set is left as
    /// it was.
    ///
    /// # Panics
    /// * If the indices are equal or either is out of bounds.
    pub fn merge_pair(&mut self, target: usize, absorbed: usize) -> Result<(), ClusteringError> {
        assert!(
            target != absorbed,
            "Cannot merge cluster {target} into itself"
        );
        assert!(
            target < self.clusters.len() && absorbed < self.clusters.len(),
            "Merge indices ({target}, {absorbed}) out of bounds for {} clusters",
            self.clusters.len()
        );
        {
            let (receiver, source) = self.pair_mut(target, absorbed);
            receiver.merge_from(source)?;
        }
        self.remove(absorbed);
        Ok(())
    }

    /// Removes and returns the cluster at `idx`, preserving the order of the rest.
    pub fn remove(&mut self, idx: usize) -> Cluster<T> {
        self.clusters.remove(idx)
    }

    fn pair_mut(&mut self, target: usize, source: usize) -> (&mut Cluster<T>, &Cluster<T>) {
        if target < source {
            let (left, right) = self.clusters.split_at_mut(source);
            (&mut left[target], &right[0])
        } else {
            let (left, right) = self.clusters.split_at_mut(target);
            (&mut right[0], &left[source])
        }
    }
}

impl<'a, T> IntoIterator for &'a ClusterSet<T> {
    type Item = &'a Cluster<T>;
    type IntoIter = std::slice::Iter<'a, Cluster<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(points: &[(i32, f32, f32)]) -> Vec<Record<f32>> {
        points.iter().map(|&(id, x, y)| Record::new(id, x, y)).collect()
    }

    #[test]
    fn from_records_makes_singletons() {
        let data = records(&[(7, 0.0, 0.0), (3, 1.0, 0.0), (5, 2.0, 0.0)]);
        let set = ClusterSet::from_records(&data, 10).unwrap();
        assert_eq!(vec![vec![7], vec![3], vec![5]], set.ids());
        assert!(set.iter().all(|cluster| cluster.capacity() >= 10));
    }

    #[test]
    fn merge_pair_removes_absorbed_and_keeps_order() {
        let data = records(&[(1, 0.0, 0.0), (2, 1.0, 0.0), (3, 2.0, 0.0), (4, 3.0, 0.0)]);
        let mut set = ClusterSet::from_records(&data, 10).unwrap();
        set.merge_pair(1, 3).unwrap();
        assert_eq!(vec![vec![1], vec![2, 4], vec![3]], set.ids());
        assert_eq!(4, set.total_size());
    }

    #[test]
    fn merge_pair_with_higher_target_index() {
        let data = records(&[(1, 0.0, 0.0), (2, 1.0, 0.0), (3, 2.0, 0.0)]);
        let mut set = ClusterSet::from_records(&data, 10).unwrap();
        set.merge_pair(2, 0).unwrap();
        assert_eq!(vec![vec![2], vec![1, 3]], set.ids());
    }

    #[test]
    #[should_panic(expected = "into itself")]
    fn merge_pair_rejects_same_index() {
        let data = records(&[(1, 0.0, 0.0), (2, 1.0, 0.0)]);
        let mut set = ClusterSet::from_records(&data, 10).unwrap();
        let _ = set.merge_pair(1, 1);
    }

    #[test]
    fn empty_records_make_empty_set() {
        let set = ClusterSet::<f32>::from_records(&[], 10).unwrap();
        assert!(set.is_empty());
        assert_eq!(0, set.total_size());
    }
}
