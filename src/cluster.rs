use crate::data_wrappers::Record;
use crate::error::ClusteringError;
use num_traits::Float;

/// Number of member slots a cluster grows by when an append finds it full.
pub const CLUSTER_CHUNK: usize = 10;

/// An ordered, growable collection of records. The allocated capacity is tracked separately
/// from the number of occupied slots and grows in fixed size chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<T = f32> {
    members: Vec<Record<T>>,
    chunk_size: usize,
}

impl<T: Float> Cluster<T> {
    /// Creates an empty cluster with room for `initial_capacity` records.
    ///
    /// # Parameters
    /// * `initial_capacity` - the number of slots to allocate up front. Zero is legal and means
    ///                        that no backing storage is allocated yet.
    ///
    /// # Returns
    /// * The empty cluster, or an allocation error if the backing buffer could not be obtained.
    ///
    /// # Examples
    /// ```
    ///use agglomerative::Cluster;
    ///
    ///let cluster: Cluster<f32> = Cluster::new(10).unwrap();
    ///assert_eq!(0, cluster.size());
    ///assert!(cluster.capacity() >= 10);
    /// ```
    pub fn new(initial_capacity: usize) -> Result<Self, ClusteringError> {
        Self::with_chunk_size(initial_capacity, CLUSTER_CHUNK)
    }

    /// Creates an empty cluster that grows by `chunk_size` slots whenever it fills up.
    pub fn with_chunk_size(
        initial_capacity: usize,
        chunk_size: usize,
    ) -> Result<Self, ClusteringError> {
        let mut members = Vec::new();
        members.try_reserve_exact(initial_capacity)?;
        Ok(Cluster {
            members,
            chunk_size: chunk_size.max(1),
        })
    }

    /// An empty cluster without any backing storage.
    pub fn empty() -> Self {
        Cluster {
            members: Vec::new(),
            chunk_size: CLUSTER_CHUNK,
        }
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn capacity(&self) -> usize {
        self.members.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Record<T>] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<T>> {
        self.members.iter()
    }

    pub fn ids(&self) -> Vec<i32> {
        self.members.iter().map(|record| record.id).collect()
    }

    /// Appends a record to the end of the cluster, growing the capacity by one chunk first if
    /// the cluster is full. If growth fails the cluster is left exactly as it was.
    pub fn append(&mut self, record: Record<T>) -> Result<(), ClusteringError> {
        if self.members.len() == self.members.capacity() {
            self.members.try_reserve_exact(self.chunk_size)?;
        }
        self.members.push(record);
        Ok(())
    }

    /// Copies every member of `other` onto the end of this cluster and re-sorts the result by
    /// id. The capacity needed for both clusters is reserved before anything is copied, so a
    /// failed allocation leaves both clusters untouched. Disposing of `other` is left to the
    /// caller.
    ///
    /// # Examples
    /// ```
    ///use agglomerative::{Cluster, Record};
    ///
    ///let mut left = Cluster::new(1).unwrap();
    ///left.append(Record::new(3, 0.0_f32, 0.0)).unwrap();
    ///let mut right = Cluster::new(2).unwrap();
    ///right.append(Record::new(2, 1.0, 1.0)).unwrap();
    ///right.append(Record::new(1, 2.0, 2.0)).unwrap();
    ///
    ///left.merge_from(&right).unwrap();
    ///assert_eq!(vec![1, 2, 3], left.ids());
    /// ```
    pub fn merge_from(&mut self, other: &Cluster<T>) -> Result<(), ClusteringError> {
        let required = self.members.len() + other.members.len();
        if required > self.members.capacity() {
            self.members.try_reserve_exact(required - self.members.len())?;
        }
        self.members.extend_from_slice(&other.members);
        self.sort_by_id();
        Ok(())
    }

    /// Orders members by ascending id. Records sharing an id keep their relative order.
    pub fn sort_by_id(&mut self) {
        self.members.sort_by_key(|record| record.id);
    }

    /// Removes every member and releases the backing buffer, leaving an empty cluster with no
    /// capacity. Calling this on an already empty cluster does nothing.
    pub fn clear(&mut self) {
        self.members = Vec::new();
    }
}

impl<'a, T> IntoIterator for &'a Cluster<T> {
    type Item = &'a Record<T>;
    type IntoIter = std::slice::Iter<'a, Record<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
