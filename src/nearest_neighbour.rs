use crate::cluster::Cluster;
use crate::data_wrappers::NearestPair;
use crate::distance::cluster_distance;
use num_traits::Float;

/// Finds the two closest clusters under single linkage.
///
/// Pairs are visited with the outer index ascending and the inner index ascending, and a pair
/// only replaces the current best if its distance is strictly smaller, so on ties the first pair
/// visited wins. Cluster distance is symmetric, so the pair `(j, i)` can never beat an already
/// visited `(i, j)`, and only pairs with `i < j` are scanned. The returned `first` index is
/// therefore always lower than `second`.
///
/// # Panics
/// * If fewer than two clusters are given, or if any cluster is empty.
pub fn find_nearest_pair<T: Float>(clusters: &[Cluster<T>]) -> NearestPair<T> {
    assert!(
        clusters.len() >= 2,
        "At least two clusters are needed to find a nearest pair, got {}",
        clusters.len()
    );
    let mut nearest = NearestPair { first: 0, second: 1, distance: T::infinity() };
    for (first, left) in clusters.iter().enumerate() {
        for (second, right) in clusters.iter().enumerate().skip(first + 1) {
            let distance = cluster_distance(left, right);
            if distance < nearest.distance {
                nearest = NearestPair { first, second, distance };
            }
        }
    }
    log::trace!(
        "Nearest pair is ({}, {}) out of {} clusters",
        nearest.first,
        nearest.second,
        clusters.len()
    );
    nearest
}
