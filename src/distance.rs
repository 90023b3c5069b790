use crate::cluster::Cluster;
use crate::data_wrappers::Record;
use num_traits::Float;

/// Euclidean distance between two records.
pub fn point_distance<T: Float>(a: &Record<T>, b: &Record<T>) -> T {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Single linkage distance between two clusters: the smallest distance between any member of
/// `a` and any member of `b`.
///
/// # Panics
/// * If either cluster is empty, as the minimum is undefined.
pub fn cluster_distance<T: Float>(a: &Cluster<T>, b: &Cluster<T>) -> T {
    assert!(
        !a.is_empty() && !b.is_empty(),
        "Cluster distance is undefined for empty clusters"
    );
    a.iter()
        .flat_map(|p| b.iter().map(move |q| point_distance(p, q)))
        .fold(T::infinity(), |min, dist| if dist < min { dist } else { min })
}
