//! Single linkage agglomerative clustering of labelled 2D points in Rust. Generic over floating
//! point numeric types.
//!
//! Every input point starts out in a cluster of its own. The two clusters that are closest to
//! each other, measured as the smallest Euclidean distance between any of their members, are
//! then merged, and this is repeated until the requested number of clusters remains.
//!
//! The nearest pair search compares every pair of clusters on every merge, so the whole run is
//! cubic in the number of points. This is fine for tens to a few hundred points, which is what
//! the crate is aimed at. Ties between equally close pairs are always broken the same way, so a
//! given input and target produce the same partition on every run.
//!
//! # Examples
//! ```
//!use agglomerative::{Agglomerator, MergeParams, Record};
//!
//!let data = vec![
//!    Record::new(1, 0.0_f32, 0.0),
//!    Record::new(2, 0.0, 1.0),
//!    Record::new(3, 5.0, 5.0),
//!    Record::new(4, 5.0, 6.0),
//!];
//!let params = MergeParams::builder().target_clusters(2).build();
//!let clusters = Agglomerator::new(&data, params).cluster().unwrap();
//!assert_eq!(vec![vec![1, 2], vec![3, 4]], clusters.ids());
//!assert_eq!(
//!    "Clusters:\ncluster 0: 1[0,0] 2[0,1]\ncluster 1: 3[5,5] 4[5,6]\n",
//!    clusters.to_string()
//!);
//! ```

pub use crate::agglomerator::{Agglomerator, MergeState};
pub use crate::cluster::{Cluster, CLUSTER_CHUNK};
pub use crate::cluster_set::ClusterSet;
pub use crate::data_wrappers::{NearestPair, Record};
pub use crate::distance::{cluster_distance, point_distance};
pub use crate::error::ClusteringError;
pub use crate::hyper_parameters::{MergeParamBuilder, MergeParams};
pub use crate::nearest_neighbour::find_nearest_pair;
pub use crate::reader::{load_records, parse_records, parse_target};

mod agglomerator;
mod cluster;
mod cluster_set;
mod data_wrappers;
mod distance;
mod error;
mod hyper_parameters;
mod nearest_neighbour;
mod printer;
mod reader;
mod validation;
