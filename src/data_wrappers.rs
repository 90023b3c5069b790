use num_traits::Float;

/// A single labelled input point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<T = f32> {
    pub id: i32,
    pub x: T,
    pub y: T,
}

impl<T: Float> Record<T> {
    pub fn new(id: i32, x: T, y: T) -> Self {
        Record { id, x, y }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The closest pair of clusters found by a nearest neighbour scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPair<T> {
    /// Index of the cluster that absorbs the other.
    pub first: usize,
    /// Index of the cluster that is absorbed and removed.
    pub second: usize,
    pub distance: T,
}
