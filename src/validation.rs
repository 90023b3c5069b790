use crate::{ClusteringError, MergeParams, Record};
use num_traits::Float;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DataValidator<'a, T> {
    data: &'a [Record<T>],
    params: &'a MergeParams,
}

impl<'a, T: Float> DataValidator<'a, T> {
    pub(crate) fn new(data: &'a [Record<T>], params: &'a MergeParams) -> Self {
        Self { data, params }
    }

    pub(crate) fn validate_input_data(&self) -> Result<(), ClusteringError> {
        if self.params.target_clusters < 1 {
            return Err(ClusteringError::InvalidTarget(format!(
                "at least one cluster is required, got {}",
                self.params.target_clusters
            )));
        }
        if self.data.is_empty() {
            return Err(ClusteringError::EmptyDataset);
        }
        for (n, record) in self.data.iter().enumerate() {
            if !record.is_finite() {
                return Err(ClusteringError::NonFiniteCoordinate(format!(
                    "{n}th record (id {}) contains non-finite coordinate(s)",
                    record.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_data() {
        let data = vec![Record::new(1, 0.0_f32, 0.0), Record::new(2, 1.0, 1.0)];
        let params = MergeParams::builder().target_clusters(2).build();
        assert!(DataValidator::new(&data, &params).validate_input_data().is_ok());
    }

    #[test]
    fn rejects_zero_target() {
        let data = vec![Record::new(1, 0.0_f32, 0.0)];
        let params = MergeParams::builder().target_clusters(0).build();
        let result = DataValidator::new(&data, &params).validate_input_data();
        assert!(matches!(result, Err(ClusteringError::InvalidTarget(..))));
    }

    #[test]
    fn rejects_empty_data() {
        let data: Vec<Record<f32>> = Vec::new();
        let params = MergeParams::default();
        let result = DataValidator::new(&data, &params).validate_input_data();
        assert_eq!(Err(ClusteringError::EmptyDataset), result);
    }

    #[test]
    fn rejects_nan() {
        let data = vec![Record::new(1, 0.0_f32, 0.0), Record::new(2, f32::NAN, 1.0)];
        let params = MergeParams::default();
        let result = DataValidator::new(&data, &params).validate_input_data();
        assert!(matches!(result, Err(ClusteringError::NonFiniteCoordinate(..))));
    }
}
