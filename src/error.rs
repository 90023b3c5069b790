use std::collections::TryReserveError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise while loading points or clustering them.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusteringError {
    Allocation(String),
    FileRead(String),
    Conversion(String),
    InvalidTarget(String),
    EmptyDataset,
    NonFiniteCoordinate(String),
}

impl ClusteringError {
    /// The process exit status the command line front end reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ClusteringError::Conversion(_)
            | ClusteringError::InvalidTarget(_)
            | ClusteringError::NonFiniteCoordinate(_) => 1,
            ClusteringError::FileRead(_) => 2,
            ClusteringError::Allocation(_) => 3,
            ClusteringError::EmptyDataset => 4,
        }
    }
}

impl Error for ClusteringError {}

impl Display for ClusteringError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ClusteringError::Allocation(msg) => format!("Unable to allocate memory: {msg}"),
            ClusteringError::FileRead(msg) => format!("Unable to read input file: {msg}"),
            ClusteringError::Conversion(msg) => format!("Conversion error: {msg}"),
            ClusteringError::InvalidTarget(msg) => format!("Invalid target cluster count: {msg}"),
            ClusteringError::EmptyDataset => String::from("The dataset provided is empty"),
            ClusteringError::NonFiniteCoordinate(msg) => format!("Non finite coordinate: {msg}"),
        };
        write!(f, "{message}")
    }
}

impl From<TryReserveError> for ClusteringError {
    fn from(err: TryReserveError) -> Self {
        ClusteringError::Allocation(err.to_string())
    }
}
