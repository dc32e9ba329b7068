use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum GraphError {
    #[error("node {0} is not in the graph")]
    MissingNode(usize),
    #[error("invalid cost range: min {min} is greater than max {max}")]
    InvalidCostRange { min: i64, max: i64 },
}
