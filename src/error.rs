use crate::graph::Weight;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// `set` was called with a weight below zero.
    #[error("edge weight must not be negative, got {0}")]
    NegativeWeight(Weight),

    /// A stored edge was constructed with a weight of zero or less.
    #[error("edge weight must be positive, got {0}")]
    NonPositiveWeight(Weight),
}

impl GraphError {
    /// Both variants reject a caller-supplied argument; the graph is left untouched.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GraphError::NegativeWeight(_) | GraphError::NonPositiveWeight(_)
        )
    }
}
