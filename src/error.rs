use thiserror::Error;

/// Reasons a checked construction of a [`ClosedInterval`](crate::ClosedInterval) can fail.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntervalError {
    #[error("lower bound is greater than upper bound")]
    Inverted,
    #[error("bounds are not comparable")]
    Unordered,
}
