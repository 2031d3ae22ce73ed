use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Backtracking or matrix access before `compute_distance` was called.
    #[error("the DP matrices have not been computed yet; call `compute_distance` first")]
    InvalidState,
    #[error("cannot allocate DP matrices of {rows}x{cols} cells")]
    Allocation { rows: usize, cols: usize },
}
