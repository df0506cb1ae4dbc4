//! Pareto front error types.

/// Errors from Pareto front lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrontError {
    /// No entry has exactly these criteria
    #[error("no entry arriving at {arr_mins} with {changes} changes")]
    NotFound { arr_mins: i32, changes: u32 },
}
