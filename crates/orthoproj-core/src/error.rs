use thiserror::Error;

/// Everything that can go wrong before a projection is computed.
///
/// Geometry itself never fails: degenerate hulls and zero rotations are
/// well-defined no-ops, so every variant here describes bad input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("unknown solid type: {0:?}")]
    UnknownSolid(String),

    #[error("unknown case type: {0:?} (expected A, B, C or D)")]
    UnknownCase(String),

    #[error("unknown resting condition: {0:?} (expected base-edge or base-corner)")]
    UnknownRestingCondition(String),

    #[error("parameter {parameter} = {value} is out of range {range}")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        range: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
