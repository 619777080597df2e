use thiserror::Error;

/// Top-level error type for the arcline geometry core.
#[derive(Debug, Error)]
pub enum ArclineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric values and configuration.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid tolerance: {name} = {value} (must be finite and positive)")]
    InvalidTolerance { name: &'static str, value: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised while reconstructing loops from curve fragments.
///
/// These signal a malformed fragment bag and are not recoverable.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("no fragment continues the ring at ({x}, {y})")]
    OpenRing { x: f64, y: f64 },

    #[error("ring has no fragments")]
    EmptyRing,
}

/// Errors related to higher-level operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("host region engine failed: {0}")]
    Host(String),
}

/// Convenience type alias for results using [`ArclineError`].
pub type Result<T> = std::result::Result<T, ArclineError>;
