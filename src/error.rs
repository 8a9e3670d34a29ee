use thiserror::Error;

/// Top-level error type for tube sweep generation.
#[derive(Debug, Error)]
pub enum TubesweepError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Invalid static parameters, detected before or while sampling the path.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("step count must be at least {min}, got {actual}")]
    TooFewSteps { min: usize, actual: usize },

    #[error("profile needs at least {min} sides, got {actual}")]
    TooFewSides { min: usize, actual: usize },

    #[error("path scale must be positive and finite, got {0}")]
    InvalidScale(f64),

    #[error("tube radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("twist factor must be finite, got {0}")]
    InvalidTwist(f64),

    #[error("closure tolerance must be non-negative and finite, got {0}")]
    InvalidTolerance(f64),

    #[error("mesh of {steps} rings x {sides} sides exceeds the u32 index range")]
    MeshTooLarge { steps: usize, sides: usize },

    #[error("curve produced a non-finite point at sample {index}")]
    NonFiniteSample { index: usize },

    #[error("path is not closed: end gap {gap} exceeds tolerance {tolerance}")]
    PathNotClosed { gap: f64, tolerance: f64 },
}

/// Orientation frames that cannot be built at a path sample.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("zero-length tangent at path sample {index}")]
    ZeroTangent { index: usize },

    #[error("tangent at path sample {index} is parallel to the up reference")]
    ParallelToUp { index: usize },
}

/// Internal index invariants of the assembled mesh.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("index consistency violated: {0}")]
    IndexConsistency(String),
}

/// Convenience type alias for results using [`TubesweepError`].
pub type Result<T> = std::result::Result<T, TubesweepError>;
