use crate::pfm::PfmError;
use thiserror::Error;

/// Configuration rejected before any image is read
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("epsilon is supposed to be in the interval [0.0, 1.0], got {0}")]
    EpsilonOutOfRange(f32),

    #[error("minimum ({min}) has to be smaller than maximum ({max})")]
    BoundsInverted { min: f32, max: f32 },
}

/// Range estimation failure
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EstimateError {
    /// Every sample of every source was equal to the ignore value
    #[error("no valid values to estimate a range from")]
    EmptyPool,
}

/// Pipeline error, carrying the stage that failed
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Rejected configuration - nothing has been read or written
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A statistics source (the target included) failed to load
    #[error("Could not load image {name}: {source}")]
    LoadFailed { name: String, source: PfmError },

    /// The sample pool yielded no usable range
    #[error("{0}")]
    Estimate(#[from] EstimateError),

    /// The normalized target could not be persisted
    #[error("Could not save image {name}: {source}")]
    SaveFailed { name: String, source: PfmError },
}
