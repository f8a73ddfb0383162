//! Generation errors.

use thiserror::Error;

/// Why a password could not be generated.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("invalid length {0}: passwords must be at least one character long")]
    InvalidLength(usize),

    #[error("no characters available after applying allow, require and exclude")]
    EmptyAlphabet,

    /// The recipe can't be trusted to succeed within the configured trials.
    #[error(
        "failure rate too high: {trials} attempts would all fail with probability {failure_rate:e} \
         (success per attempt {success_probability:e}, tolerance {tolerance:e})"
    )]
    UnacceptableFailureRate {
        success_probability: f64,
        failure_rate: f64,
        tolerance: f64,
        trials: u32,
    },

    /// Every attempt missed a required set. The failure-rate gate should make
    /// this unreachable; seeing it points at a counting bug.
    #[error("could not satisfy requirements after {attempts} attempts (last miss: {unmet})")]
    RequirementsUnsatisfied { attempts: u32, unmet: String },

    /// Raised by a generator built on top of this one (word lists, separators).
    #[error("collaborator failed: {0}")]
    Collaborator(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl GenerationError {
    pub fn collaborator(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        GenerationError::Collaborator(err.into())
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
