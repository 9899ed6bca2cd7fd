use sg_trial::TrialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("batch configuration error: {0}")]
    Config(String),

    #[error("trial error: {0}")]
    Trial(#[from] TrialError),

    #[error("failed to start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    /// The result sink (e.g. the CSV log) rejected a write.
    #[error("result sink error: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type BatchResult<T> = Result<T, BatchError>;
