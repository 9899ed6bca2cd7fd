use sg_core::SgError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrialError {
    #[error("initial lattice length {got} does not match configured size {expected}")]
    SizeMismatch {
        expected: usize,
        got:      usize,
    },

    #[error(transparent)]
    Core(#[from] SgError),
}

pub type DriverResult<T> = Result<T, TrialError>;
