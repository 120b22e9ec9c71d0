use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("invalid argument: {name} must be a positive integer, got {value}")]
    InvalidArgument { name: &'static str, value: u64 },
}

#[inline]
pub(crate) fn ensure_positive(name: &'static str, value: u64) -> Result<u64, EstimateError> {
    if value == 0 {
        return Err(EstimateError::InvalidArgument { name, value });
    }
    Ok(value)
}
