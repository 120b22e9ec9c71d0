use thiserror::Error;

use crate::estimation::EstimateError;
use crate::presentation::RenderError;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
