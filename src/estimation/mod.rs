mod error;
mod pi_estimator;
mod series;
mod summary;

pub use error::EstimateError;
pub(crate) use error::ensure_positive;
pub use pi_estimator::{Tally, estimate, is_inside_quarter_circle};
pub use series::{EstimateSeries, SeriesFormat};
pub use summary::{RunningMean, Summary, summarize};
