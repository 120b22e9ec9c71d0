mod histogram_driver;
pub mod offload;
mod progress;

pub use histogram_driver::{HistogramDriver, run_series, summarize};
pub use offload::{JobError, SeriesJob};
pub use progress::Progress;
