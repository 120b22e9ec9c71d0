use serde::{Deserialize, Serialize};

use crate::estimation::{EstimateSeries, Summary};

/// Chart options understood by every surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub title: String,
    pub autosize: bool,
    pub use_resize_handler: bool,
}

impl PlotConfig {
    pub fn for_repeat_count(repeat_count: u64) -> Self {
        Self {
            title: format!("Histogram of Monte Carlo Pi Estimate with {repeat_count} Iterations"),
            autosize: true,
            use_resize_handler: true,
        }
    }

    pub fn with_title<T: Into<String>>(mut self, title: T) -> Self {
        self.title = title.into();
        self
    }
}

/// Everything a surface needs to draw one run.
#[derive(Debug, Clone)]
pub struct HistogramView<'a> {
    pub series: &'a EstimateSeries,
    pub summary: Summary,
    pub repeat_count: u64,
    pub sample_count: u64,
    pub config: PlotConfig,
}

impl<'a> HistogramView<'a> {
    pub fn new(
        series: &'a EstimateSeries,
        repeat_count: u64,
        sample_count: u64,
        config: PlotConfig,
    ) -> Self {
        Self {
            series,
            summary: series.summary(),
            repeat_count,
            sample_count,
            config,
        }
    }

    /// The plain-text lines shown next to the chart.
    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!("The Total Average Value is {}", self.summary.mean),
            format!("The Total Number of Iterations is {}", self.repeat_count),
            format!("The Resolution of Every Point is {}", self.sample_count),
        ]
    }
}
