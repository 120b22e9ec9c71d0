use std::sync::mpsc::Sender;
use std::time::Instant;

use tracing::{debug, info};

use crate::estimation::{EstimateError, EstimateSeries, Summary, ensure_positive, estimate};
use crate::sources::UniformSource;
use crate::tasks::Progress;

// Upper bound on the up-front allocation; longer series grow as they fill.
const MAX_PREALLOCATED_ESTIMATES: usize = 1 << 16;

fn initial_capacity(repeat_count: u64) -> usize {
    usize::try_from(repeat_count).map_or(MAX_PREALLOCATED_ESTIMATES, |n| {
        n.min(MAX_PREALLOCATED_ESTIMATES)
    })
}

/// Runs the estimator `repeat_count` times and collects the estimates.
///
/// Every call uses the same `sample_count`, results are kept in call order.
/// Both counts must be positive.
pub fn run_series<S>(
    source: &mut S,
    repeat_count: u64,
    sample_count: u64,
) -> Result<EstimateSeries, EstimateError>
where
    S: UniformSource + ?Sized,
{
    collect(source, repeat_count, sample_count, |_| {})
}

/// Mean and length of a series. An empty series has mean `0.0`.
pub fn summarize(series: &EstimateSeries) -> Summary {
    series.summary()
}

fn collect<S, F>(
    source: &mut S,
    repeat_count: u64,
    sample_count: u64,
    mut on_estimate: F,
) -> Result<EstimateSeries, EstimateError>
where
    S: UniformSource + ?Sized,
    F: FnMut(&EstimateSeries),
{
    ensure_positive("repeat_count", repeat_count)?;
    ensure_positive("sample_count", sample_count)?;

    let mut series = EstimateSeries::with_capacity(initial_capacity(repeat_count));
    for _ in 0..repeat_count {
        series.push(estimate(source, sample_count)?);
        on_estimate(&series);
    }
    Ok(series)
}

pub struct HistogramDriver {
    source: Box<dyn UniformSource + Send>,
    repeat_count: u64,
    sample_count: u64,

    progress_frequency: u64,
    progress_tx: Option<Sender<Progress>>,
}

impl HistogramDriver {
    pub fn new(
        source: Box<dyn UniformSource + Send>,
        repeat_count: u64,
        sample_count: u64,
    ) -> Result<Self, EstimateError> {
        ensure_positive("repeat_count", repeat_count)?;
        ensure_positive("sample_count", sample_count)?;

        Ok(Self {
            source,
            repeat_count,
            sample_count,
            progress_frequency: repeat_count,
            progress_tx: None,
        })
    }

    /// Sends a [`Progress`] every `every` estimates and once after the last.
    ///
    /// A zero `every` is treated as one.
    pub fn with_progress(mut self, tx: Sender<Progress>, every: u64) -> Self {
        self.progress_tx = Some(tx);
        self.progress_frequency = every.max(1);
        self
    }

    pub fn repeat_count(&self) -> u64 {
        self.repeat_count
    }

    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Rewinds the underlying source.
    pub fn restart(&mut self) {
        self.source.restart();
    }

    pub fn run_series(&mut self) -> Result<EstimateSeries, EstimateError> {
        let start = Instant::now();
        let total = self.repeat_count;
        let every = self.progress_frequency;
        let tx = self.progress_tx.as_ref();

        info!(
            repeat_count = self.repeat_count,
            sample_count = self.sample_count,
            "Starting estimate series."
        );

        let series = collect(
            &mut self.source,
            self.repeat_count,
            self.sample_count,
            |series| {
                let completed = series.len() as u64;
                if completed % every != 0 && completed != total {
                    return;
                }
                let progress = Progress {
                    completed,
                    total,
                    latest: series.latest().unwrap_or(0.0),
                    elapsed_seconds: start.elapsed().as_secs_f64(),
                };
                debug!(%progress, "Series progress.");
                if let Some(tx) = tx {
                    let _ = tx.send(progress);
                }
            },
        )?;

        info!(
            summary = %series.summary(),
            elapsed_seconds = start.elapsed().as_secs_f64(),
            "Estimate series complete."
        );
        Ok(series)
    }
}
