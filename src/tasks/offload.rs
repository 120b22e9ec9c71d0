//! Runs a [`HistogramDriver`] off the calling thread.
//!
//! The full batch (`repeat_count * sample_count` points) can take seconds, so
//! the presentation side spawns a [`SeriesJob`], drains its progress channel
//! and collects the finished series with [`SeriesJob::wait`].

use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use thiserror::Error;
use tracing::{debug, error};

use crate::estimation::{EstimateError, EstimateSeries};
use crate::tasks::{HistogramDriver, Progress};

const WORKER_THREAD_NAME: &str = "monte-pi-series";

#[derive(Debug, Error)]
pub enum JobError {
    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("worker thread panicked")]
    Panicked,
}

pub struct SeriesJob {
    handle: JoinHandle<Result<EstimateSeries, EstimateError>>,
    progress_rx: Option<Receiver<Progress>>,
}

impl SeriesJob {
    pub fn spawn(driver: HistogramDriver) -> Result<Self, JobError> {
        Self::spawn_inner(driver, None)
    }

    /// Like [`spawn`](Self::spawn), with progress reported every `every`
    /// estimates. The channel closes once the worker finishes.
    pub fn spawn_with_progress(driver: HistogramDriver, every: u64) -> Result<Self, JobError> {
        let (tx, rx) = mpsc::channel();
        Self::spawn_inner(driver.with_progress(tx, every), Some(rx))
    }

    fn spawn_inner(
        mut driver: HistogramDriver,
        progress_rx: Option<Receiver<Progress>>,
    ) -> Result<Self, JobError> {
        debug!(
            repeat_count = driver.repeat_count(),
            sample_count = driver.sample_count(),
            "Spawning series worker."
        );
        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || driver.run_series())
            .map_err(JobError::Spawn)?;

        Ok(Self {
            handle,
            progress_rx,
        })
    }

    pub fn progress(&self) -> Option<&Receiver<Progress>> {
        self.progress_rx.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks until the worker is done and hands back its series.
    pub fn wait(self) -> Result<EstimateSeries, JobError> {
        match self.handle.join() {
            Ok(result) => Ok(result?),
            Err(_) => {
                error!("Series worker panicked.");
                Err(JobError::Panicked)
            }
        }
    }
}
