use anyhow::{Context, Result};
use tracing::info;

use crate::estimation::Summary;
use crate::presentation::{HistogramView, PlotConfig, RenderSurface};
use crate::tasks::{HistogramDriver, SeriesJob};
use crate::ui::types::build::{build_surface, plot_config};
use crate::ui::types::choices::{EstimatePiParams, TaskChoice};

pub fn run_task(task: TaskChoice) -> Result<Summary> {
    match task {
        TaskChoice::EstimatePi(params) => estimate_pi(params),
    }
}

fn estimate_pi(params: EstimatePiParams) -> Result<Summary> {
    let driver = HistogramDriver::try_from(&params)?;
    let config = plot_config(&params);
    let mut surface = build_surface(params.surface)?;
    run_with_surface(
        driver,
        params.progress_frequency,
        config,
        surface.as_mut(),
    )
}

/// Runs the series on a worker thread, reports progress, then renders.
pub fn run_with_surface(
    driver: HistogramDriver,
    progress_frequency: u64,
    config: PlotConfig,
    surface: &mut dyn RenderSurface,
) -> Result<Summary> {
    let repeat_count = driver.repeat_count();
    let sample_count = driver.sample_count();

    let job = SeriesJob::spawn_with_progress(driver, progress_frequency)?;
    if let Some(rx) = job.progress() {
        for p in rx.iter() {
            info!(
                completed = p.completed,
                total = p.total,
                latest = p.latest,
                "{:.1}% of estimates done.",
                p.fraction() * 100.0
            );
        }
    }
    let series = job.wait()?;

    let view = HistogramView::new(&series, repeat_count, sample_count, config);
    surface
        .render(&view)
        .context("failed to render histogram")?;

    info!(summary = %view.summary, "Run finished.");
    Ok(view.summary)
}
