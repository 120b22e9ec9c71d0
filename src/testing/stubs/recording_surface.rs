use crate::presentation::{HistogramView, RenderError, RenderSurface};

/// Keeps what it was asked to render.
#[derive(Default)]
pub struct RecordingSurface {
    pub values: Vec<f64>,
    pub lines: Vec<String>,
    pub titles: Vec<String>,
    pub renders: usize,
}

impl RenderSurface for RecordingSurface {
    fn render(&mut self, view: &HistogramView<'_>) -> Result<(), RenderError> {
        self.values = view.series.values().to_vec();
        self.lines = view.summary_lines().to_vec();
        self.titles.push(view.config.title.clone());
        self.renders += 1;
        Ok(())
    }
}
