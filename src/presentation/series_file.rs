use std::path::PathBuf;

use tracing::info;

use crate::estimation::SeriesFormat;
use crate::presentation::{HistogramView, RenderError, RenderSurface};

/// Writes the raw estimates to a CSV, TSV or JSON file.
pub struct SeriesFileSurface {
    path: PathBuf,
    format: SeriesFormat,
}

impl SeriesFileSurface {
    /// Format is taken from the file extension.
    pub fn new<P: Into<PathBuf>>(path: P) -> Result<Self, RenderError> {
        let path = path.into();
        let Some(format) = SeriesFormat::from_path(&path) else {
            return Err(RenderError::UnsupportedFormat(path));
        };
        Ok(Self { path, format })
    }

    pub fn format(&self) -> SeriesFormat {
        self.format
    }
}

impl RenderSurface for SeriesFileSurface {
    fn render(&mut self, view: &HistogramView<'_>) -> Result<(), RenderError> {
        view.series.export(&self.path, self.format)?;
        info!(
            path = %self.path.display(),
            summary = %view.summary,
            "Wrote estimate series."
        );
        Ok(())
    }
}
