use crate::presentation::{HistogramView, RenderError};

/// Output boundary for a finished series.
///
/// The numeric core hands over a plain [`HistogramView`]; surfaces decide how
/// to bin, draw and write it.
pub trait RenderSurface {
    fn render(&mut self, view: &HistogramView<'_>) -> Result<(), RenderError>;
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn render(&mut self, view: &HistogramView<'_>) -> Result<(), RenderError> {
        (**self).render(view)
    }
}
