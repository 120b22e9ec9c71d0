pub mod binning;
mod error;
pub mod plotly;
mod series_file;
mod surface;
mod terminal;
mod view;

pub use binning::{Bin, Bins};
pub use error::RenderError;
pub use plotly::{HtmlFileSurface, HtmlSurface};
pub use series_file::SeriesFileSurface;
pub use surface::RenderSurface;
pub use terminal::TerminalSurface;
pub use view::{HistogramView, PlotConfig};
