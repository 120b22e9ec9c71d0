mod error;
mod surfaces;
mod tasks;

pub use error::BuildError;

pub use surfaces::build_surface;
pub use tasks::plot_config;
