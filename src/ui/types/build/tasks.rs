use crate::presentation::PlotConfig;
use crate::sources::RandomSource;
use crate::tasks::HistogramDriver;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::EstimatePiParams;

impl TryFrom<&EstimatePiParams> for HistogramDriver {
    type Error = BuildError;

    fn try_from(p: &EstimatePiParams) -> Result<Self, Self::Error> {
        let source = RandomSource::new(p.seed);
        Ok(HistogramDriver::new(
            Box::new(source),
            p.repeat_count,
            p.sample_count,
        )?)
    }
}

/// Chart options for a task; a blank title falls back to the default.
pub fn plot_config(p: &EstimatePiParams) -> PlotConfig {
    let config = PlotConfig::for_repeat_count(p.repeat_count);
    match p.title.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => config.with_title(t),
        _ => config,
    }
}
