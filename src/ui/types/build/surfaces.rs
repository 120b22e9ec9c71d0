use std::io::Stdout;

use crate::presentation::{HtmlFileSurface, RenderSurface, SeriesFileSurface, TerminalSurface};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{
    HtmlPageParameters, MAX_BAR_WIDTH, SeriesFileParameters, SurfaceChoice, TerminalParameters,
};

impl TryFrom<TerminalParameters> for TerminalSurface<Stdout> {
    type Error = BuildError;

    fn try_from(p: TerminalParameters) -> Result<Self, Self::Error> {
        let bar_width = Some(p.bar_width)
            .filter(|w| (1..=MAX_BAR_WIDTH).contains(w))
            .and_then(|w| usize::try_from(w).ok())
            .ok_or_else(|| {
                BuildError::InvalidParameter(format!(
                    "bar_width must be between 1 and {MAX_BAR_WIDTH}, got {}",
                    p.bar_width
                ))
            })?;
        Ok(TerminalSurface::new(std::io::stdout()).with_bar_width(bar_width))
    }
}

impl TryFrom<HtmlPageParameters> for HtmlFileSurface {
    type Error = BuildError;

    fn try_from(p: HtmlPageParameters) -> Result<Self, Self::Error> {
        let surface = HtmlFileSurface::new(p.path);
        Ok(match p.plotly_src.as_deref().map(str::trim) {
            Some(src) if !src.is_empty() => surface.with_plotly_src(src),
            _ => surface,
        })
    }
}

impl TryFrom<SeriesFileParameters> for SeriesFileSurface {
    type Error = BuildError;

    fn try_from(p: SeriesFileParameters) -> Result<Self, Self::Error> {
        Ok(SeriesFileSurface::new(p.path)?)
    }
}

pub fn build_surface(choice: SurfaceChoice) -> Result<Box<dyn RenderSurface>, BuildError> {
    match choice {
        SurfaceChoice::Terminal(p) => {
            let s = TerminalSurface::try_from(p)?;
            Ok(Box::new(s))
        }
        SurfaceChoice::HtmlPage(p) => {
            let s = HtmlFileSurface::try_from(p)?;
            Ok(Box::new(s))
        }
        SurfaceChoice::SeriesFile(p) => {
            let s = SeriesFileSurface::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::EstimateSeries;
    use crate::presentation::{HistogramView, PlotConfig, RenderError};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn zero_bar_width_is_rejected() {
        let err = TerminalSurface::try_from(TerminalParameters { bar_width: 0 })
            .err()
            .unwrap();
        assert!(matches!(err, BuildError::InvalidParameter(_)));
    }

    #[test]
    fn oversized_bar_width_is_rejected() {
        for bar_width in [MAX_BAR_WIDTH + 1, u64::MAX] {
            let err = TerminalSurface::try_from(TerminalParameters { bar_width })
                .err()
                .unwrap();
            assert!(matches!(err, BuildError::InvalidParameter(_)));
        }
    }

    #[test]
    fn widest_bar_width_is_accepted() {
        let params: TerminalParameters =
            serde_json::from_value(serde_json::json!({ "bar_width": MAX_BAR_WIDTH })).unwrap();
        assert!(TerminalSurface::try_from(params).is_ok());
    }

    #[test]
    fn html_surface_defers_file_creation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.html");
        build_surface(SurfaceChoice::HtmlPage(HtmlPageParameters {
            path: path.clone(),
            plotly_src: None,
        }))
        .unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn html_surface_uses_configured_plotly_src() {
        let surface = HtmlFileSurface::try_from(HtmlPageParameters {
            path: PathBuf::from("pi.html"),
            plotly_src: Some("  ".into()),
        })
        .unwrap();
        assert_eq!(surface.path(), PathBuf::from("pi.html").as_path());

        let dir = tempdir().unwrap();
        let path = dir.path().join("page.html");
        let mut surface = build_surface(SurfaceChoice::HtmlPage(HtmlPageParameters {
            path: path.clone(),
            plotly_src: Some("local/plotly.js".into()),
        }))
        .unwrap();
        let series = EstimateSeries::from(vec![3.0]);
        surface
            .render(&HistogramView::new(&series, 1, 10, PlotConfig::for_repeat_count(1)))
            .unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("local/plotly.js"));
    }

    #[test]
    fn series_file_with_unknown_extension_fails() {
        let choice = SurfaceChoice::SeriesFile(SeriesFileParameters {
            path: PathBuf::from("series.xlsx"),
        });
        let err = build_surface(choice).err().unwrap();
        assert!(matches!(
            err,
            BuildError::Render(RenderError::UnsupportedFormat(_))
        ));
    }
}
