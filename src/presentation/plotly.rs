//! Standalone HTML page with a Plotly histogram.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::presentation::{HistogramView, RenderError, RenderSurface};

pub const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const PLOT_ELEMENT_ID: &str = "histogram";

#[derive(Serialize)]
struct HistogramTrace<'a> {
    x: &'a [f64],
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct Title<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Layout<'a> {
    autosize: bool,
    title: Title<'a>,
}

#[derive(Serialize)]
struct PlotOptions {
    responsive: bool,
}

#[derive(Serialize)]
struct Figure<'a> {
    data: [HistogramTrace<'a>; 1],
    layout: Layout<'a>,
    config: PlotOptions,
}

impl<'a> Figure<'a> {
    fn from_view(view: &'a HistogramView<'_>) -> Self {
        Self {
            data: [HistogramTrace {
                x: view.series.values(),
                kind: "histogram",
            }],
            layout: Layout {
                autosize: view.config.autosize,
                title: Title {
                    text: &view.config.title,
                },
            },
            config: PlotOptions {
                responsive: view.config.use_resize_handler,
            },
        }
    }
}

/// Plotly figure (`data`, `layout`, `config`) for a view. Binning is left to
/// Plotly's defaults.
pub fn figure_json(view: &HistogramView<'_>) -> Result<Value, RenderError> {
    Ok(serde_json::to_value(Figure::from_view(view))?)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub struct HtmlSurface<W: Write> {
    out: W,
    plotly_src: String,
    generated_at: Option<DateTime<Utc>>,
}

impl HtmlSurface<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        let file = File::create(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "Created HTML output.");
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> HtmlSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            plotly_src: DEFAULT_PLOTLY_SRC.to_string(),
            generated_at: None,
        }
    }

    pub fn with_plotly_src<S: Into<String>>(mut self, src: S) -> Self {
        self.plotly_src = src.into();
        self
    }

    /// Pins the footer timestamp. Defaults to the render time.
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for HtmlSurface<W> {
    fn render(&mut self, view: &HistogramView<'_>) -> Result<(), RenderError> {
        let figure = serde_json::to_string(&Figure::from_view(view))?;
        // keep a title like "</script>" from closing the tag early
        let figure = figure.replace("</", "<\\/");
        let title = escape_html(&view.config.title);
        let generated = self
            .generated_at
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        let w = &mut self.out;
        writeln!(w, "<!DOCTYPE html>")?;
        writeln!(w, "<html lang=\"en\">")?;
        writeln!(w, "<head>")?;
        writeln!(w, "<meta charset=\"utf-8\">")?;
        writeln!(w, "<title>{title}</title>")?;
        writeln!(w, "<script src=\"{}\"></script>", escape_html(&self.plotly_src))?;
        writeln!(w, "</head>")?;
        writeln!(w, "<body>")?;
        writeln!(
            w,
            "<div style=\"display: flex; justify-content: center; align-items: center;\">"
        )?;
        writeln!(
            w,
            "<div id=\"{PLOT_ELEMENT_ID}\" style=\"width: 100%; height: 100%;\"></div>"
        )?;
        writeln!(w, "<div>")?;
        for line in view.summary_lines() {
            writeln!(w, "<p>{}</p>", escape_html(&line))?;
        }
        writeln!(w, "</div>")?;
        writeln!(w, "</div>")?;
        writeln!(w, "<footer><small>Generated {generated}</small></footer>")?;
        writeln!(w, "<script>")?;
        writeln!(w, "const figure = {figure};")?;
        writeln!(
            w,
            "Plotly.newPlot(\"{PLOT_ELEMENT_ID}\", figure.data, figure.layout, figure.config);"
        )?;
        writeln!(w, "</script>")?;
        writeln!(w, "</body>")?;
        writeln!(w, "</html>")?;
        w.flush()?;

        debug!(estimates = view.series.len(), "Rendered HTML histogram.");
        Ok(())
    }
}

/// Writes the page to `path`, opened only once there is something to render.
pub struct HtmlFileSurface {
    path: PathBuf,
    plotly_src: String,
}

impl HtmlFileSurface {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            plotly_src: DEFAULT_PLOTLY_SRC.to_string(),
        }
    }

    pub fn with_plotly_src<S: Into<String>>(mut self, src: S) -> Self {
        self.plotly_src = src.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderSurface for HtmlFileSurface {
    fn render(&mut self, view: &HistogramView<'_>) -> Result<(), RenderError> {
        HtmlSurface::create(&self.path)?
            .with_plotly_src(self.plotly_src.as_str())
            .render(view)?;
        info!(path = %self.path.display(), "Wrote HTML histogram.");
        Ok(())
    }
}
