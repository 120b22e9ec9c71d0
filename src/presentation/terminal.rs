use std::io::Write;

use crate::presentation::{Bins, HistogramView, RenderError, RenderSurface};

pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Text histogram: one `#` bar per auto bin, then the summary lines.
pub struct TerminalSurface<W: Write> {
    out: W,
    bar_width: usize,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn bar_len(&self, count: usize, max_count: usize) -> usize {
        if count == 0 || max_count == 0 {
            return 0;
        }
        let scaled = (count as f64 / max_count as f64 * self.bar_width as f64).round() as usize;
        scaled.max(1)
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    fn render(&mut self, view: &HistogramView<'_>) -> Result<(), RenderError> {
        let bins = Bins::auto(view.series.values());
        let max_count = bins.max_count();
        let bars: Vec<(f64, f64, usize, usize)> = bins
            .iter()
            .map(|b| (b.lower, b.upper, b.count, self.bar_len(b.count, max_count)))
            .collect();

        let w = &mut self.out;
        writeln!(w, "{}", view.config.title)?;
        writeln!(w)?;
        if bars.is_empty() {
            writeln!(w, "(no estimates)")?;
        }
        for (lower, upper, count, len) in bars {
            writeln!(
                w,
                "{:>9.6} - {:<9.6} {:>7} | {}",
                lower,
                upper,
                count,
                "#".repeat(len)
            )?;
        }
        writeln!(w)?;
        for line in view.summary_lines() {
            writeln!(w, "{line}")?;
        }
        w.flush()?;
        Ok(())
    }
}
