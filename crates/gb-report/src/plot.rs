//! SVG scatter plot of optimal distance against nodes expanded.
//!
//! Each selected algorithm becomes one series: x is the record's optimal
//! (Dijkstra) distance, y is that algorithm's nodes-expanded count.  Points
//! are drawn as unconnected `x` markers because several records can share an
//! x value.  The default selection is Dijkstra and A*.

use std::fmt::Write;
use std::path::Path;

use tracing::info;

use gb_bench::BenchmarkRecord;
use gb_core::Algorithm;

use crate::ReportResult;

/// Series drawn when the caller does not choose.
pub const DEFAULT_SERIES: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::AStar];

/// Configuration for SVG rendering.
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Canvas width in pixels.
    pub width:         f64,
    /// Canvas height in pixels.
    pub height:        f64,
    /// Space reserved around the plot area for title, labels, and ticks.
    pub margin_left:   f64,
    pub margin_right:  f64,
    pub margin_top:    f64,
    pub margin_bottom: f64,
    /// Half the width of an `x` marker.
    pub marker_size:   f64,
    /// Stroke color per algorithm, indexed by `Algorithm::index`.
    pub colors:        [&'static str; 4],
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width:         800.0,
            height:        600.0,
            margin_left:   80.0,
            margin_right:  30.0,
            margin_top:    50.0,
            margin_bottom: 60.0,
            marker_size:   4.0,
            colors:        ["#1F77B4", "#FF7F0E", "#2CA02C", "#D62728"],
        }
    }
}

/// One algorithm's points.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub algorithm: Algorithm,
    /// `(optimal distance, nodes expanded)` in record order.
    pub points:    Vec<(f64, f64)>,
}

/// Scatter plot builder.
pub struct ScatterPlot {
    config:  PlotConfig,
    title:   String,
    x_label: String,
    y_label: String,
    series:  Vec<Series>,
}

impl ScatterPlot {
    /// Empty plot with the standard title and axis labels.
    pub fn new(config: PlotConfig) -> Self {
        Self {
            config,
            title:   "Benchmark".to_owned(),
            x_label: "Optimal distance to goal".to_owned(),
            y_label: "Nodes expanded".to_owned(),
            series:  Vec::new(),
        }
    }

    /// One series per entry of `algorithms`, built from `records`.
    pub fn from_records(records: &[BenchmarkRecord], algorithms: &[Algorithm], config: PlotConfig) -> Self {
        algorithms
            .iter()
            .fold(Self::new(config), |plot, &a| plot.with_series(records, a))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add the nodes-expanded series for `algorithm`.
    pub fn with_series(mut self, records: &[BenchmarkRecord], algorithm: Algorithm) -> Self {
        let points = records
            .iter()
            .map(|r| (r.optimal_distance() as f64, r.result(algorithm).nodes_expanded as f64))
            .collect();
        self.series.push(Series { algorithm, points });
        self
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Render to an SVG string.
    pub fn render(&self) -> Result<String, std::fmt::Error> {
        let mut svg = String::new();
        self.render_to(&mut svg)?;
        Ok(svg)
    }

    /// Render into any `fmt::Write` target.
    pub fn render_to<W: Write>(&self, svg: &mut W) -> std::fmt::Result {
        let c = &self.config;
        let x_axis = Axis::fit(self.series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
        let y_axis = Axis::fit(self.series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));

        let left = c.margin_left;
        let right = c.width - c.margin_right;
        let top = c.margin_top;
        let bottom = c.height - c.margin_bottom;
        let px = |x: f64| left + x_axis.fraction(x) * (right - left);
        let py = |y: f64| bottom - y_axis.fraction(y) * (bottom - top);

        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#,
            w = c.width,
            h = c.height
        )?;
        writeln!(svg, r##"  <rect width="100%" height="100%" fill="#FFFFFF"/>"##)?;

        // Title
        writeln!(
            svg,
            r#"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="18">{}</text>"#,
            c.width / 2.0,
            top / 2.0 + 6.0,
            escape(&self.title)
        )?;

        // Plot frame
        writeln!(
            svg,
            r##"  <rect x="{left:.1}" y="{top:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="#333333"/>"##,
            right - left,
            bottom - top
        )?;

        // Ticks
        writeln!(svg, r##"  <g font-family="sans-serif" font-size="11" fill="#333333" stroke="#333333">"##)?;
        for t in x_axis.ticks() {
            let x = px(t);
            writeln!(svg, r#"    <line x1="{x:.1}" y1="{bottom:.1}" x2="{x:.1}" y2="{:.1}"/>"#, bottom + 5.0)?;
            writeln!(
                svg,
                r#"    <text x="{x:.1}" y="{:.1}" text-anchor="middle" stroke="none">{}</text>"#,
                bottom + 18.0,
                format_tick(t)
            )?;
        }
        for t in y_axis.ticks() {
            let y = py(t);
            writeln!(svg, r#"    <line x1="{:.1}" y1="{y:.1}" x2="{left:.1}" y2="{y:.1}"/>"#, left - 5.0)?;
            writeln!(
                svg,
                r#"    <text x="{:.1}" y="{:.1}" text-anchor="end" stroke="none">{}</text>"#,
                left - 8.0,
                y + 4.0,
                format_tick(t)
            )?;
        }
        writeln!(svg, "  </g>")?;

        // Axis labels
        writeln!(
            svg,
            r#"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="13">{}</text>"#,
            (left + right) / 2.0,
            c.height - 15.0,
            escape(&self.x_label)
        )?;
        let (lx, ly) = (20.0, (top + bottom) / 2.0);
        writeln!(
            svg,
            r#"  <text x="{lx:.1}" y="{ly:.1}" text-anchor="middle" font-family="sans-serif" font-size="13" transform="rotate(-90 {lx:.1} {ly:.1})">{}</text>"#,
            escape(&self.y_label)
        )?;

        // Series
        let s = c.marker_size;
        for series in &self.series {
            writeln!(
                svg,
                r#"  <g class="series" data-algorithm="{}" stroke="{}" stroke-width="1.5" fill="none">"#,
                series.algorithm.as_str(),
                c.colors[series.algorithm.index()]
            )?;
            for &(x, y) in &series.points {
                let (cx, cy) = (px(x), py(y));
                writeln!(
                    svg,
                    r#"    <path d="M{:.1},{:.1}L{:.1},{:.1}M{:.1},{:.1}L{:.1},{:.1}"/>"#,
                    cx - s, cy - s, cx + s, cy + s,
                    cx - s, cy + s, cx + s, cy - s
                )?;
            }
            writeln!(svg, "  </g>")?;
        }

        self.render_legend(svg, right, top)?;

        writeln!(svg, "</svg>")
    }

    /// Legend in the top-right corner of the plot area.
    fn render_legend<W: Write>(&self, svg: &mut W, right: f64, top: f64) -> std::fmt::Result {
        if self.series.is_empty() {
            return Ok(());
        }
        let s = self.config.marker_size;
        let box_w = 110.0;
        let box_h = self.series.len() as f64 * 20.0 + 10.0;
        let x0 = right - box_w - 10.0;
        let y0 = top + 10.0;

        writeln!(
            svg,
            r##"  <g class="legend" font-family="sans-serif" font-size="12">"##
        )?;
        writeln!(
            svg,
            r##"    <rect x="{x0:.1}" y="{y0:.1}" width="{box_w:.1}" height="{box_h:.1}" fill="#FFFFFF" fill-opacity="0.8" stroke="#CCCCCC"/>"##
        )?;
        for (i, series) in self.series.iter().enumerate() {
            let cx = x0 + 15.0;
            let cy = y0 + 15.0 + i as f64 * 20.0;
            writeln!(
                svg,
                r#"    <path d="M{:.1},{:.1}L{:.1},{:.1}M{:.1},{:.1}L{:.1},{:.1}" stroke="{}" stroke-width="1.5"/>"#,
                cx - s, cy - s, cx + s, cy + s,
                cx - s, cy + s, cx + s, cy - s,
                self.config.colors[series.algorithm.index()]
            )?;
            writeln!(
                svg,
                r#"    <text x="{:.1}" y="{:.1}">{}</text>"#,
                cx + 12.0,
                cy + 4.0,
                escape(series.algorithm.label())
            )?;
        }
        writeln!(svg, "  </g>")
    }

    /// Write the SVG to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> ReportResult<()> {
        let svg = self.render()?;
        std::fs::write(path, svg)?;
        info!(path = %path.display(), series = self.series.len(), points = self.point_count(), "plot written");
        Ok(())
    }
}

// ── Axis scaling ──────────────────────────────────────────────────────────────

/// Data range of one axis, padded by 5% on each side.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Axis {
    min: f64,
    max: f64,
}

impl Axis {
    fn fit(values: impl Iterator<Item = f64>) -> Self {
        let (lo, hi) = values
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

        if lo > hi {
            return Axis { min: 0.0, max: 1.0 };
        }
        if lo == hi {
            return Axis { min: lo - 1.0, max: hi + 1.0 };
        }
        let pad = (hi - lo) * 0.05;
        Axis { min: lo - pad, max: hi + pad }
    }

    /// Position of `v` along the axis in `[0, 1]`.
    fn fraction(&self, v: f64) -> f64 {
        (v - self.min) / (self.max - self.min)
    }

    /// Evenly spaced 1/2/5 × 10ⁿ tick values inside the range.
    fn ticks(&self) -> Vec<f64> {
        let step = nice_step((self.max - self.min) / 5.0);
        let first = (self.min / step).ceil() as i64;
        let last = (self.max / step).floor() as i64;
        (first..=last).map(|k| k as f64 * step).collect()
    }
}

fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 {
        1.0
    } else if norm < 3.5 {
        2.0
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
