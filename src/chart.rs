//! # Selection Chart
//!
//! Multi-series line plot of the pump curves: flow on the x axis, head on the
//! y axis, one series per pump in its display color, with both curve
//! endpoints drawn as filled markers.
//!
//! [`render`] reports every failure to the caller. [`export`] is the
//! snapshot entry point used by the CLI: failures are written to the log
//! and never interrupt the session.

use log::{error, info};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::curve::{CurvePoint, Sampler};
use crate::pump::PumpCollection;

/// File name used when no output path is given
pub const DEFAULT_CHART_FILE: &str = "pump-curves.png";

/// Errors that can occur while rendering a chart
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Nothing to draw
    #[error("No pumps to plot")]
    NoPumps,

    /// Zero-sized canvas
    #[error("Invalid chart size {0}x{1}")]
    InvalidSize(u32, u32),

    /// Output path has no usable extension
    #[error("Unsupported chart format: {0}")]
    UnsupportedFormat(String),

    /// Error reported by the drawing backend
    #[error("Plotting error: {0}")]
    Backend(String),

    /// The drawing backend panicked
    #[error("Plotting backend panicked")]
    Panicked,
}

/// Output encoding of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    /// Raster image
    Png,
    /// Vector image
    Svg,
}

impl ChartFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ChartError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => Err(ChartError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Layout and labels of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Caption above the plot
    pub title: String,
    /// X axis description
    pub x_label: String,
    /// Y axis description
    pub y_label: String,
    /// Curve steps per series
    pub step_count: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 760,
            title: "Pump Selection Curves".to_string(),
            x_label: "Flow (L/h)".to_string(),
            y_label: "Manometric head (m)".to_string(),
            step_count: Sampler::default().step_count(),
        }
    }
}

struct Series {
    name: String,
    color: RGBColor,
    points: Vec<CurvePoint>,
}

fn collect_series(pumps: &PumpCollection, step_count: usize) -> Vec<Series> {
    let step_count = step_count.max(1);
    pumps
        .iter()
        .map(|pump| {
            let c = pump.color();
            Series {
                name: pump.name().to_string(),
                color: RGBColor(c.r, c.g, c.b),
                points: crate::curve::sample(pump, step_count),
            }
        })
        .collect()
}

/// Upper axis limits with some headroom; both axes start at zero
fn axis_limits(series: &[Series]) -> (f64, f64) {
    let (x_max, y_max) = series
        .iter()
        .flat_map(|s| s.points.iter())
        .fold((0.0f64, 0.0f64), |(x, y), p| (x.max(p.flow), y.max(p.height)));

    let x_max = if x_max > 0.0 { x_max * 1.05 } else { 1.0 };
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };
    (x_max, y_max)
}

fn backend_error<E>(err: DrawingAreaErrorKind<E>) -> ChartError
where
    E: std::error::Error + Send + Sync,
{
    ChartError::Backend(err.to_string())
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    series: &[Series],
    opts: &ChartOptions,
) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(backend_error)?;

    let (x_max, y_max) = axis_limits(series);
    let mut chart = ChartBuilder::on(&root)
        .caption(
            &opts.title,
            FontDesc::new(FontFamily::SansSerif, 28.0, FontStyle::Bold),
        )
        .margin(25)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(backend_error)?;

    chart
        .configure_mesh()
        .x_desc(opts.x_label.as_str())
        .y_desc(opts.y_label.as_str())
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.1}", v))
        .label_style(FontDesc::new(FontFamily::SansSerif, 16.0, FontStyle::Normal))
        .draw()
        .map_err(backend_error)?;

    for s in series {
        let color = s.color;
        chart
            .draw_series(LineSeries::new(
                s.points.iter().map(|p| (p.flow, p.height)),
                color.stroke_width(2),
            ))
            .map_err(backend_error)?
            .label(s.name.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        // endpoints: (min_flow, max_height) and (max_flow, min_height)
        let ends = [s.points.first(), s.points.last()];
        chart
            .draw_series(
                ends.into_iter()
                    .flatten()
                    .map(|p| Circle::new((p.flow, p.height), 5, color.filled())),
            )
            .map_err(backend_error)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .label_font(FontDesc::new(FontFamily::SansSerif, 16.0, FontStyle::Normal))
        .draw()
        .map_err(backend_error)?;

    root.present().map_err(backend_error)?;
    Ok(())
}

/// Render the curves of `pumps` to `path`
pub fn render(
    pumps: &PumpCollection,
    path: &Path,
    format: ChartFormat,
    opts: &ChartOptions,
) -> Result<(), ChartError> {
    if pumps.is_empty() {
        return Err(ChartError::NoPumps);
    }
    if opts.width == 0 || opts.height == 0 {
        return Err(ChartError::InvalidSize(opts.width, opts.height));
    }

    let series = collect_series(pumps, opts.step_count);
    let size = (opts.width, opts.height);

    let render = || match format {
        ChartFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw(root, &series, opts)
        }
        ChartFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw(root, &series, opts)
        }
    };

    panic::catch_unwind(AssertUnwindSafe(render)).map_err(|_| ChartError::Panicked)?
}

/// Render a chart snapshot, logging instead of returning failures.
///
/// Returns whether the file was written.
pub fn export(
    pumps: &PumpCollection,
    path: &Path,
    format: ChartFormat,
    opts: &ChartOptions,
) -> bool {
    match render(pumps, path, format, opts) {
        Ok(()) => {
            info!("Wrote chart: {}", path.display());
            true
        }
        Err(e) => {
            error!("Failed to export chart to {}: {}", path.display(), e);
            false
        }
    }
}
