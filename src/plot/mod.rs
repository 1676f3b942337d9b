//! # Spectrum Plotting
//!
//! SVG rendering of decoded spectra: overlay plots with vertical offsets and
//! the reversed energy axis conventional for binding-energy spectra, colour
//! fades for depth-profile series, and prominence-based peak marking.
//!
//! This module consumes the decoded records only through their query
//! interface (axis reconstruction and per-variable series); it never touches
//! the decoder.

mod color;
mod peaks;

pub use color::{fade, parse_hex};
pub use peaks::find_peaks;

use std::path::Path;

use log::debug;
use plotters::prelude::*;

/// Errors raised while rendering a figure.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// A colour string was not of the form `#rrggbb`
    #[error("invalid colour {token:?}: expected #rrggbb")]
    InvalidColor {
        /// The offending colour string
        token: String,
    },

    /// No series were supplied
    #[error("no series to plot")]
    NoSeries,

    /// A series' x and y sequences have different lengths
    #[error("series {label:?} has {x} x values but {y} y values")]
    MismatchedSeries {
        /// The series label
        label: String,
        /// Length of the x sequence
        x: usize,
        /// Length of the y sequence
        y: usize,
    },

    /// Backend drawing error
    #[error("render error: {0}")]
    Render(String),
}

/// One curve of an overlay figure.
#[derive(Debug, Clone)]
pub struct SpectrumSeries {
    /// Legend label
    pub label: String,
    /// Line colour
    pub color: RGBColor,
    /// Axis values (e.g. binding energy)
    pub x: Vec<f64>,
    /// Ordinate values (e.g. counts)
    pub y: Vec<f64>,
}

/// Figure-level options for [`render_overlay`].
#[derive(Debug, Clone)]
pub struct OverlayOptions {
    /// Figure caption
    pub title: String,
    /// Abscissa axis description
    pub x_label: String,
    /// Ordinate axis description
    pub y_label: String,
    /// Draw the abscissa decreasing left to right (binding-energy convention)
    pub reverse_x: bool,
    /// Vertical offset inserted between successive series
    pub offset: f64,
    /// Mark peaks above this prominence with crosses
    pub peak_prominence: Option<f64>,
    /// Draw the legend box
    pub legend: bool,
    /// Output size in pixels
    pub size: (u32, u32),
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            reverse_x: true,
            offset: 0.0,
            peak_prominence: None,
            legend: true,
            size: (960, 640),
        }
    }
}

/// Render an overlay of spectra to an SVG file.
///
/// Series are drawn in order, each shifted up by `offset * index`; the axis
/// ranges are computed over the shifted data.
pub fn render_overlay<P: AsRef<Path>>(
    path: P,
    series: &[SpectrumSeries],
    options: &OverlayOptions,
) -> Result<(), PlotError> {
    if series.is_empty() {
        return Err(PlotError::NoSeries);
    }
    for s in series {
        if s.x.len() != s.y.len() {
            return Err(PlotError::MismatchedSeries {
                label: s.label.clone(),
                x: s.x.len(),
                y: s.y.len(),
            });
        }
    }

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for (i, s) in series.iter().enumerate() {
        let shift = options.offset * i as f64;
        for &x in &s.x {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
        }
        for &y in &s.y {
            y_min = y_min.min(y + shift);
            y_max = y_max.max(y + shift);
        }
    }
    if !x_min.is_finite() || !y_min.is_finite() {
        return Err(PlotError::NoSeries);
    }
    let y_pad = (y_max - y_min).max(1.0) * 0.05;
    let x_range = if options.reverse_x {
        x_max..x_min
    } else {
        x_min..x_max
    };

    debug!(
        "rendering {} series to {}",
        series.len(),
        path.as_ref().display()
    );

    let root = SVGBackend::new(path.as_ref(), options.size).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .caption(&options.title, ("sans-serif", 22))
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(x_range, (y_min - y_pad)..(y_max + y_pad))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(&options.x_label)
        .y_desc(&options.y_label)
        .disable_mesh()
        .draw()
        .map_err(render_err)?;

    for (i, s) in series.iter().enumerate() {
        let shift = options.offset * i as f64;
        let color = s.color;
        let points: Vec<(f64, f64)> = s
            .x
            .iter()
            .zip(&s.y)
            .map(|(&x, &y)| (x, y + shift))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))
            .map_err(render_err)?
            .label(s.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color));

        if let Some(prominence) = options.peak_prominence {
            let peak_indices = find_peaks(&s.y, prominence);
            chart
                .draw_series(
                    peak_indices
                        .into_iter()
                        .map(|p| Cross::new(points[p], 5, color)),
                )
                .map_err(render_err)?;
        }
    }

    if options.legend {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    Ok(())
}

fn render_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Render(e.to_string())
}
