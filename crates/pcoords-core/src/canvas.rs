// File: crates/pcoords-core/src/canvas.rs
// Summary: Drawing-surface trait and a headless recording backend.

use anyhow::Result;

use crate::types::{LineStyle, Rgba};

/// Minimal drawing surface the renderer needs. Backends record or draw;
/// `show` is the terminal step that makes the figure visible (for the
/// PNG backend, writes the file).
pub trait Canvas {
    /// Draw a polyline through (xs[i], ys[i]), tagged with a legend label.
    fn draw_polyline(&mut self, xs: &[f64], ys: &[f64], color: Rgba, label: &str);

    /// Draw a full-height vertical guide line at `x`.
    fn draw_vline(&mut self, x: f64, style: &LineStyle);

    /// Set tick positions on the horizontal axis.
    fn set_xticks(&mut self, positions: &[f64]);

    /// Set tick labels; pairs positionally with the tick positions.
    fn set_xtick_labels(&mut self, labels: &[String]);

    /// Constrain the horizontal extent to [min, max], no padding.
    fn set_xlim(&mut self, min: f64, max: f64);

    /// Attach a legend: one entry per distinct polyline label,
    /// first-seen order.
    fn legend(&mut self);

    /// Toggle the background grid.
    fn grid(&mut self, on: bool);

    /// Make the figure visible. Terminal and side-effecting.
    fn show(&mut self) -> Result<()>;
}

/// One recorded polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub color: Rgba,
    pub label: String,
}

/// One recorded vertical guide.
#[derive(Clone, Debug, PartialEq)]
pub struct VLine {
    pub x: f64,
    pub style: LineStyle,
}

/// Headless backend that records every operation. Used by tests and for
/// inspecting a render without rasterizing.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub polylines: Vec<Polyline>,
    pub vlines: Vec<VLine>,
    pub xticks: Vec<f64>,
    pub xtick_labels: Vec<String>,
    pub xlim: Option<(f64, f64)>,
    pub legend_entries: Vec<(String, Rgba)>,
    pub grid_on: bool,
    pub shown: bool,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_polyline(&mut self, xs: &[f64], ys: &[f64], color: Rgba, label: &str) {
        self.polylines.push(Polyline {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            color,
            label: label.to_string(),
        });
    }

    fn draw_vline(&mut self, x: f64, style: &LineStyle) {
        self.vlines.push(VLine { x, style: *style });
    }

    fn set_xticks(&mut self, positions: &[f64]) {
        self.xticks = positions.to_vec();
    }

    fn set_xtick_labels(&mut self, labels: &[String]) {
        self.xtick_labels = labels.to_vec();
    }

    fn set_xlim(&mut self, min: f64, max: f64) {
        self.xlim = Some((min, max));
    }

    fn legend(&mut self) {
        self.legend_entries.clear();
        for line in &self.polylines {
            if !self.legend_entries.iter().any(|(l, _)| l == &line.label) {
                self.legend_entries.push((line.label.clone(), line.color));
            }
        }
    }

    fn grid(&mut self, on: bool) {
        self.grid_on = on;
    }

    fn show(&mut self) -> Result<()> {
        self.shown = true;
        Ok(())
    }
}
