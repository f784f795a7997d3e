// File: crates/pcoords-core/src/pcoords.rs
// Summary: Parallel-coordinates visualizer: resolution, per-instance polylines, axis decoration.

use crate::canvas::Canvas;
use crate::color::resolve_colors;
use crate::data::DataTable;
use crate::error::{PcoordsError, Result};
use crate::resolve::{resolve_classes, resolve_features, ClassMap};
use crate::types::{LineStyle, Rgba};

/// Parallel coordinates displays each feature as a vertical axis spaced
/// evenly along the horizontal, and each instance as a polyline drawn
/// between the axes, colored by class.
///
/// The visualizer owns its canvas. `fit` draws and returns `&mut Self`
/// for chaining; `finish` is the terminal step that attaches the legend,
/// enables the grid, shows the figure, and hands the canvas back.
#[derive(Debug)]
pub struct ParallelCoordinates<C: Canvas> {
    canvas: C,

    // Data parameters; double as the resolution cache, so repeated fits
    // reuse them instead of re-deriving.
    features: Option<Vec<String>>,
    classes: Option<Vec<String>>,
    class_map: Option<ClassMap>,

    // Visual parameters
    color: Option<Vec<Rgba>>,
    colormap: Option<String>,
    show_vlines: bool,
    vlines_style: LineStyle,
}

impl<C: Canvas> ParallelCoordinates<C> {
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            features: None,
            classes: None,
            class_map: None,
            color: None,
            colormap: None,
            show_vlines: true,
            vlines_style: LineStyle::default(),
        }
    }

    /// Explicit feature names; must match the matrix column count at fit.
    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = Some(features);
        self
    }

    /// Explicit class names; pair positionally with the sorted distinct
    /// labels and must match their count at fit.
    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.classes = Some(classes);
        self
    }

    /// Explicit discrete palette, cycled over the classes.
    pub fn with_color(mut self, color: Vec<Rgba>) -> Self {
        self.color = Some(color);
        self
    }

    /// Continuous colormap name, sampled once per class.
    pub fn with_colormap(mut self, colormap: impl Into<String>) -> Self {
        self.colormap = Some(colormap.into());
        self
    }

    /// Toggle the vertical guide line per feature axis (default on).
    pub fn with_vlines(mut self, vlines: bool) -> Self {
        self.show_vlines = vlines;
        self
    }

    /// Style for the vertical guide lines (default width 1, black).
    pub fn with_vlines_style(mut self, style: LineStyle) -> Self {
        self.vlines_style = style;
        self
    }

    /// Resolved feature names, once fit has run (or set explicitly).
    pub fn features(&self) -> Option<&[String]> {
        self.features.as_deref()
    }

    /// Resolved class names, once fit has run.
    pub fn classes(&self) -> Option<&[String]> {
        self.class_map.as_ref().map(|m| m.classes())
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Draw the figure: one polyline per instance over evenly spaced
    /// axis positions 0..F-1, plus guide lines and axis decoration.
    ///
    /// Every shape and label check runs before the first drawing call;
    /// on error the canvas is untouched by this fit.
    pub fn fit<L: ToString>(&mut self, x: &DataTable, y: Option<&[L]>) -> Result<&mut Self> {
        let labels: Vec<String> = match y {
            Some(y) => y.iter().map(|l| l.to_string()).collect(),
            None => return Err(PcoordsError::MissingClassInfo),
        };
        if labels.len() != x.n_rows() {
            return Err(PcoordsError::LabelLength {
                expected: x.n_rows(),
                actual: labels.len(),
            });
        }

        let features = resolve_features(x, self.features.as_deref())?;
        // Cached resolution wins; re-deriving from identical input would
        // reproduce it anyway.
        let class_map = match &self.class_map {
            Some(m) => m.clone(),
            None => resolve_classes(Some(&labels), self.classes.as_deref())?,
        };

        // One color per class, zipped positionally.
        let colors = resolve_colors(
            class_map.len(),
            self.color.as_deref(),
            self.colormap.as_deref(),
        )?;

        // Pre-resolve every instance's class so a bad label aborts the
        // whole figure instead of leaving it half drawn.
        let mut row_classes = Vec::with_capacity(labels.len());
        for (idx, label) in labels.iter().enumerate() {
            match class_map.index_of(label) {
                Some(cdx) => row_classes.push(cdx),
                None => {
                    return Err(PcoordsError::UnknownLabel {
                        instance: idx,
                        label: label.clone(),
                    })
                }
            }
        }

        // Evenly spaced integer axis positions, one per feature.
        let positions: Vec<f64> = (0..features.len()).map(|i| i as f64).collect();

        for (row, &cdx) in x.rows().iter().zip(row_classes.iter()) {
            self.canvas
                .draw_polyline(&positions, row, colors[cdx], &class_map.classes()[cdx]);
        }

        if self.show_vlines {
            for &pos in &positions {
                self.canvas.draw_vline(pos, &self.vlines_style);
            }
        }

        self.canvas.set_xticks(&positions);
        self.canvas.set_xtick_labels(&features);
        if let (Some(&first), Some(&last)) = (positions.first(), positions.last()) {
            // Exact span, no padding.
            self.canvas.set_xlim(first, last);
        }

        self.features = Some(features);
        self.class_map = Some(class_map);
        Ok(self)
    }

    /// Terminal display step: legend (one entry per drawn class), grid,
    /// and `show()`. Returns the canvas as the rendered-result handle.
    pub fn finish(mut self) -> anyhow::Result<C> {
        self.canvas.legend();
        self.canvas.grid(true);
        self.canvas.show()?;
        Ok(self.canvas)
    }
}
