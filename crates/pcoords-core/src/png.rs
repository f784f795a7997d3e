// File: crates/pcoords-core/src/png.rs
// Summary: Skia-backed canvas rendering the recorded figure to PNG via a CPU raster surface.

use std::path::PathBuf;

use anyhow::Result;
use skia_safe as skia;

use crate::canvas::{Canvas, Polyline, VLine};
use crate::theme::Theme;
use crate::types::{Insets, LineStyle, Rgba, HEIGHT, WIDTH};

pub struct PngOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable text (tick labels, legend) for deterministic output
    /// across platforms and font stacks.
    pub draw_labels: bool,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

/// Canvas backend that records drawing operations and rasterizes them at
/// `show()`, writing a PNG to the configured path.
pub struct PngCanvas {
    opts: PngOptions,
    output: PathBuf,
    polylines: Vec<Polyline>,
    vlines: Vec<VLine>,
    xticks: Vec<f64>,
    xtick_labels: Vec<String>,
    xlim: Option<(f64, f64)>,
    legend_on: bool,
    grid_on: bool,
}

impl PngCanvas {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self::with_options(output, PngOptions::default())
    }

    pub fn with_options(output: impl Into<PathBuf>, opts: PngOptions) -> Self {
        Self {
            opts,
            output: output.into(),
            polylines: Vec::new(),
            vlines: Vec::new(),
            xticks: Vec::new(),
            xtick_labels: Vec::new(),
            xlim: None,
            legend_on: false,
            grid_on: false,
        }
    }

    pub fn output_path(&self) -> &std::path::Path { &self.output }

    /// Rasterize the recorded figure and return PNG bytes without
    /// touching the filesystem.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        // Create raster surface
        let mut surface = skia::surfaces::raster_n32_premul((self.opts.width, self.opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        // Background
        canvas.clear(to_skia(self.opts.theme.background));

        // Paddings & plot rect
        let l = self.opts.insets.left as i32;
        let r = self.opts.width - self.opts.insets.right as i32;
        let t = self.opts.insets.top as i32;
        let b = self.opts.height - self.opts.insets.bottom as i32;

        // Data ranges: x from explicit limits or drawn extent, y from the
        // drawn polylines with a 2% margin.
        let (x_min, x_max) = self.x_range();
        let (y_min, y_max) = self.y_range();
        let xspan = (x_max - x_min).max(1e-9);
        let yspan = (y_max - y_min).max(1e-9);
        let sx = |x: f64| -> f32 { l as f32 + ((x - x_min) / xspan) as f32 * (r - l) as f32 };
        let sy = |y: f64| -> f32 { b as f32 - ((y - y_min) / yspan) as f32 * (b - t) as f32 };

        if self.grid_on {
            draw_grid(canvas, l, t, r, b, self.opts.theme.grid);
        }

        // Vertical guides
        for v in &self.vlines {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(v.style.width.max(0.1));
            paint.set_color(to_skia(v.style.color));
            let x = sx(v.x);
            canvas.draw_line((x, t as f32), (x, b as f32), &paint);
        }

        // Instance polylines
        for line in &self.polylines {
            draw_polyline(canvas, line, &sx, &sy);
        }

        // Frame
        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(to_skia(self.opts.theme.axis_line));
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.5);
        canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
        canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);

        if self.opts.draw_labels {
            self.draw_tick_labels(canvas, b, &sx);
            if self.legend_on {
                self.draw_legend(canvas, l, t, r);
            }
        }

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    fn x_range(&self) -> (f64, f64) {
        if let Some((min, max)) = self.xlim {
            if max > min {
                return (min, max);
            }
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for line in &self.polylines {
            for &x in &line.xs {
                min = min.min(x);
                max = max.max(x);
            }
        }
        for v in &self.vlines {
            min = min.min(v.x);
            max = max.max(v.x);
        }
        if !min.is_finite() || !max.is_finite() {
            return (0.0, 1.0);
        }
        if (max - min).abs() < 1e-9 { max = min + 1.0; }
        (min, max)
    }

    fn y_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for line in &self.polylines {
            for &y in &line.ys {
                min = min.min(y);
                max = max.max(y);
            }
        }
        if !min.is_finite() || !max.is_finite() {
            return (0.0, 1.0);
        }
        if (max - min).abs() < 1e-9 { max = min + 1.0; }
        let m = (max - min) * 0.02;
        (min - m, max + m)
    }

    fn draw_tick_labels(&self, canvas: &skia::Canvas, b: i32, sx: &dyn Fn(f64) -> f32) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(self.opts.theme.tick_label));
        let mut font = skia::Font::default();
        font.set_size(14.0);

        for (pos, label) in self.xticks.iter().zip(self.xtick_labels.iter()) {
            // Rough centering: half the label width at ~7px per glyph
            let x = sx(*pos) - label.len() as f32 * 3.5;
            canvas.draw_str(label.as_str(), (x, b as f32 + 24.0), &font, &paint);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, l: i32, t: i32, r: i32) {
        let mut entries: Vec<(&str, Rgba)> = Vec::new();
        for line in &self.polylines {
            if !entries.iter().any(|(label, _)| *label == line.label.as_str()) {
                entries.push((line.label.as_str(), line.color));
            }
        }
        if entries.is_empty() {
            return;
        }

        let mut font = skia::Font::default();
        font.set_size(14.0);
        let mut text_paint = skia::Paint::default();
        text_paint.set_color(to_skia(self.opts.theme.legend_text));

        let swatch_w = 18.0f32;
        let row_h = 20.0f32;
        let x0 = (r as f32 - 140.0).max(l as f32 + 8.0);
        let mut y = t as f32 + 18.0;

        for (label, color) in entries {
            let mut swatch = skia::Paint::default();
            swatch.set_anti_alias(true);
            swatch.set_style(skia::paint::Style::Stroke);
            swatch.set_stroke_width(3.0);
            swatch.set_color(to_skia(color));
            canvas.draw_line((x0, y - 5.0), (x0 + swatch_w, y - 5.0), &swatch);
            canvas.draw_str(label, (x0 + swatch_w + 6.0, y), &font, &text_paint);
            y += row_h;
        }
    }
}

impl Canvas for PngCanvas {
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
        self.legend_on = true;
    }

    fn grid(&mut self, on: bool) {
        self.grid_on = on;
    }

    fn show(&mut self) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = self.output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.output, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn draw_grid(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, color: Rgba) {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia(color));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // horizontals only; vertical structure comes from the guide lines
    for y in linspace(t as f64, b as f64, 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_polyline(
    canvas: &skia::Canvas,
    line: &Polyline,
    sx: &dyn Fn(f64) -> f32,
    sy: &dyn Fn(f64) -> f32,
) {
    if line.xs.len() < 2 || line.xs.len() != line.ys.len() {
        return;
    }
    let mut path = skia::Path::new();
    path.move_to((sx(line.xs[0]), sy(line.ys[0])));
    for (&x, &y) in line.xs.iter().zip(line.ys.iter()).skip(1) {
        path.line_to((sx(x), sy(y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(to_skia(line.color));
    canvas.draw_path(&path, &stroke);
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
