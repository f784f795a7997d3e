// File: crates/pcoords-core/tests/render.rs
// Purpose: Validate drawn figure contents against the recording canvas.

use pcoords_core::{DataTable, LineStyle, ParallelCoordinates, RecordingCanvas, Rgba};

fn table(n_rows: usize, n_cols: usize) -> DataTable {
    let rows = (0..n_rows)
        .map(|i| (0..n_cols).map(|j| (i * n_cols + j) as f64).collect())
        .collect();
    DataTable::from_rows(rows).expect("rectangular table")
}

#[test]
fn one_polyline_per_instance_one_tick_per_feature() {
    let x = table(6, 5);
    let y = vec![0, 1, 2, 0, 1, 2];
    let mut viz = ParallelCoordinates::new(RecordingCanvas::new());
    viz.fit(&x, Some(&y)).expect("fit");

    let canvas = viz.canvas();
    assert_eq!(canvas.polylines.len(), 6);
    assert_eq!(canvas.xticks, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(canvas.xtick_labels, vec!["0", "1", "2", "3", "4"]);
}

#[test]
fn xlim_spans_axes_exactly() {
    let x = table(3, 5);
    let y = vec![0, 0, 1];
    let mut viz = ParallelCoordinates::new(RecordingCanvas::new());
    viz.fit(&x, Some(&y)).expect("fit");
    assert_eq!(viz.canvas().xlim, Some((0.0, 4.0)));
}

#[test]
fn polylines_carry_row_values() {
    let x = DataTable::from_rows(vec![vec![1.5, -2.0, 0.25]]).expect("table");
    let y = vec!["only"];
    let mut viz = ParallelCoordinates::new(RecordingCanvas::new());
    viz.fit(&x, Some(&y)).expect("fit");

    let line = &viz.canvas().polylines[0];
    assert_eq!(line.xs, vec![0.0, 1.0, 2.0]);
    assert_eq!(line.ys, vec![1.5, -2.0, 0.25]);
    assert_eq!(line.label, "only");
}

#[test]
fn default_vlines_one_per_axis() {
    let x = table(2, 4);
    let y = vec![0, 1];
    let mut viz = ParallelCoordinates::new(RecordingCanvas::new());
    viz.fit(&x, Some(&y)).expect("fit");

    let canvas = viz.canvas();
    assert_eq!(canvas.vlines.len(), 4);
    for (i, v) in canvas.vlines.iter().enumerate() {
        assert_eq!(v.x, i as f64);
        assert_eq!(v.style, LineStyle { width: 1.0, color: Rgba::BLACK });
    }
}

#[test]
fn vlines_disabled_draws_none() {
    let x = table(2, 4);
    let y = vec![0, 1];
    let mut viz = ParallelCoordinates::new(RecordingCanvas::new()).with_vlines(false);
    viz.fit(&x, Some(&y)).expect("fit");
    assert!(viz.canvas().vlines.is_empty());
}

#[test]
fn vline_style_override() {
    let style = LineStyle { width: 2.5, color: Rgba::rgb(200, 0, 0) };
    let x = table(1, 2);
    let y = vec![0];
    let mut viz = ParallelCoordinates::new(RecordingCanvas::new()).with_vlines_style(style);
    viz.fit(&x, Some(&y)).expect("fit");
    assert_eq!(viz.canvas().vlines[0].style, style);
}

#[test]
fn instances_of_one_class_share_a_color() {
    let x = table(4, 3);
    let y = vec!["a", "b", "a", "b"];
    let mut viz = ParallelCoordinates::new(RecordingCanvas::new());
    viz.fit(&x, Some(&y)).expect("fit");

    let lines = &viz.canvas().polylines;
    assert_eq!(lines[0].color, lines[2].color);
    assert_eq!(lines[1].color, lines[3].color);
    assert_ne!(lines[0].color, lines[1].color);
    assert_eq!(lines[0].label, "a");
    assert_eq!(lines[1].label, "b");
}

#[test]
fn finish_attaches_legend_grid_and_shows() {
    let x = table(5, 3);
    let y = vec![1, 0, 1, 2, 0];
    let mut viz = ParallelCoordinates::new(RecordingCanvas::new());
    viz.fit(&x, Some(&y)).expect("fit");
    let canvas = viz.finish().expect("finish");

    // One legend entry per distinct class actually drawn
    let mut labels: Vec<&str> = canvas.legend_entries.iter().map(|(l, _)| l.as_str()).collect();
    labels.sort_unstable();
    assert_eq!(labels, vec!["0", "1", "2"]);
    assert!(canvas.grid_on);
    assert!(canvas.shown);
}

#[test]
fn fit_chains_into_finish() {
    let x = table(2, 2);
    let y = vec![0, 1];
    let mut viz = ParallelCoordinates::new(RecordingCanvas::new());
    viz.fit(&x, Some(&y)).expect("fit").fit(&x, Some(&y)).expect("chained fit");
    let canvas = viz.finish().expect("finish");
    // Two fits, two polylines each
    assert_eq!(canvas.polylines.len(), 4);
}

#[test]
fn explicit_palette_colors_classes_in_order() {
    let palette = vec![Rgba::rgb(10, 20, 30), Rgba::rgb(40, 50, 60)];
    let x = table(2, 3);
    let y = vec!["a", "b"];
    let mut viz = ParallelCoordinates::new(RecordingCanvas::new()).with_color(palette.clone());
    viz.fit(&x, Some(&y)).expect("fit");

    let lines = &viz.canvas().polylines;
    assert_eq!(lines[0].color, palette[0]);
    assert_eq!(lines[1].color, palette[1]);
}
