// File: crates/pcoords-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use pcoords_core::{DataTable, ParallelCoordinates, PngCanvas, PngOptions};

fn sample_table() -> (DataTable, Vec<i32>) {
    let rows = vec![
        vec![5.1, 3.5, 1.4, 0.2],
        vec![7.0, 3.2, 4.7, 1.4],
        vec![6.3, 3.3, 6.0, 2.5],
        vec![4.9, 3.0, 1.4, 0.2],
        vec![6.4, 3.2, 4.5, 1.5],
    ];
    let table = DataTable::from_rows(rows)
        .expect("rectangular")
        .with_columns(vec![
            "sepal_len".into(),
            "sepal_wid".into(),
            "petal_len".into(),
            "petal_wid".into(),
        ])
        .expect("column names");
    (table, vec![0, 1, 2, 0, 1])
}

#[test]
fn render_smoke_png() {
    let (table, y) = sample_table();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    let mut opts = PngOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    let mut viz = ParallelCoordinates::new(PngCanvas::with_options(&out, opts));
    viz.fit(&table, Some(&y)).expect("fit should succeed");
    let canvas = viz.finish().expect("finish should succeed");

    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify the in-memory API works
    let bytes = canvas.to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    // Decoded image matches the configured surface size
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.width(), 1024);
    assert_eq!(img.height(), 640);
    // Background alpha is opaque in the top-left pixel
    assert_eq!(img.get_pixel(0, 0)[3], 255);
}
