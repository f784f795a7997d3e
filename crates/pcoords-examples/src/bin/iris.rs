// File: crates/pcoords-examples/src/bin/iris.rs
// Summary: Minimal example that renders a parallel-coordinates plot of a small iris sample to PNG.

use pcoords_core::{DataTable, ParallelCoordinates, PngCanvas};

fn main() {
    // A handful of iris measurements, three species
    let rows = vec![
        vec![5.1, 3.5, 1.4, 0.2],
        vec![4.9, 3.0, 1.4, 0.2],
        vec![4.7, 3.2, 1.3, 0.2],
        vec![7.0, 3.2, 4.7, 1.4],
        vec![6.4, 3.2, 4.5, 1.5],
        vec![6.9, 3.1, 4.9, 1.5],
        vec![6.3, 3.3, 6.0, 2.5],
        vec![5.8, 2.7, 5.1, 1.9],
        vec![7.1, 3.0, 5.9, 2.1],
    ];
    let labels = vec![
        "setosa", "setosa", "setosa",
        "versicolor", "versicolor", "versicolor",
        "virginica", "virginica", "virginica",
    ];

    let table = DataTable::from_rows(rows)
        .expect("rectangular data")
        .with_columns(vec![
            "sepal length".into(),
            "sepal width".into(),
            "petal length".into(),
            "petal width".into(),
        ])
        .expect("column names");

    let out = std::path::PathBuf::from("target/out/example_iris.png");
    let mut viz = ParallelCoordinates::new(PngCanvas::new(&out));
    viz.fit(&table, Some(&labels)).expect("fit");
    viz.finish().expect("finish");
    println!("Wrote {}", out.display());
}
