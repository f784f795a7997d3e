// File: crates/demo/src/main.rs
// Summary: Demo loads a labeled CSV (numeric feature columns + trailing class column) and renders a PNG.

use anyhow::{Context, Result};
use pcoords_core::{DataTable, ParallelCoordinates, PngCanvas, PngOptions};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "iris.csv".to_string());
    let path = PathBuf::from(&raw);
    println!("Using input file: {}", path.display());

    let (table, labels) = load_labeled_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!(
        "Loaded {} instances x {} features",
        table.n_rows(),
        table.n_cols()
    );

    if table.n_rows() == 0 {
        anyhow::bail!("no instances loaded — check headers/delimiter.");
    }

    let colormap = std::env::args().nth(2);

    let out = out_name(&path);
    let mut viz = ParallelCoordinates::new(PngCanvas::with_options(&out, PngOptions::default()));
    if let Some(cm) = colormap {
        viz = viz.with_colormap(cm);
    }
    viz.fit(&table, Some(&labels)).context("fit failed")?;
    viz.finish().context("finish failed")?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Parse a CSV whose last column is the class label and all other columns
/// are numeric features. The header row provides feature names.
fn load_labeled_csv(path: &Path) -> Result<(DataTable, Vec<String>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        anyhow::bail!("need at least one feature column and one label column");
    }
    let feature_names: Vec<String> = headers
        .iter()
        .take(headers.len() - 1)
        .map(|h| h.to_string())
        .collect();

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut labels: Vec<String> = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("bad record at line {}", idx + 2))?;
        let mut row = Vec::with_capacity(feature_names.len());
        for (col, field) in record.iter().take(feature_names.len()).enumerate() {
            let v: f64 = field
                .parse()
                .with_context(|| format!("non-numeric value {field:?} at row {idx}, column {col}"))?;
            row.push(v);
        }
        let label = record
            .get(feature_names.len())
            .context("row shorter than header")?;
        rows.push(row);
        labels.push(label.to_string());
    }

    let table = DataTable::from_rows(rows)?.with_columns(feature_names)?;
    Ok((table, labels))
}

fn out_name(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "plot".to_string());
    PathBuf::from("target/out").join(format!("{stem}_pcoords.png"))
}
