// File: crates/pcoords-core/src/resolve.rs
// Summary: Feature-name and class-label resolution with an explicit label->class map.

use std::collections::{BTreeSet, HashMap};

use crate::data::DataTable;
use crate::error::{PcoordsError, Result};

/// Ordered class names plus the mapping from raw label string to class
/// index. Labels are never used as positional indices into the class
/// list; every lookup goes through `index`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassMap {
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

impl ClassMap {
    pub fn classes(&self) -> &[String] { &self.classes }

    pub fn len(&self) -> usize { self.classes.len() }

    pub fn is_empty(&self) -> bool { self.classes.is_empty() }

    /// Class index for a raw label, if the label is known.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Class name for a raw label, if the label is known.
    pub fn class_of(&self, label: &str) -> Option<&str> {
        self.index_of(label).map(|i| self.classes[i].as_str())
    }
}

/// Resolve feature names for a table.
/// Precedence: explicit list (length-checked), the table's own column
/// names, then stringified zero-based column indices.
pub fn resolve_features(table: &DataTable, explicit: Option<&[String]>) -> Result<Vec<String>> {
    if let Some(names) = explicit {
        if names.len() != table.n_cols() {
            return Err(PcoordsError::ShapeMismatch {
                expected: table.n_cols(),
                actual: names.len(),
            });
        }
        return Ok(names.to_vec());
    }
    if let Some(cols) = table.column_names() {
        return Ok(cols.to_vec());
    }
    Ok((0..table.n_cols()).map(|cdx| cdx.to_string()).collect())
}

/// Resolve the class list and label mapping.
///
/// Distinct labels are sorted so derived class order (and therefore color
/// assignment and legend order) is reproducible across runs. When an
/// explicit class list is supplied it pairs positionally with the sorted
/// distinct labels and must match their count.
pub fn resolve_classes(labels: Option<&[String]>, explicit: Option<&[String]>) -> Result<ClassMap> {
    let labels = match labels {
        Some(l) => l,
        None => return Err(PcoordsError::MissingClassInfo),
    };

    let distinct: Vec<String> = labels
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let classes: Vec<String> = match explicit {
        Some(names) => {
            if names.len() != distinct.len() {
                return Err(PcoordsError::ClassCount {
                    classes: names.len(),
                    labels: distinct.len(),
                });
            }
            names.to_vec()
        }
        None => distinct.clone(),
    };

    let index = distinct
        .into_iter()
        .enumerate()
        .map(|(i, label)| (label, i))
        .collect();

    Ok(ClassMap { classes, index })
}
