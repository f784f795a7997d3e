// File: crates/pcoords-core/src/error.rs
// Summary: Typed error taxonomy for resolution, coloring, and rendering.

/// Errors raised before any drawing happens. A failed fit leaves the
/// canvas exactly as it was; there is no partially drawn figure.
#[derive(Debug, thiserror::Error)]
pub enum PcoordsError {
    /// Feature name list length disagrees with the matrix column count.
    #[error("feature list has {actual} names but the matrix has {expected} columns")]
    ShapeMismatch { expected: usize, actual: usize },

    /// The observation matrix is not rectangular.
    #[error("row {row} has {actual} values, expected {expected}")]
    RaggedRow { row: usize, expected: usize, actual: usize },

    /// Label vector length disagrees with the matrix row count.
    #[error("label vector has {actual} entries but the matrix has {expected} rows")]
    LabelLength { expected: usize, actual: usize },

    /// No label vector: classes cannot be derived and instances cannot
    /// be colored.
    #[error("no label vector supplied; cannot resolve classes or color instances")]
    MissingClassInfo,

    /// A label value is not covered by the resolved class mapping.
    #[error("instance {instance} has label {label:?} which maps to no known class")]
    UnknownLabel { instance: usize, label: String },

    /// Explicit class list length disagrees with the distinct label count.
    #[error("{classes} class names supplied for {labels} distinct labels")]
    ClassCount { classes: usize, labels: usize },

    /// An explicit palette with zero colors was supplied.
    #[error("explicit color palette is empty")]
    EmptyPalette,

    /// The requested continuous colormap is not registered.
    #[error("unknown colormap {name:?}")]
    UnknownColormap { name: String },
}

pub type Result<T> = std::result::Result<T, PcoordsError>;
