// File: crates/pcoords-core/src/lib.rs
// Summary: Core library entry point; exports the parallel-coordinates API.

pub mod canvas;
pub mod color;
pub mod data;
pub mod error;
pub mod pcoords;
pub mod png;
pub mod resolve;
pub mod theme;
pub mod types;

pub use canvas::{Canvas, RecordingCanvas};
pub use color::{resolve_colors, Colormap, DEFAULT_PALETTE};
pub use data::DataTable;
pub use error::PcoordsError;
pub use pcoords::ParallelCoordinates;
pub use png::{PngCanvas, PngOptions};
pub use resolve::{resolve_classes, resolve_features, ClassMap};
pub use theme::Theme;
pub use types::{Insets, LineStyle, Rgba};
