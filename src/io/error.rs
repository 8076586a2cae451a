//! Error types for grid construction, carving, generation and output

use std::fmt;
use std::path::PathBuf;

use crate::spatial::Cell;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Grid dimension is non-positive, or the grid has too many cells to index
    InvalidDimension {
        /// Name of the offending dimension (`length` or `width`)
        dimension: &'static str,
        /// Provided value, rendered for display
        value: String,
    },

    /// Carve requested between cells that do not share an edge
    ///
    /// Indicates a broken algorithm rather than bad input.
    NotAdjacent {
        /// First cell of the requested passage
        from: Cell,
        /// Second cell of the requested passage
        to: Cell,
    },

    /// Cell lies outside the grid or region it was used with
    OutOfBounds {
        /// The offending cell
        cell: Cell,
        /// Dimensions of the grid or region (rows, cols)
        dimensions: (usize, usize),
    },

    /// A partition worker panicked before finishing its region
    WorkerPanicked {
        /// Index of the partition whose worker failed
        partition: usize,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered maze to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to write a timing row to a CSV file
    CsvExport {
        /// Path of the CSV file
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { dimension, value } => {
                write!(
                    f,
                    "Invalid {dimension} '{value}': dimensions must be positive and the cell count must fit in isize"
                )
            }
            Self::NotAdjacent { from, to } => {
                write!(f, "Cells {from} and {to} are not adjacent")
            }
            Self::OutOfBounds { cell, dimensions } => {
                write!(
                    f,
                    "Cell {cell} is outside the {}x{} grid",
                    dimensions.0, dimensions.1
                )
            }
            Self::WorkerPanicked { partition } => {
                write!(f, "Worker for partition {partition} panicked")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::CsvExport { path, source } => {
                write!(f, "Failed to write CSV '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::CsvExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MazeError {
    MazeError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
