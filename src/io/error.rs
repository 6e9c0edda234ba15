//! Error types for grid construction, collection bookkeeping and file I/O

use std::fmt;
use std::path::PathBuf;

use crate::geometry::Vec3;
use crate::model::GridId;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// A cell was given a non-positive or non-finite extent
    InvalidDimension {
        /// Which extent was rejected (`width` or `height`)
        dimension: &'static str,
        /// The rejected value
        value: f32,
    },

    /// A grid was given fewer than one column or row, or an unusable cell size
    InvalidLayout {
        /// Requested column count
        columns: usize,
        /// Requested row count
        rows: usize,
        /// Requested cell size
        cell_size: f32,
    },

    /// A grid would hold more cells than the layout limit allows
    LayoutTooLarge {
        /// Requested column count
        columns: usize,
        /// Requested row count
        rows: usize,
        /// Largest permitted cell count
        limit: usize,
    },

    /// A grid position, or a corner derived from it, is not finite
    InvalidPosition {
        /// The rejected position
        position: Vec3,
    },

    /// No grid with the given id exists in the collection
    GridNotFound {
        /// The missing id
        id: GridId,
    },

    /// Two grids in a snapshot claim the same id
    DuplicateGridId {
        /// The repeated id
        id: GridId,
    },

    /// Every grid id has been issued
    IdSpaceExhausted,

    /// Snapshot content is structurally valid JSON but unusable
    InvalidSnapshot {
        /// Description of what's wrong with the snapshot
        reason: String,
    },

    /// Snapshot could not be encoded or decoded
    Serialization {
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to save a preview image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// Caller-supplied parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Internal computation produced an unusable result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { dimension, value } => {
                write!(
                    f,
                    "Invalid cell {dimension} {value}: must be a positive finite number"
                )
            }
            Self::InvalidLayout {
                columns,
                rows,
                cell_size,
            } => {
                write!(
                    f,
                    "Invalid grid layout {columns}x{rows} with cell size {cell_size}: \
                     columns and rows must be at least 1 and cell size positive"
                )
            }
            Self::LayoutTooLarge {
                columns,
                rows,
                limit,
            } => {
                write!(
                    f,
                    "Grid layout {columns}x{rows} exceeds the limit of {limit} cells"
                )
            }
            Self::InvalidPosition { position } => {
                write!(
                    f,
                    "Invalid grid position {position}: every coordinate and corner must be finite"
                )
            }
            Self::GridNotFound { id } => write!(f, "Grid {id} does not exist"),
            Self::DuplicateGridId { id } => write!(f, "Grid id {id} appears more than once"),
            Self::IdSpaceExhausted => write!(f, "No grid ids left to assign"),
            Self::InvalidSnapshot { reason } => write!(f, "Invalid snapshot: {reason}"),
            Self::Serialization { source } => write!(f, "Snapshot encoding error: {source}"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization { source } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> GridError {
    GridError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
