//! Authoring model for rectangular grids of cells placed in 3D world space
//!
//! Grids lie in the horizontal XZ plane at a fixed Y height. Each grid owns a
//! row-major block of uniformly sized cells whose corners are kept consistent
//! with their centers whenever a grid is moved. A collection assigns grid ids,
//! owns every grid, and can be flattened to a snapshot for persistence.

#![forbid(unsafe_code)]

/// Points, vectors and rectangular bounds in the XZ plane
pub mod geometry;
/// Snapshots, preview rendering, command-line handling and error types
pub mod io;
/// Cells, grids and the collection that owns them
pub mod model;

pub use geometry::{Bounds, Vec3};
pub use io::error::{GridError, Result};
pub use model::{Cell, CellId, DisplayFlags, Grid, GridCollection, GridId};
