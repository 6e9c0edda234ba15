//! Grid authoring model
//!
//! This module contains:
//! - Cells, the smallest rectangular units
//! - Grids, which lay out and own a fixed block of cells
//! - Per-grid display flags read by renderers
//! - The collection that assigns grid ids and owns every grid

/// Single rectangular cell with derived corners
pub mod cell;
/// Id-keyed ownership of grids
pub mod collection;
/// Presentation flags attached to each grid
pub mod display;
/// Row-major block of uniformly sized cells
pub mod grid;

pub use cell::{Cell, CellId};
pub use collection::GridCollection;
pub use display::DisplayFlags;
pub use grid::{Grid, GridId};
