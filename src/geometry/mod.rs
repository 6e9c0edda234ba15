//! Geometric primitives shared by cells and grids
//!
//! This module contains:
//! - A three-component vector used for positions and translations
//! - Corner bounds derived from a center point and planar extents

/// Corner bounds of axis-aligned rectangles in the XZ plane
pub mod bounds;
/// Three-component vector arithmetic and parsing
pub mod vector;

pub use bounds::Bounds;
pub use vector::Vec3;
