//! Rectangular cell lying in the XZ plane
//!
//! A cell is described by its center and extents. Corners are derived and
//! recomputed on every position change so they are never stale.

use crate::geometry::{Bounds, Vec3};
use crate::io::error::{GridError, Result};

/// Identifier of a cell, unique within its grid
pub type CellId = usize;

/// Smallest rectangular unit of a grid
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    id: CellId,
    width: f32,
    height: f32,
    position: Vec3,
    bounds: Bounds,
}

impl Cell {
    /// Create a cell centered on `position`
    ///
    /// `width` spans the X axis and `height` the Z axis.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] if either extent is not a
    /// positive finite number
    pub fn new(id: CellId, position: Vec3, width: f32, height: f32) -> Result<Self> {
        validate_extent("width", width)?;
        validate_extent("height", height)?;

        Ok(Self {
            id,
            width,
            height,
            position,
            bounds: Bounds::from_center(position, width, height),
        })
    }

    /// Identifier within the owning grid
    pub const fn id(&self) -> CellId {
        self.id
    }

    /// Extent along the X axis
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Extent along the Z axis
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Center of the cell
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// All four corners
    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Corner at minimum X and maximum Z
    pub const fn top_left(&self) -> Vec3 {
        self.bounds.top_left
    }

    /// Corner at maximum X and maximum Z
    pub const fn top_right(&self) -> Vec3 {
        self.bounds.top_right
    }

    /// Corner at minimum X and minimum Z
    pub const fn bottom_left(&self) -> Vec3 {
        self.bounds.bottom_left
    }

    /// Corner at maximum X and minimum Z
    pub const fn bottom_right(&self) -> Vec3 {
        self.bounds.bottom_right
    }

    /// Move the center and recompute the corners
    pub const fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update_bounds();
    }

    /// Shift the cell by `delta`
    pub fn translate(&mut self, delta: Vec3) {
        self.set_position(self.position + delta);
    }

    const fn update_bounds(&mut self) {
        self.bounds = Bounds::from_center(self.position, self.width, self.height);
    }
}

// Rejects zero, negatives, NaN and infinities
fn validate_extent(dimension: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidDimension { dimension, value })
    }
}
