//! Rectangular grid of uniformly sized cells
//!
//! A grid's layout (columns, rows, cell size) is fixed when it is built. Cells
//! are generated once, row by row from the top-left corner, and stored in a
//! row-major array so that cell id `r * columns + c` lives at index `(r, c)`.
//! Moving the grid translates every cell by the same delta.

use ndarray::Array2;
use tracing::trace;

use crate::geometry::{Bounds, Vec3};
use crate::io::configuration::MAX_CELLS;
use crate::io::error::{GridError, Result, computation_error};
use crate::model::cell::{Cell, CellId};
use crate::model::display::DisplayFlags;

/// Identifier of a grid, unique within its collection
pub type GridId = u32;

/// Row-major block of cells centered on a point in world space
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    id: GridId,
    columns: usize,
    rows: usize,
    cell_size: f32,
    width: f32,
    height: f32,
    position: Vec3,
    bounds: Bounds,
    cells: Array2<Cell>,
    display: DisplayFlags,
}

impl Grid {
    /// Build a grid and lay out its cells
    ///
    /// The grid is centered on `position`; its width is `columns * cell_size`
    /// along X and its height `rows * cell_size` along Z.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `columns` or `rows` is zero, or `cell_size` is not a positive finite
    ///   number, or the resulting extent overflows ([`GridError::InvalidLayout`])
    /// - `columns * rows` exceeds [`MAX_CELLS`] ([`GridError::LayoutTooLarge`])
    /// - `position` or any corner of the grid is not finite
    ///   ([`GridError::InvalidPosition`])
    pub fn new(
        id: GridId,
        columns: usize,
        rows: usize,
        cell_size: f32,
        position: Vec3,
    ) -> Result<Self> {
        if columns == 0 || rows == 0 || !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidLayout {
                columns,
                rows,
                cell_size,
            });
        }

        let cell_count = columns
            .checked_mul(rows)
            .filter(|&count| count <= MAX_CELLS)
            .ok_or(GridError::LayoutTooLarge {
                columns,
                rows,
                limit: MAX_CELLS,
            })?;

        let width = columns as f32 * cell_size;
        let height = rows as f32 * cell_size;
        if !width.is_finite() || !height.is_finite() {
            return Err(GridError::InvalidLayout {
                columns,
                rows,
                cell_size,
            });
        }

        let bounds = finite_bounds(position, width, height)?;
        let cells = generate_cells(columns, rows, cell_count, cell_size, position, &bounds)?;

        trace!(id, columns, rows, cell_size, "generated grid cells");

        Ok(Self {
            id,
            columns,
            rows,
            cell_size,
            width,
            height,
            position,
            bounds,
            cells,
            display: DisplayFlags::default(),
        })
    }

    /// Identifier within the owning collection
    pub const fn id(&self) -> GridId {
        self.id
    }

    /// Number of cells per row
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Edge length shared by every cell
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Extent along the X axis
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Extent along the Z axis
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Center of the grid
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

    /// Presentation flags
    pub const fn display(&self) -> &DisplayFlags {
        &self.display
    }

    /// Mutable presentation flags
    pub const fn display_mut(&mut self) -> &mut DisplayFlags {
        &mut self.display
    }

    /// Replace the presentation flags
    pub const fn set_display(&mut self, display: DisplayFlags) {
        self.display = display;
    }

    /// Total number of cells, always `columns * rows`
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Look up a cell by id
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get((id / self.columns, id % self.columns))
    }

    /// Look up a cell by zero-based row and column
    pub fn cell_at(&self, row: usize, column: usize) -> Option<&Cell> {
        self.cells.get((row, column))
    }

    /// Iterate over cells in id order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Move the grid center, carrying every cell along
    ///
    /// Each cell is shifted by `position - self.position()`, so spacing and
    /// ordering are preserved exactly. Runs in `O(columns * rows)`. A
    /// rejected position leaves the grid and its cells untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if `position`, a resulting
    /// corner, or the shift applied to the cells is not finite
    pub fn set_position(&mut self, position: Vec3) -> Result<()> {
        let bounds = finite_bounds(position, self.width, self.height)?;
        let delta = position - self.position;
        if !delta.is_finite() {
            return Err(GridError::InvalidPosition { position });
        }

        for cell in &mut self.cells {
            cell.translate(delta);
        }

        self.position = position;
        self.bounds = bounds;
        Ok(())
    }

    /// Shift the grid by `delta`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidPosition`] if the shifted grid would not be
    /// finite
    pub fn translate(&mut self, delta: Vec3) -> Result<()> {
        self.set_position(self.position + delta)
    }
}

fn finite_bounds(position: Vec3, width: f32, height: f32) -> Result<Bounds> {
    let bounds = Bounds::from_center(position, width, height);
    if position.is_finite() && bounds.top_left.is_finite() && bounds.bottom_right.is_finite() {
        Ok(bounds)
    } else {
        Err(GridError::InvalidPosition { position })
    }
}

/// Tile the grid area with cells, left to right and top to bottom
///
/// Each row starts `row * cell_size` below the top-left corner. Within a row
/// the next cell is anchored on the previous cell's top-right corner so that
/// neighbouring edges coincide.
fn generate_cells(
    columns: usize,
    rows: usize,
    cell_count: usize,
    cell_size: f32,
    position: Vec3,
    bounds: &Bounds,
) -> Result<Array2<Cell>> {
    let half_cell = cell_size / 2.0;
    let origin = bounds.top_left;
    let mut cells = Vec::with_capacity(cell_count);

    for row in 0..rows {
        let mut anchor = Vec3::new(origin.x, origin.y, cell_size.mul_add(-(row as f32), origin.z));

        for _ in 0..columns {
            let center = Vec3::new(anchor.x + half_cell, position.y, anchor.z - half_cell);
            let cell = Cell::new(cells.len(), center, cell_size, cell_size)?;
            anchor = cell.top_right();
            cells.push(cell);
        }
    }

    Array2::from_shape_vec((rows, columns), cells)
        .map_err(|e| computation_error("cell layout", &e))
}
