//! Per-grid presentation flags
//!
//! The geometry never reads these; they only tell renderers which parts of a
//! grid to draw.

use serde::{Deserialize, Serialize};

/// Which parts of a grid a renderer should draw
// Each flag toggles an independent overlay in the editor's grid list
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayFlags {
    /// Draw the grid at all
    pub show_grid: bool,
    /// Draw the outer outline of the grid
    pub show_outline: bool,
    /// Draw the outline of every cell
    pub show_cell_outlines: bool,
    /// Draw a marker at every cell center
    pub show_cell_centers: bool,
}

impl DisplayFlags {
    /// Every overlay enabled
    pub const fn all_visible() -> Self {
        Self {
            show_grid: true,
            show_outline: true,
            show_cell_outlines: true,
            show_cell_centers: true,
        }
    }

    /// Whether anything would be drawn for the grid
    pub const fn draws_anything(&self) -> bool {
        self.show_grid
            && (self.show_outline || self.show_cell_outlines || self.show_cell_centers)
    }
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self::all_visible()
    }
}
