//! Id-keyed ownership of grids
//!
//! The collection is the aggregate root of the model. It hands out grid ids
//! from a counter that only ever increases, so an id is never reused even
//! after its grid has been removed. Grids are kept in id order.

use std::collections::BTreeMap;

use tracing::debug;

use crate::geometry::Vec3;
use crate::io::error::{GridError, Result};
use crate::model::grid::{Grid, GridId};

/// Owner of every grid in an authoring session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridCollection {
    next_id: GridId,
    grids: BTreeMap<GridId, Grid>,
}

impl GridCollection {
    /// Create an empty collection whose first grid will receive id 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Reassemble a collection from already validated parts
    pub(crate) const fn from_parts(next_id: GridId, grids: BTreeMap<GridId, Grid>) -> Self {
        Self { next_id, grids }
    }

    /// Build a grid with the next free id and take ownership of it
    ///
    /// A rejected layout leaves the collection untouched: nothing is inserted
    /// and the id counter does not advance.
    ///
    /// # Errors
    ///
    /// Returns the construction error from [`Grid::new`] if the layout or
    /// position is invalid, or [`GridError::IdSpaceExhausted`] once every id
    /// has been issued
    pub fn add_grid(
        &mut self,
        columns: usize,
        rows: usize,
        cell_size: f32,
        position: Vec3,
    ) -> Result<&mut Grid> {
        let id = self.next_id;
        let following = id.checked_add(1).ok_or(GridError::IdSpaceExhausted)?;
        let grid = Grid::new(id, columns, rows, cell_size, position)?;

        self.next_id = following;
        debug!(id, columns, rows, cell_size, %position, "added grid");

        Ok(self.grids.entry(id).or_insert(grid))
    }

    /// Remove a grid by id, returning it if it was present
    ///
    /// Removing an id that does not exist is a no-op.
    pub fn remove_grid(&mut self, id: GridId) -> Option<Grid> {
        let removed = self.grids.remove(&id);
        if removed.is_some() {
            debug!(id, "removed grid");
        }
        removed
    }

    /// Remove the stored grid that shares `grid`'s id
    pub fn remove_matching(&mut self, grid: &Grid) -> Option<Grid> {
        self.remove_grid(grid.id())
    }

    /// Remove each id independently, returning how many grids were removed
    ///
    /// Missing ids are skipped without affecting the rest of the batch.
    pub fn remove_grids<I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = GridId>,
    {
        ids.into_iter()
            .filter(|&id| self.remove_grid(id).is_some())
            .count()
    }

    /// Remove every grid, returning how many were removed
    ///
    /// The id counter is left alone so later grids keep receiving fresh ids.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.grids.len();
        self.grids.clear();
        debug!(removed, next_id = self.next_id, "cleared all grids");
        removed
    }

    /// Move a grid's center, carrying its cells along
    ///
    /// # Errors
    ///
    /// Returns [`GridError::GridNotFound`] if no grid has the given id, or
    /// [`GridError::InvalidPosition`] if the new position is not finite, in
    /// which case the grid stays where it was
    pub fn move_grid(&mut self, id: GridId, position: Vec3) -> Result<&Grid> {
        let grid = self
            .grids
            .get_mut(&id)
            .ok_or(GridError::GridNotFound { id })?;
        grid.set_position(position)?;
        debug!(id, %position, "moved grid");
        Ok(grid)
    }

    /// Look up a grid by id
    pub fn grid(&self, id: GridId) -> Option<&Grid> {
        self.grids.get(&id)
    }

    /// Look up a grid by id for editing
    pub fn grid_mut(&mut self, id: GridId) -> Option<&mut Grid> {
        self.grids.get_mut(&id)
    }

    /// Check whether a grid with the given id exists
    pub fn contains(&self, id: GridId) -> bool {
        self.grids.contains_key(&id)
    }

    /// Iterate over grids in ascending id order
    pub fn grids(&self) -> impl Iterator<Item = &Grid> + '_ {
        self.grids.values()
    }

    /// Iterate mutably over grids in ascending id order
    pub fn grids_mut(&mut self) -> impl Iterator<Item = &mut Grid> + '_ {
        self.grids.values_mut()
    }

    /// Ids of all grids in ascending order
    pub fn ids(&self) -> Vec<GridId> {
        self.grids.keys().copied().collect()
    }

    /// Number of grids
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// Whether the collection holds no grids
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// The id the next successful [`add_grid`](Self::add_grid) will assign
    pub const fn next_id(&self) -> GridId {
        self.next_id
    }
}
