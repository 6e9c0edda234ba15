//! Flat, serializable form of a grid collection
//!
//! Only layout parameters, positions and display flags are stored. Cells are
//! fully determined by their grid's layout and are regenerated on load.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::geometry::Vec3;
use crate::io::configuration::SNAPSHOT_VERSION;
use crate::io::error::{GridError, Result};
use crate::model::{DisplayFlags, Grid, GridCollection, GridId};

/// Everything needed to rebuild one grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// Grid id
    pub id: GridId,
    /// Number of cells per row
    pub columns: usize,
    /// Number of rows
    pub rows: usize,
    /// Edge length of every cell
    pub cell_size: f32,
    /// Center of the grid
    pub position: Vec3,
    /// Presentation flags
    #[serde(default)]
    pub display: DisplayFlags,
}

impl GridSnapshot {
    /// Rebuild the grid, regenerating its cells
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidLayout`] if the stored layout is invalid
    pub fn to_grid(&self) -> Result<Grid> {
        let mut grid = Grid::new(
            self.id,
            self.columns,
            self.rows,
            self.cell_size,
            self.position,
        )?;
        grid.set_display(self.display);
        Ok(grid)
    }
}

impl From<&Grid> for GridSnapshot {
    fn from(grid: &Grid) -> Self {
        Self {
            id: grid.id(),
            columns: grid.columns(),
            rows: grid.rows(),
            cell_size: grid.cell_size(),
            position: grid.position(),
            display: *grid.display(),
        }
    }
}

/// Everything needed to rebuild a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSnapshot {
    /// Format version
    pub version: u32,
    /// Id the next added grid will receive
    pub next_id: GridId,
    /// Grids in ascending id order
    pub grids: Vec<GridSnapshot>,
}

impl GridCollection {
    /// Flatten the collection, listing grids in ascending id order
    pub fn to_snapshot(&self) -> CollectionSnapshot {
        CollectionSnapshot {
            version: SNAPSHOT_VERSION,
            next_id: self.next_id(),
            grids: self.grids().map(GridSnapshot::from).collect(),
        }
    }

    /// Rebuild a collection from a snapshot
    ///
    /// A `next_id` that does not exceed every stored id is raised to one past
    /// the largest id so ids are never reused.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The snapshot version is not supported
    /// - Two grids share an id
    /// - A grid has an invalid layout
    /// - The largest stored id leaves no room for further ids
    pub fn from_snapshot(snapshot: &CollectionSnapshot) -> Result<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(GridError::InvalidSnapshot {
                reason: format!(
                    "unsupported version {} (expected {SNAPSHOT_VERSION})",
                    snapshot.version
                ),
            });
        }

        let mut grids = BTreeMap::new();
        for entry in &snapshot.grids {
            if grids.contains_key(&entry.id) {
                return Err(GridError::DuplicateGridId { id: entry.id });
            }
            grids.insert(entry.id, entry.to_grid()?);
        }

        let mut next_id = snapshot.next_id;
        if let Some(&max_id) = grids.keys().next_back() {
            if next_id <= max_id {
                let raised = max_id.checked_add(1).ok_or_else(|| GridError::InvalidSnapshot {
                    reason: format!("grid id {max_id} leaves no ids to assign"),
                })?;
                warn!(
                    stored = next_id,
                    raised, "snapshot id counter behind stored grids, raising it"
                );
                next_id = raised;
            }
        }

        debug!(grids = grids.len(), next_id, "restored collection from snapshot");
        Ok(Self::from_parts(next_id, grids))
    }
}

/// Write a collection to `path` as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The snapshot cannot be encoded
/// - The file cannot be written
pub fn save_snapshot(collection: &GridCollection, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let json = serde_json::to_string_pretty(&collection.to_snapshot())?;
    fs::write(path, json).map_err(|e| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "write snapshot",
        source: e,
    })?;

    debug!(path = %path.display(), grids = collection.len(), "saved snapshot");
    Ok(())
}

/// Read a collection previously written by [`save_snapshot`]
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid snapshot
/// document, or describes an invalid collection
pub fn load_snapshot(path: &Path) -> Result<GridCollection> {
    let content = fs::read_to_string(path).map_err(|e| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "read snapshot",
        source: e,
    })?;
    let snapshot: CollectionSnapshot = serde_json::from_str(&content)?;
    GridCollection::from_snapshot(&snapshot)
}
