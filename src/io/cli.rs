//! Command-line interface for editing a grid collection stored as a JSON snapshot

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::geometry::Vec3;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_COLUMNS, DEFAULT_PIXELS_PER_UNIT, DEFAULT_ROWS,
    DEFAULT_SNAPSHOT_FILE,
};
use crate::io::error::{GridError, Result};
use crate::io::image::{PreviewSettings, export_preview_png};
use crate::io::snapshot::{load_snapshot, save_snapshot};
use crate::model::{DisplayFlags, Grid, GridCollection, GridId};

#[derive(Parser, Debug)]
#[command(name = "gridwright")]
#[command(
    author,
    version,
    about = "Place and edit rectangular cell grids stored in a JSON snapshot"
)]
/// Command-line arguments for the grid authoring tool
pub struct Cli {
    /// Snapshot file to read and update (created when missing)
    #[arg(short, long, global = true, default_value = DEFAULT_SNAPSHOT_FILE)]
    pub file: PathBuf,

    /// Log model changes at debug level (`RUST_LOG` takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Action to perform on the collection
    #[command(subcommand)]
    pub command: GridCommand,
}

/// Actions available on a grid collection
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum GridCommand {
    /// Add a grid and print its id
    Add {
        /// Number of cells per row
        #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
        columns: usize,

        /// Number of rows
        #[arg(short, long, default_value_t = DEFAULT_ROWS)]
        rows: usize,

        /// Edge length of every cell
        #[arg(short = 's', long, default_value_t = DEFAULT_CELL_SIZE)]
        cell_size: f32,

        /// Center of the grid as `x,y,z`
        #[arg(
            short,
            long,
            default_value = "0,0,0",
            value_parser = parse_position,
            allow_hyphen_values = true
        )]
        position: Vec3,
    },

    /// Remove grids by id (missing ids are ignored)
    Remove {
        /// Ids of the grids to remove
        #[arg(required = true)]
        ids: Vec<GridId>,
    },

    /// Remove every grid without resetting the id counter
    Clear,

    /// Move a grid and all of its cells
    Move {
        /// Id of the grid to move
        id: GridId,

        /// New center of the grid as `x,y,z`
        #[arg(short, long, value_parser = parse_position, allow_hyphen_values = true)]
        position: Vec3,
    },

    /// Change which parts of a grid are drawn
    Flags {
        /// Id of the grid to update
        id: GridId,

        /// Draw the grid at all
        #[arg(long, value_parser = BoolishValueParser::new())]
        grid: Option<bool>,

        /// Draw the grid outline
        #[arg(long, value_parser = BoolishValueParser::new())]
        outline: Option<bool>,

        /// Draw every cell outline
        #[arg(long, value_parser = BoolishValueParser::new())]
        cells: Option<bool>,

        /// Draw every cell center
        #[arg(long, value_parser = BoolishValueParser::new())]
        centers: Option<bool>,
    },

    /// List grids in id order
    List,

    /// Write a top-down PNG preview of the visible grids
    Render {
        /// Output image path
        #[arg(short, long, default_value = "preview.png")]
        output: PathBuf,

        /// Preview scale in pixels per world unit
        #[arg(long, default_value_t = DEFAULT_PIXELS_PER_UNIT)]
        pixels_per_unit: f32,
    },
}

/// Result of running one command against a collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Human-readable report, one entry per line
    pub lines: Vec<String>,
    /// Whether the collection changed and should be saved
    pub modified: bool,
}

impl CommandOutput {
    fn changed(line: String) -> Self {
        Self {
            lines: vec![line],
            modified: true,
        }
    }

    const fn report(lines: Vec<String>) -> Self {
        Self {
            lines,
            modified: false,
        }
    }
}

/// Parse a position argument written as `x,y,z`
///
/// # Errors
///
/// Returns the parse failure as a message for clap to display
pub fn parse_position(value: &str) -> std::result::Result<Vec3, String> {
    value.parse::<Vec3>().map_err(|e| e.to_string())
}

/// Apply a command to an in-memory collection
///
/// # Errors
///
/// Returns an error if:
/// - A new grid's layout is invalid
/// - The targeted grid does not exist (`move`, `flags`)
/// - The preview cannot be rendered or written (`render`)
pub fn execute(collection: &mut GridCollection, command: &GridCommand) -> Result<CommandOutput> {
    match command {
        GridCommand::Add {
            columns,
            rows,
            cell_size,
            position,
        } => {
            let grid = collection.add_grid(*columns, *rows, *cell_size, *position)?;
            Ok(CommandOutput::changed(format!("Added grid {}", grid.id())))
        }
        GridCommand::Remove { ids } => {
            let removed = collection.remove_grids(ids.iter().copied());
            Ok(CommandOutput {
                lines: vec![format!("Removed {removed} of {} grid(s)", ids.len())],
                modified: removed > 0,
            })
        }
        GridCommand::Clear => {
            let removed = collection.clear_all();
            Ok(CommandOutput {
                lines: vec![format!("Removed {removed} grid(s)")],
                modified: removed > 0,
            })
        }
        GridCommand::Move { id, position } => {
            let grid = collection.move_grid(*id, *position)?;
            Ok(CommandOutput::changed(format!(
                "Moved grid {} to {}",
                grid.id(),
                grid.position()
            )))
        }
        GridCommand::Flags {
            id,
            grid,
            outline,
            cells,
            centers,
        } => {
            let target = collection
                .grid_mut(*id)
                .ok_or(GridError::GridNotFound { id: *id })?;
            let display = target.display_mut();
            apply_flag(&mut display.show_grid, *grid);
            apply_flag(&mut display.show_outline, *outline);
            apply_flag(&mut display.show_cell_outlines, *cells);
            apply_flag(&mut display.show_cell_centers, *centers);
            Ok(CommandOutput::changed(describe_grid(target)))
        }
        GridCommand::List => {
            let lines = if collection.is_empty() {
                vec![format!("No grids (next id {})", collection.next_id())]
            } else {
                collection.grids().map(describe_grid).collect()
            };
            Ok(CommandOutput::report(lines))
        }
        GridCommand::Render {
            output,
            pixels_per_unit,
        } => {
            let settings = PreviewSettings {
                pixels_per_unit: *pixels_per_unit,
                ..PreviewSettings::default()
            };
            export_preview_png(collection, output, &settings)?;
            Ok(CommandOutput::report(vec![format!(
                "Wrote preview to {}",
                output.display()
            )]))
        }
    }
}

fn apply_flag(flag: &mut bool, value: Option<bool>) {
    if let Some(value) = value {
        *flag = value;
    }
}

/// One-line summary of a grid for listings
pub fn describe_grid(grid: &Grid) -> String {
    format!(
        "{}: {}x{} cells of {} at {} [{}]",
        grid.id(),
        grid.columns(),
        grid.rows(),
        grid.cell_size(),
        grid.position(),
        describe_flags(grid.display())
    )
}

fn describe_flags(display: &DisplayFlags) -> String {
    let state = |on: bool| if on { "on" } else { "off" };
    format!(
        "grid:{} outline:{} cells:{} centers:{}",
        state(display.show_grid),
        state(display.show_outline),
        state(display.show_cell_outlines),
        state(display.show_cell_centers)
    )
}

/// Runs one command against the snapshot file named on the command line
pub struct SessionProcessor {
    cli: Cli,
}

impl SessionProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the snapshot, apply the command and save if anything changed
    ///
    /// A missing snapshot file starts an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be loaded or saved, or the
    /// command itself fails
    pub fn process(&self) -> Result<Vec<String>> {
        let path = &self.cli.file;
        let mut collection = if path.exists() {
            load_snapshot(path)?
        } else {
            info!(path = %path.display(), "snapshot not found, starting empty collection");
            GridCollection::new()
        };

        let output = execute(&mut collection, &self.cli.command)?;

        if output.modified {
            save_snapshot(&collection, path)?;
        }

        Ok(output.lines)
    }
}
