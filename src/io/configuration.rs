//! Defaults and limits shared by the model, the CLI and the renderer

// Defaults offered when adding a grid
/// Default number of columns for a new grid
pub const DEFAULT_COLUMNS: usize = 4;
/// Default number of rows for a new grid
pub const DEFAULT_ROWS: usize = 4;
/// Default edge length of a cell
pub const DEFAULT_CELL_SIZE: f32 = 1.0;
/// Largest number of cells a single grid may hold
pub const MAX_CELLS: usize = 4_194_304;

// Persistence
/// Snapshot file used when none is given
pub const DEFAULT_SNAPSHOT_FILE: &str = "grids.json";
/// Snapshot format version written by this crate
pub const SNAPSHOT_VERSION: u32 = 1;

// Preview rendering
/// Default preview scale in pixels per world unit
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 32.0;
/// Blank border around the preview in pixels
pub const PREVIEW_MARGIN_PX: u32 = 16;
/// Maximum preview width or height in pixels
pub const MAX_PREVIEW_DIMENSION: u32 = 8192;
/// Radius of a cell center marker relative to the cell width
pub const CENTER_MARKER_RATIO: f32 = 0.1;
/// Number of straight segments approximating a center marker circle
pub const CENTER_MARKER_SEGMENTS: usize = 24;

// Preview colors (RGBA)
/// Preview background
pub const BACKGROUND_COLOR: [u8; 4] = [24, 24, 28, 255];
/// Outer outline of a grid
pub const GRID_OUTLINE_COLOR: [u8; 4] = [240, 240, 240, 255];
/// Outline of each cell
pub const CELL_OUTLINE_COLOR: [u8; 4] = [90, 140, 200, 255];
/// Cell center markers and corner spokes
pub const CELL_CENTER_COLOR: [u8; 4] = [230, 170, 60, 255];

// Logging
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Log filter used with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "gridwright=debug";
