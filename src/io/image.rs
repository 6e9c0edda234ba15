//! Top-down PNG preview of a grid collection
//!
//! Grids are projected onto the XZ plane with X to the right and Z up. The
//! image is fitted to the union of all visible grids plus a margin, and each
//! grid's display flags decide which overlays are drawn.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::geometry::{Bounds, Vec3};
use crate::io::configuration::{
    BACKGROUND_COLOR, CELL_CENTER_COLOR, CELL_OUTLINE_COLOR, CENTER_MARKER_RATIO,
    CENTER_MARKER_SEGMENTS, DEFAULT_PIXELS_PER_UNIT, GRID_OUTLINE_COLOR, MAX_PREVIEW_DIMENSION,
    PREVIEW_MARGIN_PX,
};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::model::{Cell, Grid, GridCollection};

/// Scale, margin and palette of a preview
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSettings {
    /// Pixels per world unit
    pub pixels_per_unit: f32,
    /// Blank border in pixels
    pub margin: u32,
    /// Background fill
    pub background: [u8; 4],
    /// Grid outline color
    pub grid_outline: [u8; 4],
    /// Cell outline color
    pub cell_outline: [u8; 4],
    /// Cell center marker color
    pub cell_center: [u8; 4],
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            margin: PREVIEW_MARGIN_PX,
            background: BACKGROUND_COLOR,
            grid_outline: GRID_OUTLINE_COLOR,
            cell_outline: CELL_OUTLINE_COLOR,
            cell_center: CELL_CENTER_COLOR,
        }
    }
}

// Maps world XZ coordinates onto pixel coordinates
struct Projection {
    left: f32,
    top: f32,
    scale: f32,
    margin: f32,
}

impl Projection {
    fn project(&self, point: Vec3) -> (i64, i64) {
        let px = (point.x - self.left).mul_add(self.scale, self.margin);
        let py = (self.top - point.z).mul_add(self.scale, self.margin);
        (px.round() as i64, py.round() as i64)
    }
}

/// Render every visible grid of the collection
///
/// # Errors
///
/// Returns an error if:
/// - `pixels_per_unit` is not a positive finite number
/// - No grid in the collection is visible
/// - The fitted image would exceed the maximum preview dimension
pub fn render_preview(collection: &GridCollection, settings: &PreviewSettings) -> Result<RgbaImage> {
    if !settings.pixels_per_unit.is_finite() || settings.pixels_per_unit <= 0.0 {
        return Err(invalid_parameter(
            "pixels_per_unit",
            &settings.pixels_per_unit,
            &"must be a positive finite number",
        ));
    }

    let visible: Vec<&Grid> = collection
        .grids()
        .filter(|grid| grid.display().draws_anything())
        .collect();

    let extent = visible
        .iter()
        .map(|grid| *grid.bounds())
        .reduce(|acc, bounds| acc.union(&bounds))
        .ok_or_else(|| {
            invalid_parameter(
                "collection",
                &format!("{} grids", collection.len()),
                &"no visible grids to render",
            )
        })?;

    let (width, height) = image_size(&extent, settings)?;
    let mut img = RgbaImage::from_pixel(width, height, Rgba(settings.background));

    let projection = Projection {
        left: extent.left(),
        top: extent.top(),
        scale: settings.pixels_per_unit,
        margin: settings.margin as f32,
    };

    for grid in visible {
        draw_grid(&mut img, &projection, grid, settings);
    }

    Ok(img)
}

/// Render the collection and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_preview`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview_png(
    collection: &GridCollection,
    output_path: &Path,
    settings: &PreviewSettings,
) -> Result<()> {
    let img = render_preview(collection, settings)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GridError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

fn image_size(extent: &Bounds, settings: &PreviewSettings) -> Result<(u32, u32)> {
    let margin = f64::from(settings.margin);
    let scale = f64::from(settings.pixels_per_unit);
    let width = (f64::from(extent.right() - extent.left()) * scale).ceil() + 2.0 * margin + 1.0;
    let height = (f64::from(extent.top() - extent.bottom()) * scale).ceil() + 2.0 * margin + 1.0;
    let limit = f64::from(MAX_PREVIEW_DIMENSION);

    if !width.is_finite() || !height.is_finite() || width > limit || height > limit {
        return Err(invalid_parameter(
            "pixels_per_unit",
            &settings.pixels_per_unit,
            &format!("preview would exceed {MAX_PREVIEW_DIMENSION} pixels"),
        ));
    }

    Ok((width as u32, height as u32))
}

fn draw_grid(img: &mut RgbaImage, projection: &Projection, grid: &Grid, settings: &PreviewSettings) {
    let display = grid.display();

    if display.show_cell_outlines {
        for cell in grid.cells() {
            draw_outline(img, projection, cell.bounds(), settings.cell_outline);
        }
    }

    if display.show_outline {
        draw_outline(img, projection, grid.bounds(), settings.grid_outline);
    }

    if display.show_cell_centers {
        for cell in grid.cells() {
            draw_center_marker(img, projection, cell, settings.cell_center);
        }
    }
}

fn draw_outline(img: &mut RgbaImage, projection: &Projection, bounds: &Bounds, color: [u8; 4]) {
    let corners = bounds.outline();
    for (i, &from) in corners.iter().enumerate() {
        if let Some(&to) = corners.get((i + 1) % corners.len()) {
            draw_line(img, projection.project(from), projection.project(to), color);
        }
    }
}

// Spokes to each corner plus a small circle, as the editor draws centers
fn draw_center_marker(img: &mut RgbaImage, projection: &Projection, cell: &Cell, color: [u8; 4]) {
    let center = cell.position();
    let start = projection.project(center);

    for corner in cell.bounds().outline() {
        draw_line(img, start, projection.project(corner), color);
    }

    let radius = cell.width() * CENTER_MARKER_RATIO;
    let step = std::f32::consts::TAU / CENTER_MARKER_SEGMENTS as f32;
    let point_at = |i: usize| {
        let angle = step * i as f32;
        Vec3::new(
            radius.mul_add(angle.cos(), center.x),
            center.y,
            radius.mul_add(angle.sin(), center.z),
        )
    };

    for i in 0..CENTER_MARKER_SEGMENTS {
        draw_line(
            img,
            projection.project(point_at(i)),
            projection.project(point_at(i + 1)),
            color,
        );
    }
}

// Bresenham line; pixels outside the image are skipped
fn draw_line(img: &mut RgbaImage, from: (i64, i64), to: (i64, i64), color: [u8; 4]) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put_pixel_checked(img, x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += sx;
        }
        if doubled <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn put_pixel_checked(img: &mut RgbaImage, x: i64, y: i64, color: [u8; 4]) {
    let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
        *pixel = Rgba(color);
    }
}
