//! Corner bounds of rectangles lying in the horizontal plane
//!
//! Width runs along the X axis and height along the Z axis. "Top" is the
//! edge with the larger Z value, matching how grids are viewed from above.

use crate::geometry::Vec3;

/// The four corners of a rectangle centered on a point in the XZ plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Corner at minimum X and maximum Z
    pub top_left: Vec3,
    /// Corner at maximum X and maximum Z
    pub top_right: Vec3,
    /// Corner at minimum X and minimum Z
    pub bottom_left: Vec3,
    /// Corner at maximum X and minimum Z
    pub bottom_right: Vec3,
}

impl Bounds {
    /// Derive corners from a center point and extents
    ///
    /// All corners share the center's Y coordinate.
    pub const fn from_center(center: Vec3, width: f32, height: f32) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        let left = center.x - half_width;
        let right = center.x + half_width;
        let top = center.z + half_height;
        let bottom = center.z - half_height;

        Self {
            top_left: Vec3::new(left, center.y, top),
            top_right: Vec3::new(right, center.y, top),
            bottom_left: Vec3::new(left, center.y, bottom),
            bottom_right: Vec3::new(right, center.y, bottom),
        }
    }

    /// Smallest X coordinate
    pub const fn left(&self) -> f32 {
        self.top_left.x
    }

    /// Largest X coordinate
    pub const fn right(&self) -> f32 {
        self.top_right.x
    }

    /// Largest Z coordinate
    pub const fn top(&self) -> f32 {
        self.top_left.z
    }

    /// Smallest Z coordinate
    pub const fn bottom(&self) -> f32 {
        self.bottom_left.z
    }

    /// Corners in drawing order: top-left, top-right, bottom-right, bottom-left
    pub const fn outline(&self) -> [Vec3; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Grow to cover another rectangle
    pub fn union(&self, other: &Self) -> Self {
        let left = self.left().min(other.left());
        let right = self.right().max(other.right());
        let top = self.top().max(other.top());
        let bottom = self.bottom().min(other.bottom());
        let y = self.top_left.y;

        Self {
            top_left: Vec3::new(left, y, top),
            top_right: Vec3::new(right, y, top),
            bottom_left: Vec3::new(left, y, bottom),
            bottom_right: Vec3::new(right, y, bottom),
        }
    }
}
