//! Geometry primitives shared by the slider engine and its host.
//!
//! Coordinates are page coordinates in logical pixels. The host measures the
//! track and reports a [`TrackRect`]; the engine only ever looks at one axis
//! of it at a time through [`TrackGeometry`].

use serde::{Deserialize, Serialize};

/// Slider orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Track runs left to right.
    #[default]
    Horizontal,
    /// Track runs top to bottom.
    Vertical,
}

impl Orientation {
    /// Orientation for a `vertical` flag.
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Check if this is the vertical orientation.
    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

/// A point in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The coordinate along the given axis.
    pub fn along(self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.x,
            Orientation::Vertical => self.y,
        }
    }
}

/// Bounding box of the slider track as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackRect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width of the box.
    pub width: f64,
    /// Height of the box.
    pub height: f64,
}

impl TrackRect {
    /// Create a new track rectangle.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Offset and size along the given axis (`left`/`width` or `top`/`height`).
    pub fn along(&self, orientation: Orientation) -> TrackGeometry {
        match orientation {
            Orientation::Horizontal => TrackGeometry::new(self.left, self.width),
            Orientation::Vertical => TrackGeometry::new(self.top, self.height),
        }
    }

    /// Point at the given fraction of the box along each axis.
    ///
    /// Handy for hosts and tests that need to synthesize pointer positions.
    pub fn point_at(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.left + self.width * fx, self.top + self.height * fy)
    }
}

/// Offset and length of the track along the active axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    /// Page coordinate of the track start.
    pub offset: f64,
    /// Track length in pixels.
    pub size: f64,
}

impl TrackGeometry {
    /// Create a new geometry.
    pub const fn new(offset: f64, size: f64) -> Self {
        Self { offset, size }
    }

    /// Whether the track has been laid out with a usable length.
    pub fn is_measurable(&self) -> bool {
        self.size.is_finite() && self.size > 0.0 && self.offset.is_finite()
    }

    /// Fraction of the track covered by `coordinate`, clamped to `[0, 1]`.
    ///
    /// Returns `None` when the track is not measurable.
    pub fn fraction_of(&self, coordinate: f64) -> Option<f64> {
        if !self.is_measurable() {
            return None;
        }
        Some(((coordinate - self.offset) / self.size).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_rect_along_axis() {
        let rect = TrackRect::new(10.0, 20.0, 200.0, 40.0);
        assert_eq!(rect.along(Orientation::Horizontal), TrackGeometry::new(10.0, 200.0));
        assert_eq!(rect.along(Orientation::Vertical), TrackGeometry::new(20.0, 40.0));
    }

    #[test]
    fn test_fraction_of_clamps() {
        let geometry = TrackGeometry::new(100.0, 50.0);
        assert_eq!(geometry.fraction_of(125.0), Some(0.5));
        assert_eq!(geometry.fraction_of(0.0), Some(0.0));
        assert_eq!(geometry.fraction_of(1000.0), Some(1.0));
    }

    #[test]
    fn test_unmeasured_track_has_no_fraction() {
        assert_eq!(TrackGeometry::new(0.0, 0.0).fraction_of(5.0), None);
        assert_eq!(TrackGeometry::new(0.0, f64::NAN).fraction_of(5.0), None);
    }

    #[test]
    fn test_point_along() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(p.along(Orientation::Horizontal), 3.0);
        assert_eq!(p.along(Orientation::Vertical), 7.0);
        assert_eq!(Orientation::from_vertical(true), Orientation::Vertical);
    }
}
