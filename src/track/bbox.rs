use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in TLBR pixel coordinates.
///
/// Coordinates are floating-point pixels with `x1 <= x2` and `y1 <= y2`.
/// Detector backends that emit other layouts can convert through
/// [`BBox::from_tlwh`] or the detection builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    /// Top-left x coordinate
    pub x1: f32,
    /// Top-left y coordinate
    pub y1: f32,
    /// Bottom-right x coordinate
    pub x2: f32,
    /// Bottom-right y coordinate
    pub y2: f32,
}

impl BBox {
    /// Create a new BBox from TLBR coordinates.
    #[inline]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a BBox from TLWH format (top-left x, top-left y, width, height).
    #[inline]
    pub fn from_tlwh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// Create a BBox from a raw coordinate slice in TLBR order.
    ///
    /// Returns `None` for slices with fewer than four coordinates, so a
    /// truncated box from an upstream backend never becomes a valid
    /// observation. Extra trailing values are ignored.
    pub fn from_slice(coords: &[f32]) -> Option<Self> {
        match coords {
            [x1, y1, x2, y2, ..] => Some(Self::new(*x1, *y1, *x2, *y2)),
            _ => None,
        }
    }

    /// Width of the bounding box.
    #[inline]
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    /// Height of the bounding box.
    #[inline]
    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    /// Center point of the bounding box.
    #[inline]
    pub fn center(&self) -> Point2<f32> {
        Point2::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Top-left corner of the bounding box.
    #[inline]
    pub fn top_left(&self) -> Point2<f32> {
        Point2::new(self.x1, self.y1)
    }

    /// Euclidean distance between the top-left corners of two boxes.
    ///
    /// This is the displacement metric used by outlier rejection and the
    /// draw gate; box size is deliberately ignored.
    #[inline]
    pub fn top_left_distance(&self, other: &BBox) -> f32 {
        nalgebra::distance(&self.top_left(), &other.top_left())
    }
}
