//! Builder for creating Detection objects from various input formats.

use crate::track::{BBox, Detection};

/// Builder for creating [`Detection`] objects from various input formats.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    class_id: u32,
    score: f32,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.x1 = cx - w / 2.0;
        self.y1 = cy - h / 2.0;
        self.x2 = cx + w / 2.0;
        self.y2 = cy + h / 2.0;
        self
    }

    /// Set bounding box in TLWH format (top-left x, top-left y, width, height).
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.x1 = x;
        self.y1 = y;
        self.x2 = x + w;
        self.y2 = y + h;
        self
    }

    /// Set the model class id.
    pub fn class_id(mut self, class_id: u32) -> Self {
        self.class_id = class_id;
        self
    }

    /// Set the confidence score.
    pub fn score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Build the final [`Detection`].
    pub fn build(self) -> Detection {
        Detection::new(
            BBox::new(self.x1, self.y1, self.x2, self.y2),
            self.class_id,
            self.score,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_builder() {
        let det = DetectionBuilder::new()
            .tlbr(10.0, 20.0, 50.0, 80.0)
            .class_id(1)
            .score(0.95)
            .build();

        assert_eq!(det.bbox, BBox::new(10.0, 20.0, 50.0, 80.0));
        assert_eq!(det.class_id, 1);
        assert_eq!(det.score, 0.95);
    }

    #[test]
    fn test_xywh_conversion() {
        let det = DetectionBuilder::new().xywh(30.0, 50.0, 20.0, 40.0).build();
        assert_eq!(det.bbox, BBox::new(20.0, 30.0, 40.0, 70.0));
    }

    #[test]
    fn test_tlwh_conversion() {
        let det = DetectionBuilder::new().tlwh(10.0, 20.0, 30.0, 40.0).build();
        assert_eq!(det.bbox, BBox::new(10.0, 20.0, 40.0, 60.0));
    }
}
