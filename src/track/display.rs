//! Display-side gating of ball observations.

use nalgebra::Point2;

use crate::track::bbox::BBox;
use crate::track::observation::BallObservation;

/// Configuration for [`DrawFilter`].
#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// Minimum confidence required to draw the ball.
    pub conf_threshold: f32,
    /// Maximum pixels the ball may move between drawn frames.
    pub max_jump: f32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            conf_threshold: 0.5,
            max_jump: 100.0,
        }
    }
}

/// Per-frame gate deciding whether a ball observation gets drawn.
///
/// This is the renderer's own smoothing rule, independent of outlier
/// rejection and interpolation: it can be fed the raw track just as well
/// as the refined one. Low-confidence or absent frames reset the motion
/// reference; a detection that jumped further than `max_jump` from the
/// last drawn position is skipped without resetting it.
#[derive(Debug, Default)]
pub struct DrawFilter {
    config: DrawConfig,
    last_pos: Option<Point2<f32>>,
}

impl DrawFilter {
    pub fn new(config: DrawConfig) -> Self {
        Self {
            config,
            last_pos: None,
        }
    }

    /// Decide whether this frame's observation should be drawn.
    ///
    /// Returns the box to draw, or `None` to leave the frame clean.
    /// Call once per frame in order; the filter is stateful.
    pub fn admit(&mut self, observation: &BallObservation, confidence: f32) -> Option<BBox> {
        let bbox = match observation.bbox() {
            Some(bbox) if confidence >= self.config.conf_threshold => bbox,
            _ => {
                self.last_pos = None;
                return None;
            }
        };

        let pos = bbox.top_left();
        if let Some(last) = self.last_pos {
            if nalgebra::distance(&pos, &last) > self.config.max_jump {
                return None;
            }
        }

        self.last_pos = Some(pos);
        Some(*bbox)
    }

    /// Forget the last drawn position, e.g. on a scene cut.
    pub fn reset(&mut self) {
        self.last_pos = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(x1: f32, y1: f32) -> BallObservation {
        BallObservation::Present(BBox::new(x1, y1, x1 + 10.0, y1 + 10.0))
    }

    #[test]
    fn test_low_confidence_skipped() {
        let mut gate = DrawFilter::default();
        assert!(gate.admit(&present(0.0, 0.0), 0.4).is_none());
        assert!(gate.admit(&present(0.0, 0.0), 0.5).is_some());
    }

    #[test]
    fn test_absent_skipped() {
        let mut gate = DrawFilter::default();
        assert!(gate.admit(&BallObservation::Absent, 0.9).is_none());
    }

    #[test]
    fn test_jump_skipped_without_reset() {
        let mut gate = DrawFilter::default();
        assert!(gate.admit(&present(0.0, 0.0), 0.9).is_some());

        // 500px jump is skipped, but the reference stays at (0, 0)...
        assert!(gate.admit(&present(500.0, 500.0), 0.9).is_none());

        // ...so a detection near the original position draws again.
        assert!(gate.admit(&present(50.0, 0.0), 0.9).is_some());
    }

    #[test]
    fn test_low_confidence_resets_reference() {
        let mut gate = DrawFilter::default();
        assert!(gate.admit(&present(0.0, 0.0), 0.9).is_some());
        assert!(gate.admit(&present(10.0, 0.0), 0.1).is_none());

        // The reference was cleared, so even a far position draws.
        assert!(gate.admit(&present(800.0, 800.0), 0.9).is_some());
    }

    #[test]
    fn test_small_motion_drawn() {
        let mut gate = DrawFilter::default();
        assert!(gate.admit(&present(0.0, 0.0), 0.9).is_some());
        assert!(gate.admit(&present(60.0, 80.0), 0.9).is_some());
    }
}
