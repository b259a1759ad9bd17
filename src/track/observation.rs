//! Per-frame ball observation and the fixed-length track.

use serde::{Deserialize, Serialize};

use crate::track::bbox::BBox;

/// A single frame's ball detection result.
///
/// Modeled as a sum type so that a half-formed box is unrepresentable:
/// a frame either has a complete bounding box or nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum BallObservation {
    /// No ball detected in this frame.
    #[default]
    Absent,
    /// Ball detected at the given bounding box.
    Present(BBox),
}

impl BallObservation {
    /// Whether this frame has a detection.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// The bounding box, if any.
    #[inline]
    pub fn bbox(&self) -> Option<&BBox> {
        match self {
            Self::Present(bbox) => Some(bbox),
            Self::Absent => None,
        }
    }
}

/// Ordered sequence of ball observations, one per video frame.
///
/// The length is fixed at construction: filtering and interpolation
/// replace observations in place of their frame index but never insert
/// or remove frames. Each stage returns a new track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BallTrack {
    observations: Vec<BallObservation>,
}

impl BallTrack {
    /// Create a track from one observation per frame.
    pub fn new(observations: Vec<BallObservation>) -> Self {
        Self { observations }
    }

    /// Create a track of `len` frames with no detections.
    pub fn all_absent(len: usize) -> Self {
        Self {
            observations: vec![BallObservation::Absent; len],
        }
    }

    /// Number of frames in the track.
    #[inline]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the track covers zero frames.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The observation at `frame`, if the index is in range.
    #[inline]
    pub fn get(&self, frame: usize) -> Option<&BallObservation> {
        self.observations.get(frame)
    }

    /// The bounding box at `frame`, if the frame has a detection.
    #[inline]
    pub fn bbox_at(&self, frame: usize) -> Option<&BBox> {
        self.get(frame).and_then(BallObservation::bbox)
    }

    /// All observations in frame order.
    #[inline]
    pub fn observations(&self) -> &[BallObservation] {
        &self.observations
    }

    /// Iterate over observations in frame order.
    pub fn iter(&self) -> impl Iterator<Item = &BallObservation> {
        self.observations.iter()
    }

    /// Number of frames with a detection.
    pub fn present_count(&self) -> usize {
        self.observations.iter().filter(|o| o.is_present()).count()
    }

    /// Replace the observation at `frame`.
    pub(crate) fn set(&mut self, frame: usize, observation: BallObservation) {
        self.observations[frame] = observation;
    }
}

impl FromIterator<BallObservation> for BallTrack {
    fn from_iter<I: IntoIterator<Item = BallObservation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
