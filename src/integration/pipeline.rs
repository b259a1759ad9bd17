//! Pipeline combining a detection backend with ball-track post-processing.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::integration::detector::{DetectionSource, Frame};
use crate::integration::stub::{self, StubError};
use crate::track::{BallObservation, BallTrack, interpolate_track, reject_outliers, select_ball};

/// Configuration for [`BallPipeline`].
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Class name of the ball in the detection model (case-insensitive).
    pub ball_class: String,
    /// Confidence threshold applied by the detection backend.
    pub conf_threshold: f32,
    /// Maximum plausible ball displacement in pixels per frame of gap.
    pub base_distance: f32,
    /// Number of frames per inference batch.
    pub batch_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            ball_class: "ball".to_string(),
            conf_threshold: 0.5,
            base_distance: 50.0,
            batch_size: 20,
        }
    }
}

/// Error from running the ball pipeline.
#[derive(Debug, Error)]
pub enum PipelineError<E> {
    /// The detection backend failed. Backend errors are fatal and
    /// surfaced unmodified, never retried.
    #[error("ball detection failed: {0}")]
    Detector(E),
    /// The stub cache could not be written.
    #[error(transparent)]
    Stub(#[from] StubError),
}

/// Runs detection over a whole video and refines the resulting track.
///
/// Bundles any [`DetectionSource`] with per-frame ball selection,
/// displacement-based outlier rejection and gap interpolation. The whole
/// frame sequence is processed up front; there is no streaming mode.
pub struct BallPipeline<D: DetectionSource> {
    detector: D,
    config: PipelineConfig,
}

impl<D: DetectionSource> BallPipeline<D> {
    /// Create a new pipeline with the given detector and configuration.
    pub fn new(detector: D, config: PipelineConfig) -> Self {
        Self { detector, config }
    }

    /// Create a new pipeline with the default configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self::new(detector, PipelineConfig::default())
    }

    /// Detect and select the ball in every frame.
    ///
    /// Frames are run through the backend in batches of
    /// `config.batch_size`; each frame's observation is the
    /// highest-confidence detection matching `config.ball_class`, or
    /// [`BallObservation::Absent`]. The returned track has exactly one
    /// observation per input frame and is not yet filtered.
    pub fn raw_track(
        &mut self,
        frames: &[Frame<'_>],
    ) -> Result<BallTrack, PipelineError<D::Error>> {
        if self
            .detector
            .class_map()
            .id_of(&self.config.ball_class)
            .is_none()
        {
            warn!(
                ball_class = %self.config.ball_class,
                "ball class not present in the model's class map"
            );
        }

        let mut observations = Vec::with_capacity(frames.len());
        for batch in frames.chunks(self.config.batch_size.max(1)) {
            let batch_detections = self
                .detector
                .detect_batch(batch, self.config.conf_threshold)
                .map_err(PipelineError::Detector)?;
            debug_assert_eq!(batch_detections.len(), batch.len());

            for frame_detections in &batch_detections {
                let observation = select_ball(
                    frame_detections,
                    self.detector.class_map(),
                    &self.config.ball_class,
                )
                .map_or(BallObservation::Absent, |d| {
                    BallObservation::Present(d.bbox)
                });
                observations.push(observation);
            }
        }

        let track = BallTrack::new(observations);
        debug!(
            frames = track.len(),
            present = track.present_count(),
            "built raw ball track"
        );
        Ok(track)
    }

    /// Like [`raw_track`](Self::raw_track), backed by an on-disk stub.
    ///
    /// A stub at `stub_path` is reused only when its frame count matches
    /// the input; a missing, unreadable or mismatched stub triggers
    /// recomputation and is overwritten.
    pub fn raw_track_cached(
        &mut self,
        frames: &[Frame<'_>],
        stub_path: &Path,
    ) -> Result<BallTrack, PipelineError<D::Error>> {
        match stub::load_stub(stub_path) {
            Ok(track) if track.len() == frames.len() => {
                info!(path = %stub_path.display(), "reusing cached ball track");
                return Ok(track);
            }
            Ok(track) => {
                debug!(
                    cached = track.len(),
                    expected = frames.len(),
                    "stub frame count mismatch, recomputing"
                );
            }
            Err(err) => {
                debug!(error = %err, "no usable stub, recomputing");
            }
        }

        let track = self.raw_track(frames)?;
        stub::save_stub(stub_path, &track)?;
        Ok(track)
    }

    /// Detect, select, filter and interpolate in one call.
    pub fn track(&mut self, frames: &[Frame<'_>]) -> Result<BallTrack, PipelineError<D::Error>> {
        let raw = self.raw_track(frames)?;
        Ok(self.refine(&raw))
    }

    /// Like [`track`](Self::track), backed by an on-disk stub for the
    /// raw detection results. Only the raw track is cached; filtering
    /// and interpolation always rerun.
    pub fn track_cached(
        &mut self,
        frames: &[Frame<'_>],
        stub_path: &Path,
    ) -> Result<BallTrack, PipelineError<D::Error>> {
        let raw = self.raw_track_cached(frames, stub_path)?;
        Ok(self.refine(&raw))
    }

    /// Apply outlier rejection and gap interpolation to a raw track.
    pub fn refine(&self, raw: &BallTrack) -> BallTrack {
        let filtered = reject_outliers(raw, self.config.base_distance);
        interpolate_track(&filtered)
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get the pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}
