//! Ball-track post-processing for American football footage.
//!
//! Given per-frame detector output, this crate selects a single ball
//! observation per frame, rejects detections that jump implausibly far
//! from the last trusted position, and fills the remaining gaps by
//! piecewise-linear interpolation, producing a dense track suitable for
//! rendering and motion analysis.
//!
//! The stages run strictly forward over a whole in-memory track:
//!
//! 1. a [`DetectionSource`] backend yields candidate detections per frame,
//! 2. [`select_ball`] keeps the highest-confidence ball candidate,
//! 3. [`reject_outliers`] discards implausible jumps,
//! 4. [`interpolate_track`] densifies the result.
//!
//! [`BallPipeline`] bundles the stages behind one entry point and can
//! cache raw tracks on disk to skip re-running the detector.

pub mod integration;
pub mod track;

pub use integration::{
    BallPipeline, DetectionBuilder, DetectionSource, Frame, PipelineConfig, PipelineError,
    StubError, load_stub, save_stub,
};
pub use track::{
    BBox, BallObservation, BallTrack, ClassMap, Detection, DrawConfig, DrawFilter,
    interpolate_track, reject_outliers, select_ball,
};
