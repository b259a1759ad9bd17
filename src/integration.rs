//! Integration module for connecting object detection backends with the
//! ball-track post-processing stages.
//!
//! This module provides the detection backend trait, a pipeline bundling
//! detection with selection, filtering and interpolation, and an on-disk
//! cache of raw tracks for skipping repeated inference runs.

mod builder;
mod detector;
mod pipeline;
mod stub;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, Frame};
pub use pipeline::{BallPipeline, PipelineConfig, PipelineError};
pub use stub::{StubError, load_stub, save_stub};
