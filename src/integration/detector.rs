//! Trait for object detection inference backends.

use crate::track::{ClassMap, Detection};

/// A single raw video frame handed to a detection backend.
///
/// Pixel layout is whatever the backend expects; the pipeline never
/// inspects the bytes.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Raw pixel bytes
    pub data: &'a [u8],
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

/// Trait for object detection inference backends.
///
/// Implement this trait to connect any detection model to the pipeline.
///
/// # Example
///
/// ```ignore
/// use gridiron_track::{ClassMap, Detection, DetectionSource, Frame};
///
/// struct MyDetector {
///     class_map: ClassMap,
///     // Your model here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect_batch(
///         &mut self,
///         frames: &[Frame<'_>],
///         conf_threshold: f32,
///     ) -> Result<Vec<Vec<Detection>>, Self::Error> {
///         // Run batched inference, one detection set per frame
///         Ok(frames.iter().map(|_| vec![]).collect())
///     }
///
///     fn class_map(&self) -> &ClassMap {
///         &self.class_map
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on a batch of frames.
    ///
    /// Returns one detection set per input frame, in frame order.
    /// Detections scoring below `conf_threshold` are dropped by the
    /// backend before they reach selection.
    fn detect_batch(
        &mut self,
        frames: &[Frame<'_>],
        conf_threshold: f32,
    ) -> Result<Vec<Vec<Detection>>, Self::Error>;

    /// Mapping from the model's class ids to class names.
    fn class_map(&self) -> &ClassMap;
}
