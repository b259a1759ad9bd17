//! Displacement-based outlier rejection over a ball track.

use tracing::debug;

use crate::track::bbox::BBox;
use crate::track::observation::{BallObservation, BallTrack};

/// Discard detections implausibly far from the last accepted position.
///
/// Walks the track in frame order keeping a cursor on the most recently
/// accepted detection. A detection is rejected when its top-left corner
/// lies more than `base_distance * gap` pixels from the last accepted
/// one, where `gap` is the number of frames elapsed since that
/// acceptance; the ball can legitimately travel further the longer it
/// has gone unobserved. Rejected frames become [`BallObservation::Absent`]
/// and do not advance the cursor, so one false acceptance cannot cascade
/// into rejecting the rest of the track.
///
/// The first detection in the track is always accepted. The output has
/// the same length as the input and never has more detections.
pub fn reject_outliers(track: &BallTrack, base_distance: f32) -> BallTrack {
    let mut out = track.clone();
    let mut last_good: Option<(usize, BBox)> = None;
    let mut rejected = 0usize;

    for frame in 0..out.len() {
        let Some(current) = out.bbox_at(frame).copied() else {
            continue;
        };

        match last_good {
            None => {
                last_good = Some((frame, current));
            }
            Some((anchor_frame, anchor_box)) => {
                let gap = (frame - anchor_frame) as f32;
                let allowed = base_distance * gap;
                if current.top_left_distance(&anchor_box) > allowed {
                    out.set(frame, BallObservation::Absent);
                    rejected += 1;
                } else {
                    last_good = Some((frame, current));
                }
            }
        }
    }

    if rejected > 0 {
        debug!(rejected, "discarded implausible ball detections");
    }
    out
}
