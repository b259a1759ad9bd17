//! Gap filling over a filtered ball track.

use ndarray::{Array1, Array2, ArrayView1};

use crate::track::bbox::BBox;
use crate::track::observation::{BallObservation, BallTrack};

/// Fill every gap in the track by piecewise-linear interpolation.
///
/// Each of the four box coordinates is interpolated independently over
/// the frame-index axis between the known detections. Frames before the
/// first detection or after the last take the nearest detection's box
/// unchanged. The result is fully dense: every frame is
/// [`BallObservation::Present`], unless the input has no detections at
/// all, in which case it is returned unchanged.
///
/// Coordinates stay floating-point; rounding to pixel integers is a
/// rendering-time concern. Applying this to an already dense track is
/// the identity.
pub fn interpolate_track(track: &BallTrack) -> BallTrack {
    let known: Vec<usize> = track
        .iter()
        .enumerate()
        .filter_map(|(frame, obs)| obs.is_present().then_some(frame))
        .collect();

    if known.is_empty() {
        return track.clone();
    }

    let mut values = Array2::<f32>::zeros((known.len(), 4));
    for (row, &frame) in known.iter().enumerate() {
        if let Some(bbox) = track.bbox_at(frame) {
            values[[row, 0]] = bbox.x1;
            values[[row, 1]] = bbox.y1;
            values[[row, 2]] = bbox.x2;
            values[[row, 3]] = bbox.y2;
        }
    }

    let mut dense = Array2::<f32>::zeros((track.len(), 4));
    for coord in 0..4 {
        let series = interp_series(&known, values.column(coord), track.len());
        dense.column_mut(coord).assign(&series);
    }

    (0..track.len())
        .map(|frame| {
            BallObservation::Present(BBox::new(
                dense[[frame, 0]],
                dense[[frame, 1]],
                dense[[frame, 2]],
                dense[[frame, 3]],
            ))
        })
        .collect()
}

/// Piecewise-linear interpolation of a sampled series over `0..len`.
///
/// `xs` holds the strictly increasing sample indices, `ys` their values.
/// Indices outside `[xs[0], xs[last]]` hold the nearest sample flat.
/// Sample indices reproduce their value exactly.
fn interp_series(xs: &[usize], ys: ArrayView1<'_, f32>, len: usize) -> Array1<f32> {
    let mut out = Array1::zeros(len);
    let first = xs[0];
    let last = xs[xs.len() - 1];
    let mut seg = 0usize;

    for i in 0..len {
        out[i] = if i <= first {
            ys[0]
        } else if i >= last {
            ys[xs.len() - 1]
        } else {
            while xs[seg + 1] < i {
                seg += 1;
            }
            if xs[seg + 1] == i {
                ys[seg + 1]
            } else {
                let (x0, x1) = (xs[seg] as f32, xs[seg + 1] as f32);
                let t = (i as f32 - x0) / (x1 - x0);
                ys[seg] + t * (ys[seg + 1] - ys[seg])
            }
        };
    }
    out
}
