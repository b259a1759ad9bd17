//! On-disk cache of previously computed raw ball tracks ("stubs").

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::track::BallTrack;

/// Failure to read or write a track stub.
#[derive(Debug, Error)]
pub enum StubError {
    /// The stub file could not be read or written.
    #[error("stub i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The stub file does not hold a valid track.
    #[error("stub is not a valid track: {0}")]
    Format(#[from] serde_json::Error),
}

/// Load a previously saved track from `path`.
///
/// Callers are responsible for checking that the loaded track's frame
/// count matches the video before trusting it.
pub fn load_stub(path: &Path) -> Result<BallTrack, StubError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Persist a raw track to `path` so later runs can skip detection.
///
/// Missing parent directories are created.
pub fn save_stub(path: &Path, track: &BallTrack) -> Result<(), StubError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string(track)?)?;
    debug!(path = %path.display(), frames = track.len(), "saved ball track stub");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::{BBox, BallObservation};

    fn sample_track() -> BallTrack {
        BallTrack::new(vec![
            BallObservation::Present(BBox::new(1.0, 2.0, 3.0, 4.0)),
            BallObservation::Absent,
            BallObservation::Present(BBox::new(5.0, 6.0, 7.0, 8.0)),
        ])
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ball_track_stub.json");

        let track = sample_track();
        save_stub(&path, &track).unwrap();
        assert_eq!(load_stub(&path).unwrap(), track);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stubs/nested/ball_track_stub.json");

        save_stub(&path, &sample_track()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(load_stub(&path), Err(StubError::Io(_))));
    }

    #[test]
    fn test_load_garbage_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        fs::write(&path, "not a track").unwrap();

        assert!(matches!(load_stub(&path), Err(StubError::Format(_))));
    }
}
