//! Per-frame selection of the ball candidate from raw detections.

use std::collections::HashMap;

use crate::track::bbox::BBox;

/// A single candidate detection produced by a detection backend.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Bounding box in TLBR format
    pub bbox: BBox,
    /// Class id as reported by the model
    pub class_id: u32,
    /// Detection confidence score in [0, 1]
    pub score: f32,
}

impl Detection {
    pub fn new(bbox: BBox, class_id: u32, score: f32) -> Self {
        Self {
            bbox,
            class_id,
            score,
        }
    }

    /// Build a detection from a raw TLBR coordinate slice.
    ///
    /// Returns `None` when the slice holds fewer than four coordinates,
    /// so malformed backend output is dropped instead of propagated.
    pub fn from_parts(coords: &[f32], class_id: u32, score: f32) -> Option<Self> {
        BBox::from_slice(coords).map(|bbox| Self::new(bbox, class_id, score))
    }
}

/// Mapping from a detection model's class ids to class names.
#[derive(Debug, Clone, Default)]
pub struct ClassMap {
    names: HashMap<u32, String>,
}

impl ClassMap {
    pub fn new(names: HashMap<u32, String>) -> Self {
        Self { names }
    }

    /// Class name for `class_id`, if the model defines one.
    pub fn name(&self, class_id: u32) -> Option<&str> {
        self.names.get(&class_id).map(String::as_str)
    }

    /// Case-insensitive reverse lookup of a class name.
    pub fn id_of(&self, name: &str) -> Option<u32> {
        self.names
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
    }
}

impl From<HashMap<u32, String>> for ClassMap {
    fn from(names: HashMap<u32, String>) -> Self {
        Self::new(names)
    }
}

impl FromIterator<(u32, String)> for ClassMap {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Select the ball candidate for one frame.
///
/// Picks the detection whose class name matches `ball_class`
/// (case-insensitive) with the strictly highest score; on equal scores
/// the earlier detection wins. Returns `None` when no candidate matches.
/// Pure per-frame selection, no cross-frame state.
pub fn select_ball(
    detections: &[Detection],
    names: &ClassMap,
    ball_class: &str,
) -> Option<Detection> {
    let mut best: Option<&Detection> = None;

    for detection in detections {
        let Some(class_name) = names.name(detection.class_id) else {
            continue;
        };
        if !class_name.eq_ignore_ascii_case(ball_class) {
            continue;
        }
        if best.is_none_or(|b| detection.score > b.score) {
            best = Some(detection);
        }
    }

    best.cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nfl_classes() -> ClassMap {
        [(0, "player".to_string()), (1, "Football".to_string())]
            .into_iter()
            .collect()
    }

    fn det(x1: f32, class_id: u32, score: f32) -> Detection {
        Detection::new(BBox::new(x1, 0.0, x1 + 10.0, 10.0), class_id, score)
    }

    #[test]
    fn test_highest_confidence_wins() {
        let detections = vec![det(0.0, 1, 0.6), det(100.0, 1, 0.9), det(200.0, 1, 0.7)];

        let chosen = select_ball(&detections, &nfl_classes(), "football").unwrap();
        assert_eq!(chosen.bbox.x1, 100.0);
    }

    #[test]
    fn test_tie_prefers_first_seen() {
        let detections = vec![det(0.0, 1, 0.8), det(100.0, 1, 0.8)];

        let chosen = select_ball(&detections, &nfl_classes(), "football").unwrap();
        assert_eq!(chosen.bbox.x1, 0.0);
    }

    #[test]
    fn test_class_match_is_case_insensitive() {
        let detections = vec![det(0.0, 1, 0.9)];

        assert!(select_ball(&detections, &nfl_classes(), "FOOTBALL").is_some());
        assert!(select_ball(&detections, &nfl_classes(), "football").is_some());
    }

    #[test]
    fn test_non_ball_classes_ignored() {
        let detections = vec![det(0.0, 0, 0.99), det(100.0, 7, 0.99)];

        assert!(select_ball(&detections, &nfl_classes(), "football").is_none());
    }

    #[test]
    fn test_empty_frame() {
        assert!(select_ball(&[], &nfl_classes(), "football").is_none());
    }

    #[test]
    fn test_from_parts_rejects_truncated_box() {
        assert!(Detection::from_parts(&[1.0, 2.0], 1, 0.9).is_none());
        assert!(Detection::from_parts(&[1.0, 2.0, 3.0, 4.0], 1, 0.9).is_some());
    }

    #[test]
    fn test_id_of() {
        let names = nfl_classes();
        assert_eq!(names.id_of("football"), Some(1));
        assert_eq!(names.id_of("PLAYER"), Some(0));
        assert_eq!(names.id_of("referee"), None);
    }
}
